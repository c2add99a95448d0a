use super::*;

#[test]
fn form_ids_match_page_markup() {
    assert_eq!(FormKind::Booking.element_id(), "simpleBookingForm");
    assert_eq!(FormKind::Contact.element_id(), "contactForm");
}

#[test]
fn message_without_name_names_the_form() {
    assert_eq!(submission_message(FormKind::Booking, None), "Booking form submitted");
    assert_eq!(submission_message(FormKind::Contact, Some("")), "Contact form submitted");
}

#[test]
fn message_includes_sanitized_name() {
    assert_eq!(
        submission_message(FormKind::Contact, Some("Ana <b>")),
        "Contact form submitted (name: Ana &lt;b&gt;)"
    );
}

#[test]
fn message_never_echoes_markup() {
    let msg = submission_message(FormKind::Booking, Some("<script>alert('x')</script>"));
    assert!(!msg.contains('<'));
    assert!(!msg.contains('\''));
}
