use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#tours"), Some("tours"));
    assert_eq!(fragment_id("#faq-2"), Some("faq-2"));
}

#[test]
fn bare_hash_and_empty_name_nothing() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn non_fragment_href_is_not_in_page() {
    assert_eq!(fragment_id("/contact#form"), None);
    assert_eq!(fragment_id("https://example.com"), None);
}

#[test]
fn existing_target_scrolls_smoothly() {
    assert_eq!(decide("#tours", |id| id == "tours"), ScrollDecision::Smooth("tours"));
}

#[test]
fn missing_target_falls_back_to_default() {
    assert_eq!(decide("#gone", |_| false), ScrollDecision::Default);
}

#[test]
fn bare_hash_never_consults_lookup() {
    let mut asked = false;
    let decision = decide("#", |_| {
        asked = true;
        true
    });
    assert_eq!(decision, ScrollDecision::Default);
    assert!(!asked);
}
