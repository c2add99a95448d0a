//! Booking and contact form interception.
//!
//! Both forms have their native submission suppressed. Nothing is sent yet;
//! each submission is logged with the visitor's name escaped for display.

use crate::consts::{BOOKING_FORM_ID, CONTACT_FORM_ID};
use crate::sanitize::sanitize_input;

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Booking, FormKind::Contact];

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Booking => BOOKING_FORM_ID,
            Self::Contact => CONTACT_FORM_ID,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Booking => "Booking",
            Self::Contact => "Contact",
        }
    }
}

/// Log line for an intercepted submission.
#[must_use]
pub fn submission_message(kind: FormKind, name: Option<&str>) -> String {
    let safe_name = sanitize_input(name);
    if safe_name.is_empty() {
        format!("{} form submitted", kind.label())
    } else {
        format!("{} form submitted (name: {safe_name})", kind.label())
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(document: &web_sys::Document) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use web_sys::{Element, HtmlInputElement};

    use crate::consts::FORM_NAME_FIELD_SELECTOR;
    use crate::dom::{Scope, query};
    use crate::listener::Listener;

    let mut listeners = Vec::new();
    for kind in FormKind::ALL {
        let Some(form) = document.get_element_by_id(kind.element_id()) else {
            log::debug!("forms: #{} not on page", kind.element_id());
            continue;
        };
        let form_for_cb: Element = form.clone();
        listeners.push(Listener::new(&form, "submit", move |ev| {
            ev.prevent_default();
            let name = match query::<HtmlInputElement>(Scope::Element(&form_for_cb), FORM_NAME_FIELD_SELECTOR) {
                Ok(field) => field.map(|input| input.value()),
                Err(err) => {
                    log::warn!("forms: {err}");
                    None
                }
            };
            log::info!("{}", submission_message(kind, name.as_deref()));
        })?);
    }
    Ok(listeners)
}
