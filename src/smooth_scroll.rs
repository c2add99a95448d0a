//! Smooth scrolling for same-page anchors.
//!
//! Only anchors whose fragment names an element on the page are taken over;
//! everything else keeps the browser's default jump.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Element id named by an in-page `href`, if it names one at all.
///
/// `"#"` and `""` name nothing. Anything not starting with `#` is not an
/// in-page link.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision<'a> {
    /// Suppress the jump and animate to this element id.
    Smooth(&'a str),
    /// Leave the click to the browser.
    Default,
}

/// Decide how to handle a click on an anchor with `href`, given a lookup
/// reporting whether an element id exists.
#[must_use]
pub fn decide<'a>(href: &'a str, exists: impl FnOnce(&str) -> bool) -> ScrollDecision<'a> {
    match fragment_id(href) {
        Some(id) if exists(id) => ScrollDecision::Smooth(id),
        _ => ScrollDecision::Default,
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(document: &web_sys::Document) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

    use crate::consts::IN_PAGE_ANCHOR_SELECTOR;
    use crate::dom::{Scope, query_all};
    use crate::listener::Listener;

    let anchors = query_all::<Element>(Scope::Document(document), IN_PAGE_ANCHOR_SELECTOR)?;
    let mut listeners = Vec::with_capacity(anchors.len());
    for anchor in anchors {
        let doc = document.clone();
        let anchor_for_cb = anchor.clone();
        listeners.push(Listener::new(&anchor, "click", move |ev| {
            let href = anchor_for_cb.get_attribute("href").unwrap_or_default();
            let mut target = None;
            let decision = decide(&href, |id| {
                target = doc.get_element_by_id(id);
                target.is_some()
            });
            if let (ScrollDecision::Smooth(_), Some(target)) = (decision, target) {
                ev.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?);
    }
    Ok(listeners)
}
