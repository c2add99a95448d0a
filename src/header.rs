//! Header styling driven by vertical scroll position.

use crate::consts::SCROLLED_CLASS;
use crate::dom::Node;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

pub struct HeaderScroll<N> {
    header: N,
    threshold_px: f64,
    scrolled: bool,
}

impl<N: Node> HeaderScroll<N> {
    pub fn new(header: N, threshold_px: f64) -> Self {
        let scrolled = header.has_class(SCROLLED_CLASS);
        Self { header, threshold_px, scrolled }
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Sync the `scrolled` class to `scroll_y`. Returns whether the state changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold_px;
        self.header.set_class(SCROLLED_CLASS, scrolled);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    threshold_px: f64,
) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::HtmlElement;

    use crate::consts::HEADER_SELECTOR;
    use crate::dom::{Scope, query};
    use crate::error::SiteError;
    use crate::listener::Listener;

    let Some(header) = query::<HtmlElement>(Scope::Document(document), HEADER_SELECTOR)? else {
        log::debug!("header: no <header> element; skipping");
        return Ok(Vec::new());
    };

    let state = Rc::new(RefCell::new(HeaderScroll::new(header, threshold_px)));
    let scroll_y = window.scroll_y().map_err(|err| SiteError::js("scrollY", err))?;
    state.borrow_mut().on_scroll(scroll_y);

    let win = window.clone();
    let listener = Listener::new(window, "scroll", move |_| match win.scroll_y() {
        Ok(y) => {
            state.borrow_mut().on_scroll(y);
        }
        Err(err) => log::warn!("header: {}", SiteError::js("scrollY", err)),
    })?;
    Ok(vec![listener])
}
