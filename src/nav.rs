//! Mobile navigation drawer.
//!
//! The trigger toggles the panel and overlay together and locks page scroll
//! while the drawer is open. Clicking the overlay or any link in the panel
//! closes it.

use crate::consts::ACTIVE_CLASS;
use crate::dom::{Node, ScrollLock};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

pub struct NavMenu<N> {
    panel: N,
    overlay: N,
    lock: ScrollLock<N>,
    state: NavState,
}

impl<N: Node> NavMenu<N> {
    /// Adopt the drawer elements; server-rendered `active` on the panel means open.
    pub fn new(panel: N, overlay: N, lock: ScrollLock<N>) -> Self {
        let state = if panel.has_class(ACTIVE_CLASS) { NavState::Open } else { NavState::Closed };
        Self { panel, overlay, lock, state }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn toggle(&mut self) {
        match self.state {
            NavState::Open => self.close(),
            NavState::Closed => self.open(),
        }
    }

    pub fn open(&mut self) {
        self.apply(NavState::Open);
    }

    pub fn close(&mut self) {
        self.apply(NavState::Closed);
    }

    fn apply(&mut self, next: NavState) {
        let open = next == NavState::Open;
        self.panel.set_class(ACTIVE_CLASS, open);
        self.overlay.set_class(ACTIVE_CLASS, open);
        self.lock.set(open);
        self.state = next;
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(document: &web_sys::Document) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, HtmlElement};

    use crate::consts::{NAV_OVERLAY_SELECTOR, NAV_PANEL_SELECTOR, NAV_TRIGGER_SELECTOR};
    use crate::dom::{Scope, query, query_all};
    use crate::listener::Listener;

    let scope = Scope::Document(document);
    let (Some(trigger), Some(panel), Some(overlay), Some(body)) = (
        query::<HtmlElement>(scope, NAV_TRIGGER_SELECTOR)?,
        query::<HtmlElement>(scope, NAV_PANEL_SELECTOR)?,
        query::<HtmlElement>(scope, NAV_OVERLAY_SELECTOR)?,
        document.body(),
    ) else {
        log::debug!("nav: trigger, panel, overlay or body missing; skipping");
        return Ok(Vec::new());
    };

    let links = query_all::<Element>(Scope::Element(&panel), "a")?;
    let menu = Rc::new(RefCell::new(NavMenu::new(panel, overlay.clone(), ScrollLock::new(body))));
    let mut listeners = Vec::with_capacity(links.len() + 2);

    let on_trigger = Rc::clone(&menu);
    listeners.push(Listener::new(&trigger, "click", move |ev| {
        ev.stop_propagation();
        on_trigger.borrow_mut().toggle();
    })?);

    let on_overlay = Rc::clone(&menu);
    listeners.push(Listener::new(&overlay, "click", move |_| on_overlay.borrow_mut().close())?);

    for link in &links {
        let on_link = Rc::clone(&menu);
        listeners.push(Listener::new(link, "click", move |_| on_link.borrow_mut().close())?);
    }

    log::debug!("nav: bound with {} links", links.len());
    Ok(listeners)
}
