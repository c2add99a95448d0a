//! Modal dialogs opened and closed by data-attribute triggers.
//!
//! `data-modal-open="<id>"` opens the modal with that id; `data-modal-close`
//! closes the nearest enclosing `.modal`. Several triggers can point at one
//! modal, so containers are registered once and triggers hold a [`ModalId`].

use crate::consts::ACTIVE_CLASS;
use crate::dom::{Node, ScrollLock};

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(usize);

struct Modal<N> {
    container: N,
    state: ModalState,
}

pub struct ModalRegistry<N> {
    lock: ScrollLock<N>,
    modals: Vec<Modal<N>>,
}

impl<N: Node + PartialEq> ModalRegistry<N> {
    pub fn new(lock: ScrollLock<N>) -> Self {
        Self { lock, modals: Vec::new() }
    }

    /// Id for `container`, registering it on first sight.
    pub fn register(&mut self, container: N) -> ModalId {
        if let Some(idx) = self.modals.iter().position(|m| m.container == container) {
            return ModalId(idx);
        }
        let state = if container.has_class(ACTIVE_CLASS) { ModalState::Open } else { ModalState::Closed };
        self.modals.push(Modal { container, state });
        ModalId(self.modals.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    #[must_use]
    pub fn state(&self, id: ModalId) -> Option<ModalState> {
        self.modals.get(id.0).map(|m| m.state)
    }

    pub fn open(&mut self, id: ModalId) {
        self.apply(id, ModalState::Open);
    }

    pub fn close(&mut self, id: ModalId) {
        self.apply(id, ModalState::Closed);
    }

    fn apply(&mut self, id: ModalId, next: ModalState) {
        let Some(modal) = self.modals.get_mut(id.0) else {
            return;
        };
        let open = next == ModalState::Open;
        modal.container.set_class(ACTIVE_CLASS, open);
        modal.state = next;
        self.lock.set(open);
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(document: &web_sys::Document) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    use crate::consts::{MODAL_CLOSE_ATTR, MODAL_OPEN_ATTR, MODAL_SELECTOR};
    use crate::dom::{Scope, query_all};
    use crate::error::SiteError;
    use crate::listener::Listener;

    let scope = Scope::Document(document);
    let openers = query_all::<Element>(scope, &format!("[{MODAL_OPEN_ATTR}]"))?;
    let closers = query_all::<Element>(scope, &format!("[{MODAL_CLOSE_ATTR}]"))?;
    if openers.is_empty() && closers.is_empty() {
        return Ok(Vec::new());
    }
    let Some(body) = document.body() else {
        log::debug!("modal: no <body>; skipping");
        return Ok(Vec::new());
    };

    let registry = Rc::new(RefCell::new(ModalRegistry::new(ScrollLock::new(body))));
    let mut listeners = Vec::with_capacity(openers.len() + closers.len());

    for btn in openers {
        let target_id = btn.get_attribute(MODAL_OPEN_ATTR).unwrap_or_default();
        let modal = match document.get_element_by_id(&target_id).map(JsCast::dyn_into::<HtmlElement>) {
            Some(Ok(modal)) => modal,
            _ => {
                log::debug!("modal: no modal #{target_id} for open trigger");
                continue;
            }
        };
        let id = registry.borrow_mut().register(modal);
        let on_open = Rc::clone(&registry);
        listeners.push(Listener::new(&btn, "click", move |_| on_open.borrow_mut().open(id))?);
    }

    for btn in closers {
        let enclosing = btn.closest(MODAL_SELECTOR).map_err(|err| SiteError::js("closest", err))?;
        let modal = match enclosing.map(JsCast::dyn_into::<HtmlElement>) {
            Some(Ok(modal)) => modal,
            _ => {
                log::debug!("modal: close trigger outside any {MODAL_SELECTOR}");
                continue;
            }
        };
        let id = registry.borrow_mut().register(modal);
        let on_close = Rc::clone(&registry);
        listeners.push(Listener::new(&btn, "click", move |_| on_close.borrow_mut().close(id))?);
    }

    log::debug!("modal: {} modals bound", registry.borrow().len());
    Ok(listeners)
}
