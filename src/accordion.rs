//! FAQ accordion items.
//!
//! Each header drives the content block right after it. Expanding pins
//! `max-height` to the content's natural height so the CSS transition has a
//! target; collapsing clears it. The header's own `active` class flips on
//! every click independently of the panel, so a header rendered `active`
//! over a collapsed panel stays out of phase. Items do not affect each other.

use crate::consts::{ACTIVE_CLASS, MAX_HEIGHT_PROPERTY};
use crate::dom::Node;

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded { height_px: i32 },
}

pub struct AccordionItem<N> {
    header: N,
    content: Option<N>,
    state: PanelState,
}

impl<N: Node> AccordionItem<N> {
    /// An inline `max-height` already on the content means it was rendered open.
    /// Without content, the header's `active` class decides.
    pub fn new(header: N, content: Option<N>) -> Self {
        let open = match &content {
            Some(content) => !content.style(MAX_HEIGHT_PROPERTY).is_empty(),
            None => header.has_class(ACTIVE_CLASS),
        };
        let state = match (&content, open) {
            (Some(content), true) => PanelState::Expanded { height_px: content.scroll_height() },
            (None, true) => PanelState::Expanded { height_px: 0 },
            (_, false) => PanelState::Collapsed,
        };
        Self { header, content, state }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn toggle(&mut self) {
        let next = match self.state {
            PanelState::Expanded { .. } => PanelState::Collapsed,
            PanelState::Collapsed => PanelState::Expanded {
                height_px: self.content.as_ref().map_or(0, N::scroll_height),
            },
        };

        self.header.set_class(ACTIVE_CLASS, !self.header.has_class(ACTIVE_CLASS));
        if let Some(content) = &self.content {
            match next {
                PanelState::Expanded { height_px } => {
                    content.set_style(MAX_HEIGHT_PROPERTY, Some(&format!("{height_px}px")));
                }
                PanelState::Collapsed => content.set_style(MAX_HEIGHT_PROPERTY, None),
            }
        }
        self.state = next;
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn mount(document: &web_sys::Document) -> Result<Vec<crate::listener::Listener>, crate::error::SiteError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::consts::ACCORDION_HEADER_SELECTOR;
    use crate::dom::{Scope, query_all};
    use crate::listener::Listener;

    let headers = query_all::<HtmlElement>(Scope::Document(document), ACCORDION_HEADER_SELECTOR)?;
    let mut listeners = Vec::with_capacity(headers.len());
    for header in headers {
        let content = match header.next_element_sibling().map(JsCast::dyn_into::<HtmlElement>) {
            Some(Ok(content)) => Some(content),
            _ => None,
        };
        let item = Rc::new(RefCell::new(AccordionItem::new(header.clone(), content)));
        listeners.push(Listener::new(&header, "click", move |_| item.borrow_mut().toggle())?);
    }
    Ok(listeners)
}
