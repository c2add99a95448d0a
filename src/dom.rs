//! Element abstraction shared by every widget.
//!
//! Widgets hold their elements as `N: Node` and mutate them only through
//! this trait, so every state transition runs the same way against a real
//! `HtmlElement` in the browser and against an in-memory node in tests.
//! The browser implementation and the `$` / `$all` style query helpers live
//! behind the `hydrate` feature.

use crate::consts::{OVERFLOW_LOCKED, OVERFLOW_PROPERTY};

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// The slice of element behavior the widgets rely on.
pub trait Node {
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, class: &str, present: bool);

    /// Inline style value for `property`; empty when unset.
    fn style(&self, property: &str) -> String;

    /// Set an inline style, or clear it with `None`.
    fn set_style(&self, property: &str, value: Option<&str>);

    /// Natural content height in CSS px.
    fn scroll_height(&self) -> i32;
}

/// Page scroll lock, applied as `overflow: hidden` on `<body>`.
#[derive(Debug, Clone)]
pub struct ScrollLock<N> {
    body: N,
}

impl<N: Node> ScrollLock<N> {
    pub fn new(body: N) -> Self {
        Self { body }
    }

    pub fn set(&self, locked: bool) {
        self.body.set_style(OVERFLOW_PROPERTY, locked.then_some(OVERFLOW_LOCKED));
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.body.style(OVERFLOW_PROPERTY) == OVERFLOW_LOCKED
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Scope, query, query_all};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, NodeList};

    use super::Node;
    use crate::error::SiteError;

    /// Root for a selector lookup.
    #[derive(Clone, Copy)]
    pub enum Scope<'a> {
        Document(&'a Document),
        Element(&'a Element),
    }

    /// First element matching `selector` within `scope` that is a `T`.
    pub fn query<T: JsCast>(scope: Scope<'_>, selector: &str) -> Result<Option<T>, SiteError> {
        let found = match scope {
            Scope::Document(doc) => doc.query_selector(selector),
            Scope::Element(el) => el.query_selector(selector),
        }
        .map_err(|err| SiteError::js("querySelector", err))?;
        match found.map(JsCast::dyn_into::<T>) {
            Some(Ok(el)) => Ok(Some(el)),
            _ => Ok(None),
        }
    }

    /// Every element matching `selector` within `scope` that is a `T`, in document order.
    pub fn query_all<T: JsCast>(scope: Scope<'_>, selector: &str) -> Result<Vec<T>, SiteError> {
        let list: NodeList = match scope {
            Scope::Document(doc) => doc.query_selector_all(selector),
            Scope::Element(el) => el.query_selector_all(selector),
        }
        .map_err(|err| SiteError::js("querySelectorAll", err))?;

        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.item(i)
                && let Ok(el) = node.dyn_into::<T>()
            {
                out.push(el);
            }
        }
        Ok(out)
    }

    impl Node for HtmlElement {
        fn has_class(&self, class: &str) -> bool {
            self.class_list().contains(class)
        }

        fn set_class(&self, class: &str, present: bool) {
            if let Err(err) = self.class_list().toggle_with_force(class, present) {
                log::warn!("{}", SiteError::js("classList.toggle", err));
            }
        }

        fn style(&self, property: &str) -> String {
            HtmlElement::style(self).get_property_value(property).unwrap_or_default()
        }

        fn set_style(&self, property: &str, value: Option<&str>) {
            let style = HtmlElement::style(self);
            let result = match value {
                Some(value) => style.set_property(property, value),
                None => style.remove_property(property).map(|_| ()),
            };
            if let Err(err) = result {
                log::warn!("{}", SiteError::js("style update", err));
            }
        }

        fn scroll_height(&self) -> i32 {
            Element::scroll_height(self)
        }
    }
}
