//! In-memory [`Node`] used by widget tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::Node;

#[derive(Debug, Default)]
struct FakeState {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    scroll_height: i32,
}

/// Cheap-to-clone handle; clones observe the same element, like `HtmlElement`.
#[derive(Debug, Clone, Default)]
pub struct FakeNode(Rc<RefCell<FakeState>>);

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::new();
        for class in classes {
            node.set_class(class, true);
        }
        node
    }

    pub fn with_scroll_height(height: i32) -> Self {
        let node = Self::new();
        node.0.borrow_mut().scroll_height = height;
        node
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }
}

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Node for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut state = self.0.borrow_mut();
        if present {
            state.classes.insert(class.to_owned());
        } else {
            state.classes.remove(class);
        }
    }

    fn style(&self, property: &str) -> String {
        self.0.borrow().styles.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: Option<&str>) {
        let mut state = self.0.borrow_mut();
        match value {
            Some(value) => state.styles.insert(property.to_owned(), value.to_owned()),
            None => state.styles.remove(property),
        };
    }

    fn scroll_height(&self) -> i32 {
        self.0.borrow().scroll_height
    }
}
