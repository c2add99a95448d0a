//! One-shot reveal of `[data-animate]` elements as they scroll into view.
//!
//! Every tagged element starts `Observing`. The first intersection report at
//! or above the threshold adds `animated` and moves it to `Revealed`, which is
//! terminal: the caller unsubscribes it and later reports are ignored. Once
//! nothing is left observing, the whole subscription can be dropped.

use crate::consts::{ANIMATED_CLASS, REVEAL_RATIO_TOLERANCE};
use crate::dom::Node;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Observing,
    Revealed,
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Visible fraction, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Just revealed; stop observing this element.
    Revealed,
    /// Not visible enough yet; keep observing.
    Pending,
    /// Already revealed or unknown; nothing to do.
    Ignored,
}

pub struct RevealTracker<N> {
    items: Vec<(N, RevealState)>,
    threshold: f64,
}

impl<N: Node> RevealTracker<N> {
    pub fn new(items: Vec<N>, threshold: f64) -> Self {
        Self {
            items: items.into_iter().map(|node| (node, RevealState::Observing)).collect(),
            threshold,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.items.get(index).map(|(_, state)| *state)
    }

    /// Elements still waiting to be revealed.
    #[must_use]
    pub fn observing(&self) -> usize {
        self.items.iter().filter(|(_, state)| *state == RevealState::Observing).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.observing() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.items.iter().map(|(node, _)| node)
    }

    /// Apply one intersection report to item `index`.
    ///
    /// Reveals when the item is intersecting and its ratio is within
    /// [`REVEAL_RATIO_TOLERANCE`] of the threshold, so a 0.2 threshold accepts
    /// a reported 0.1995.
    pub fn on_visibility(&mut self, index: usize, visibility: Visibility) -> RevealOutcome {
        let Some((node, state)) = self.items.get_mut(index) else {
            return RevealOutcome::Ignored;
        };
        if *state == RevealState::Revealed {
            return RevealOutcome::Ignored;
        }
        if !visibility.intersecting || visibility.ratio + REVEAL_RATIO_TOLERANCE < self.threshold {
            return RevealOutcome::Pending;
        }
        node.set_class(ANIMATED_CLASS, true);
        *state = RevealState::Revealed;
        RevealOutcome::Revealed
    }
}

impl<N: Node + PartialEq> RevealTracker<N> {
    #[must_use]
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.items.iter().position(|(n, _)| n == node)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::RevealObserver;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RevealOutcome, RevealTracker, Visibility};
    use crate::consts::ANIMATE_SELECTOR;
    use crate::dom::{Scope, query_all};
    use crate::error::SiteError;

    type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    /// Live `IntersectionObserver` subscription; disconnects on drop.
    pub struct RevealObserver {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl RevealObserver {
        /// Observe every `[data-animate]` element. `None` when there are none.
        pub fn mount(document: &Document, threshold: f64) -> Result<Option<Self>, SiteError> {
            let items = query_all::<HtmlElement>(Scope::Document(document), ANIMATE_SELECTOR)?;
            if items.is_empty() {
                return Ok(None);
            }

            let tracker = Rc::new(RefCell::new(RevealTracker::new(items, threshold)));
            let tracker_for_cb = Rc::clone(&tracker);
            let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let mut tracker = tracker_for_cb.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    let Some(index) = tracker.index_of(&target) else {
                        continue;
                    };
                    let visibility =
                        Visibility { intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
                    if tracker.on_visibility(index, visibility) == RevealOutcome::Revealed {
                        observer.unobserve(&target);
                    }
                }
                if tracker.is_complete() {
                    observer.disconnect();
                    log::debug!("reveal: all {} elements revealed; observer disconnected", tracker.len());
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| SiteError::js("IntersectionObserver", err))?;

            for node in tracker.borrow().nodes() {
                observer.observe(node);
            }
            log::debug!("reveal: observing {} elements", tracker.borrow().len());
            Ok(Some(Self { observer, _callback: callback }))
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
