//! Deferred loading of the non-critical icon stylesheet.
//!
//! The `<link>` is appended to `<head>` once the browser reports idle time,
//! or after a fixed delay where `requestIdleCallback` does not exist. It is
//! injected at most once per loader, and never if the page already links
//! the same URL.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Idle,
    Timeout { ms: u32 },
}

impl Schedule {
    #[must_use]
    pub fn choose(idle_available: bool, fallback_ms: u32) -> Self {
        if idle_available { Self::Idle } else { Self::Timeout { ms: fallback_ms } }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Injected,
}

#[derive(Debug, Clone)]
pub struct DeferredStylesheet {
    href: String,
    state: LoadState,
}

impl DeferredStylesheet {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), state: LoadState::Pending }
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The URL to inject, handed out exactly once.
    pub fn take(&mut self) -> Option<&str> {
        match self.state {
            LoadState::Injected => None,
            LoadState::Pending => {
                self.state = LoadState::Injected;
                Some(&self.href)
            }
        }
    }
}

/// Whether any of the page's existing stylesheet `href`s is exactly `href`.
#[must_use]
pub fn is_linked<I>(existing: I, href: &str) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    existing.into_iter().any(|candidate| candidate.as_ref() == href)
}

#[cfg(feature = "hydrate")]
pub use browser::DeferredLoad;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, Window};

    use super::{DeferredStylesheet, Schedule, is_linked};
    use crate::dom::{Scope, query_all};
    use crate::error::SiteError;

    enum Pending {
        Idle { handle: u32, _callback: Closure<dyn FnMut()> },
        Timer { _timeout: Timeout },
    }

    /// Scheduled injection; dropping it before it fires cancels it.
    pub struct DeferredLoad {
        window: Window,
        pending: Pending,
    }

    impl DeferredLoad {
        pub fn schedule(
            window: &Window,
            document: &Document,
            href: &str,
            fallback_ms: u32,
        ) -> Result<Self, SiteError> {
            let sheet = Rc::new(RefCell::new(DeferredStylesheet::new(href)));
            let doc = document.clone();
            let fire = move || {
                if let Some(href) = sheet.borrow_mut().take() {
                    if let Err(err) = inject(&doc, href) {
                        log::warn!("assets: {err}");
                    }
                }
            };

            let idle_available = match js_sys::Reflect::has(window, &JsValue::from_str("requestIdleCallback")) {
                Ok(found) => found,
                Err(err) => {
                    log::warn!("assets: {}; falling back to a timer", SiteError::js("Reflect.has", err));
                    false
                }
            };
            let pending = match Schedule::choose(idle_available, fallback_ms) {
                Schedule::Idle => {
                    let callback = Closure::wrap(Box::new(fire) as Box<dyn FnMut()>);
                    let handle = window
                        .request_idle_callback(callback.as_ref().unchecked_ref())
                        .map_err(|err| SiteError::js("requestIdleCallback", err))?;
                    Pending::Idle { handle, _callback: callback }
                }
                Schedule::Timeout { ms } => Pending::Timer { _timeout: Timeout::new(ms, fire) },
            };
            Ok(Self { window: window.clone(), pending })
        }
    }

    impl Drop for DeferredLoad {
        fn drop(&mut self) {
            if let Pending::Idle { handle, .. } = &self.pending {
                self.window.cancel_idle_callback(*handle);
            }
        }
    }

    fn inject(document: &Document, href: &str) -> Result<(), SiteError> {
        let links = query_all::<Element>(Scope::Document(document), "link[rel=\"stylesheet\"]")?;
        if is_linked(links.iter().filter_map(|link| link.get_attribute("href")), href) {
            log::debug!("assets: {href} already linked");
            return Ok(());
        }
        let head = document.head().ok_or(SiteError::MissingHead)?;
        let link = document
            .create_element("link")
            .map_err(|err| SiteError::js("createElement", err))?;
        link.set_attribute("rel", "stylesheet")
            .map_err(|err| SiteError::js("setAttribute", err))?;
        link.set_attribute("href", href)
            .map_err(|err| SiteError::js("setAttribute", err))?;
        head.append_child(&link).map_err(|err| SiteError::js("appendChild", err))?;
        log::debug!("assets: linked {href}");
        Ok(())
    }
}
