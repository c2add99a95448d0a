//! Page binding lifecycle.
//!
//! `start` runs once when the module is instantiated. It waits for
//! `DOMContentLoaded` if the document is still parsing, then mounts every
//! widget into a `Site` kept in a thread-local. `stop` drops it, which
//! removes every listener, disconnects the reveal observer and cancels a
//! stylesheet load that has not fired yet. A `stop` that lands while the
//! document is still parsing cancels the pending mount.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Stopped,
    /// `start` ran while the document was parsing; mount on `DOMContentLoaded`.
    AwaitingReady,
    Mounted,
}

impl Lifecycle {
    /// Phase after `DOMContentLoaded`, and whether the page should be mounted now.
    #[must_use]
    pub fn on_ready(self) -> (Self, bool) {
        match self {
            Self::AwaitingReady => (Self::Mounted, true),
            other => (other, false),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Site, start, stop};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::{Document, Window};

    use super::Lifecycle;
    use crate::assets::DeferredLoad;
    use crate::config::{self, SiteConfig};
    use crate::error::SiteError;
    use crate::listener::Listener;
    use crate::reveal::RevealObserver;
    use crate::{accordion, forms, header, modal, nav, smooth_scroll};

    thread_local! {
        static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
        static LIFECYCLE: Cell<Lifecycle> = const { Cell::new(Lifecycle::Stopped) };
    }

    /// Everything bound to the current page. Held only to be dropped.
    pub struct Site {
        _listeners: Vec<Listener>,
        _reveal: Option<RevealObserver>,
        _assets: Option<DeferredLoad>,
    }

    impl Site {
        /// Bind every widget. A widget that fails to bind is logged and skipped.
        pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Self {
            let mut listeners = Vec::new();
            let mut bind = |name: &str, result: Result<Vec<Listener>, SiteError>| match result {
                Ok(bound) => listeners.extend(bound),
                Err(err) => log::warn!("{name}: {err}"),
            };
            bind("nav", nav::mount(document));
            bind("forms", forms::mount(document));
            bind("smooth_scroll", smooth_scroll::mount(document));
            bind("header", header::mount(window, document, config.header_threshold_px));
            bind("accordion", accordion::mount(document));
            bind("modal", modal::mount(document));

            let reveal = RevealObserver::mount(document, config.reveal_threshold).unwrap_or_else(|err| {
                log::warn!("reveal: {err}");
                None
            });
            let assets =
                match DeferredLoad::schedule(window, document, &config.deferred_stylesheet, config.idle_fallback_ms) {
                    Ok(load) => Some(load),
                    Err(err) => {
                        log::warn!("assets: {err}");
                        None
                    }
                };

            log::info!(
                "site: {} listeners bound, reveal {}, stylesheet {}",
                listeners.len(),
                if reveal.is_some() { "observing" } else { "idle" },
                if assets.is_some() { "scheduled" } else { "skipped" },
            );
            Self { _listeners: listeners, _reveal: reveal, _assets: assets }
        }
    }

    fn init_logging() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Trace) {
            web_sys::console::warn_1(&format!("logger already set: {err}").into());
        }
    }

    fn mount_now(window: &Window, document: &Document) {
        let config = config::load(document).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        });
        log::set_max_level(config.log_level);
        let site = Site::mount(window, document, &config);
        LIFECYCLE.with(|phase| phase.set(Lifecycle::Mounted));
        SITE.with(|slot| {
            // A previous binding is dropped here, after the new one is live.
            slot.replace(Some(site));
        });
    }

    fn try_start() -> Result<(), SiteError> {
        let window = web_sys::window().ok_or(SiteError::MissingWindow)?;
        let document = window.document().ok_or(SiteError::MissingDocument)?;

        if document.ready_state() != "loading" {
            mount_now(&window, &document);
            return Ok(());
        }

        LIFECYCLE.with(|phase| phase.set(Lifecycle::AwaitingReady));
        let (win, doc) = (window.clone(), document.clone());
        let on_ready = Closure::once_into_js(move || {
            let (next, mount) = LIFECYCLE.with(|phase| phase.get().on_ready());
            LIFECYCLE.with(|phase| phase.set(next));
            if mount {
                mount_now(&win, &doc);
            } else {
                log::debug!("site: stopped before DOMContentLoaded; not mounting");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|err| SiteError::js("addEventListener", err))
    }

    /// Module entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        init_logging();
        if let Err(err) = try_start() {
            log::error!("site: {err}");
        }
    }

    /// Unbind everything [`start`] attached, or cancel a mount still waiting
    /// on `DOMContentLoaded`.
    #[wasm_bindgen]
    pub fn stop() {
        let previous = LIFECYCLE.with(|phase| phase.replace(Lifecycle::Stopped));
        let dropped = SITE.with(RefCell::take);
        if dropped.is_some() || previous == Lifecycle::AwaitingReady {
            log::info!("site: unbound");
        }
    }
}
