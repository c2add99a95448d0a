//! Browser behaviors for the Seaview Tours marketing site.
//!
//! The pages are rendered server-side; this crate is compiled to WebAssembly
//! and attaches interactivity to that markup once the document is ready.
//! Each widget keeps its state as an explicit enum and touches the DOM only
//! through [`dom::Node`], so the logic is tested natively. Browser wiring sits
//! behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | `Node` abstraction, scroll lock, selector queries |
//! | [`nav`] | Mobile navigation drawer |
//! | [`forms`] | Booking/contact submit interception |
//! | [`smooth_scroll`] | Same-page anchor scrolling |
//! | [`header`] | Header `scrolled` class |
//! | [`accordion`] | FAQ accordion items |
//! | [`modal`] | Data-attribute driven modals |
//! | [`reveal`] | One-shot reveal on scroll |
//! | [`assets`] | Deferred stylesheet loading |
//! | [`sanitize`] | HTML escaping for visitor input |
//! | [`config`] | Inline JSON tuning block |
//! | [`site`] | Mount lifecycle and the `start`/`stop` exports |
//! | [`consts`] | DOM contract and defaults |

pub mod accordion;
pub mod assets;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod forms;
pub mod header;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod sanitize;
pub mod site;
pub mod smooth_scroll;

#[cfg(feature = "hydrate")]
mod listener;

#[cfg(test)]
mod fake_node;

pub use config::SiteConfig;
pub use error::SiteError;
pub use sanitize::sanitize_input;

/// `sanitizeInput` for page scripts.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = sanitizeInput)]
pub fn sanitize_input_js(input: Option<String>) -> String {
    sanitize_input(input.as_deref())
}
