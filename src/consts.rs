//! DOM contract and default tuning values shared across widgets.

// ── Selectors ───────────────────────────────────────────────────

pub const NAV_TRIGGER_SELECTOR: &str = "#hamburger";
pub const NAV_PANEL_SELECTOR: &str = ".nav";
pub const NAV_OVERLAY_SELECTOR: &str = "#navOverlay";

pub const BOOKING_FORM_ID: &str = "simpleBookingForm";
pub const CONTACT_FORM_ID: &str = "contactForm";
/// Field whose value is sanitized and echoed in the submission log line.
pub const FORM_NAME_FIELD_SELECTOR: &str = "[name=\"name\"]";

pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = "header";
pub const ACCORDION_HEADER_SELECTOR: &str = ".accordion-header";

pub const MODAL_OPEN_ATTR: &str = "data-modal-open";
pub const MODAL_CLOSE_ATTR: &str = "data-modal-close";
pub const MODAL_SELECTOR: &str = ".modal";

pub const ANIMATE_SELECTOR: &str = "[data-animate]";

/// Inline `<script type="application/json">` block carrying [`crate::config::SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

// ── Classes and styles ──────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ANIMATED_CLASS: &str = "animated";

pub const OVERFLOW_PROPERTY: &str = "overflow";
pub const OVERFLOW_LOCKED: &str = "hidden";
pub const MAX_HEIGHT_PROPERTY: &str = "max-height";

// ── Defaults ────────────────────────────────────────────────────

/// Vertical scroll offset (CSS px) past which the header is styled as scrolled.
pub const DEFAULT_HEADER_THRESHOLD_PX: f64 = 50.0;

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;

/// Browsers report intersection ratios with rounding; a crossing reported
/// exactly at the threshold can arrive a hair below it.
pub const REVEAL_RATIO_TOLERANCE: f64 = 1e-3;

/// Delay before the deferred stylesheet loads when idle callbacks are unavailable.
pub const DEFAULT_IDLE_FALLBACK_MS: u32 = 3_000;

pub const DEFAULT_DEFERRED_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
