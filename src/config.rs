//! Page-level tuning read from an optional inline JSON block.
//!
//! The server template may emit
//! `<script type="application/json" id="site-config">{…}</script>`; any key
//! it omits keeps its default. Keys are camelCase to match the template side.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DEFERRED_STYLESHEET, DEFAULT_HEADER_THRESHOLD_PX, DEFAULT_IDLE_FALLBACK_MS, DEFAULT_REVEAL_THRESHOLD,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub header_threshold_px: f64,
    pub reveal_threshold: f64,
    pub idle_fallback_ms: u32,
    pub deferred_stylesheet: String,
    pub log_level: log::LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: DEFAULT_HEADER_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            idle_fallback_ms: DEFAULT_IDLE_FALLBACK_MS,
            deferred_stylesheet: DEFAULT_DEFERRED_STYLESHEET.to_owned(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.header_threshold_px.is_finite() || self.header_threshold_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "headerThresholdPx",
                reason: format!("expected a non-negative number, got {}", self.header_threshold_px),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "revealThreshold",
                reason: format!("expected a ratio in 0..=1, got {}", self.reveal_threshold),
            });
        }
        if self.deferred_stylesheet.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "deferredStylesheet", reason: "empty URL".into() });
        }
        Ok(())
    }
}

/// Read the inline config block. A page without one gets the defaults.
#[cfg(feature = "hydrate")]
pub fn load(document: &web_sys::Document) -> Result<SiteConfig, crate::error::SiteError> {
    let Some(raw) = document
        .get_element_by_id(crate::consts::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(SiteConfig::default());
    };
    Ok(SiteConfig::from_json(&raw)?)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
