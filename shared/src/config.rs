//! Runtime configuration for the enhancers.
//!
//! A page may embed a JSON object in
//! `<script type="application/json" id="site-enhance-config">`; every key is
//! optional and falls back to the defaults below.

use serde::Deserialize;

use crate::error::{EnhanceError, Result};

/// Element id of the optional embedded configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-enhance-config";

const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
const DEFAULT_LINK_CLOSE_DELAY_MS: u32 = 150;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 150;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 100;
const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_SUBMIT_DELAY_MS: u32 = 2000;
const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;
const DEFAULT_REDIRECT_URL: &str = "thank_you.html";
const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 5000;
const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
const DEFAULT_MODAL_FADE_MS: u32 = 300;

/// Tunables shared by all enhancers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceConfig {
    /// Viewport width at which an open mobile menu is force-closed.
    pub breakpoint_px: f64,
    /// Header height used when `.l-header` is absent.
    pub default_header_height: f64,
    /// Delay between a menu link click and the menu closing.
    pub link_close_delay_ms: u32,
    /// Quiet period for the resize handler.
    pub resize_debounce_ms: u32,
    /// Window for the scroll handler.
    pub scroll_throttle_ms: u32,
    /// Scroll offset after which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Duration of the simulated form submission.
    pub submit_delay_ms: u32,
    /// Delay between the success notification and the redirect.
    pub redirect_delay_ms: u32,
    /// Page loaded after a successful submission.
    pub redirect_url: String,
    /// Lifetime of a notification before it dismisses itself.
    pub notification_timeout_ms: u32,
    /// Duration of the count-up animation.
    pub counter_duration_ms: u32,
    /// Fade-out duration of the modal before its node is removed.
    pub modal_fade_ms: u32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            default_header_height: DEFAULT_HEADER_HEIGHT,
            link_close_delay_ms: DEFAULT_LINK_CLOSE_DELAY_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            modal_fade_ms: DEFAULT_MODAL_FADE_MS,
        }
    }
}

impl EnhanceConfig {
    /// Parse and validate an embedded JSON document.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`EnhanceConfig::from_json`], but logs the failure and returns
    /// the defaults instead.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring embedded config: {err}");
                Self::default()
            },
        }
    }

    /// Reject values that would make an enhancer misbehave.
    pub fn validate(&self) -> Result<()> {
        if !(self.breakpoint_px > 0.0) {
            return Err(EnhanceError::InvalidSetting {
                key: "breakpoint_px",
                reason: "must be positive",
            });
        }
        if !(self.default_header_height >= 0.0) {
            return Err(EnhanceError::InvalidSetting {
                key: "default_header_height",
                reason: "must not be negative",
            });
        }
        if !(self.scroll_top_threshold >= 0.0) {
            return Err(EnhanceError::InvalidSetting {
                key: "scroll_top_threshold",
                reason: "must not be negative",
            });
        }
        let durations = [
            ("scroll_throttle_ms", self.scroll_throttle_ms),
            ("submit_delay_ms", self.submit_delay_ms),
            ("notification_timeout_ms", self.notification_timeout_ms),
            ("counter_duration_ms", self.counter_duration_ms),
            ("modal_fade_ms", self.modal_fade_ms),
        ];
        if let Some(&(key, _)) = durations.iter().find(|(_, value)| *value == 0) {
            return Err(EnhanceError::InvalidSetting {
                key,
                reason: "duration must be greater than zero",
            });
        }
        if self.redirect_url.trim().is_empty() {
            return Err(EnhanceError::InvalidSetting {
                key: "redirect_url",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = EnhanceConfig::from_json("  ").expect("empty config");
        assert_eq!(config, EnhanceConfig::default());
        assert_eq!(config.breakpoint_px, 768.0);
        assert_eq!(config.redirect_url, "thank_you.html");
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = EnhanceConfig::from_json(r#"{"submit_delay_ms": 10, "redirect_url": "/done"}"#)
            .expect("partial config");
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.redirect_url, "/done");
        assert_eq!(config.notification_timeout_ms, 5000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EnhanceConfig::from_json(r#"{"breakpoint": 900}"#).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidConfig(_)));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = EnhanceConfig::from_json(r#"{"modal_fade_ms": 0}"#).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidSetting { key: "modal_fade_ms", .. }));
    }

    #[test]
    fn invalid_document_falls_back_to_defaults() {
        let config = EnhanceConfig::from_json_or_default("{not json");
        assert_eq!(config, EnhanceConfig::default());
    }
}
