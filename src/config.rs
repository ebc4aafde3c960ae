//! Page configuration with optional author overrides.
//!
//! Defaults mirror the values the portfolio markup was designed around. A page
//! may override any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "scrollOffset": 96, "mobileBreakpoint": 900 }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 80.0;
pub const DEFAULT_ANIMATION_DELAY_MS: u32 = 100;
pub const DEFAULT_DEBOUNCE_DELAY_MS: u32 = 250;
pub const DEFAULT_THROTTLE_DELAY_MS: u32 = 100;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
pub const DEFAULT_MESSAGE_DURATION_MS: u32 = 5000;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override block is not valid JSON or has unknown keys.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is outside its usable range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Tunables shared by every manager.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Height reserved for the fixed header when scrolling to a section.
    pub scroll_offset: f64,
    /// Stagger step between reveals fired in one observer batch.
    pub animation_delay: u32,
    /// Quiet period before a resize is handled.
    pub debounce_delay: u32,
    /// Minimum interval between scroll handler runs.
    pub throttle_delay: u32,
    /// Widest viewport treated as mobile.
    pub mobile_breakpoint: f64,
    /// Scroll distance after which the header is styled as scrolled.
    pub navbar_scroll_threshold: f64,
    pub counter_duration: u32,
    pub message_duration: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scroll_offset: DEFAULT_SCROLL_OFFSET_PX,
            animation_delay: DEFAULT_ANIMATION_DELAY_MS,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY_MS,
            throttle_delay: DEFAULT_THROTTLE_DELAY_MS,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT_PX,
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX,
            counter_duration: DEFAULT_COUNTER_DURATION_MS,
            message_duration: DEFAULT_MESSAGE_DURATION_MS,
        }
    }
}

impl PortfolioConfig {
    /// Parse an override block; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults.
    ///
    /// A malformed block is logged and ignored; the page keeps working.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                    log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                    Self::default()
                }),
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(ConfigError::Invalid { field: "scrollOffset", reason: "must be a non-negative number" });
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid { field: "mobileBreakpoint", reason: "must be positive" });
        }
        if !self.navbar_scroll_threshold.is_finite() || self.navbar_scroll_threshold < 0.0 {
            return Err(ConfigError::Invalid { field: "navbarScrollThreshold", reason: "must be a non-negative number" });
        }
        if self.counter_duration == 0 {
            return Err(ConfigError::Invalid { field: "counterDuration", reason: "must be positive" });
        }
        if self.throttle_delay == 0 {
            return Err(ConfigError::Invalid { field: "throttleDelay", reason: "must be positive" });
        }
        Ok(())
    }
}
