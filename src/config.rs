//! Site tunables.
//!
//! Every field has a default, so a page without a config block behaves like
//! the stock portfolio. A page may override any subset through a
//! `<script type="application/json" id="site-config">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub typewriter: TypewriterConfig,
    pub counter: CounterConfig,
    pub contact: ContactConfig,
    pub resume: ResumeConfig,
    pub theme_storage_key: String,
    pub loading_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            typewriter: TypewriterConfig::default(),
            counter: CounterConfig::default(),
            contact: ContactConfig::default(),
            resume: ResumeConfig::default(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            loading_delay_ms: consts::LOADING_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.contact.failure_rate) {
            return Err(ConfigError::Invalid { field: "contact.failure_rate", reason: "must be within [0, 1]" });
        }
        if self.counter.frame_ms == 0 {
            return Err(ConfigError::Invalid { field: "counter.frame_ms", reason: "must be positive" });
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::Invalid { field: "theme_storage_key", reason: "must not be empty" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_threshold_px: f64,
    pub active_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: consts::HEADER_SCROLLED_THRESHOLD_PX,
            active_offset_px: consts::ACTIVE_SECTION_OFFSET_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub back_to_top_threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { back_to_top_threshold_px: consts::BACK_TO_TOP_THRESHOLD_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Full Stack Developer",
                "Python Enthusiast",
                "JavaScript Developer",
                "DevOps Learner",
                "AI/ML Explorer",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            type_ms: consts::TYPE_SPEED_MS,
            delete_ms: consts::DELETE_SPEED_MS,
            pause_ms: consts::TYPE_PAUSE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub frame_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: consts::COUNTER_DURATION_MS, frame_ms: consts::COUNTER_FRAME_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub failure_rate: f64,
    pub status_visible_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            failure_rate: consts::SUBMIT_FAILURE_RATE,
            status_visible_ms: consts::STATUS_VISIBLE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub href: String,
    pub file_name: String,
    pub notification_ms: u32,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            href: "#".to_owned(),
            file_name: "Resume.pdf".to_owned(),
            notification_ms: consts::NOTIFICATION_VISIBLE_MS,
        }
    }
}
