//! TOML configuration for page behaviour timings and thresholds.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! stock page behaviour:
//!
//! ```toml
//! [carousel]
//! autoplay_ms = 3500
//!
//! [notifications]
//! lifetime_ms = 4000
//! animation_ms = 300
//!
//! [reveal]
//! threshold = 0.1
//! bottom_margin = 100.0
//! transition_ms = 600
//!
//! [sections]
//! activation_offset = 200.0
//!
//! [scroll]
//! debounce_ms = 50
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::ToastTiming;
use crate::reveal::RevealOptions;
use crate::sections::DEFAULT_ACTIVATION_OFFSET;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { autoplay_ms: 3500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u64,
    pub animation_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 4000,
            animation_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub activation_offset: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { debounce_ms: 50 }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadzyConfig {
    pub carousel: CarouselConfig,
    pub notifications: NotificationConfig,
    pub reveal: RevealOptions,
    pub sections: SectionConfig,
    pub scroll: ScrollConfig,
}

impl ReadzyConfig {
    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.autoplay_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel.autoplay_ms must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.reveal.bottom_margin < 0.0 {
            return Err(ConfigError::Invalid(
                "reveal.bottom_margin must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.carousel.autoplay_ms)
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming {
            lifetime: Duration::from_millis(self.notifications.lifetime_ms),
            animation: Duration::from_millis(self.notifications.animation_ms),
        }
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll.debounce_ms)
    }
}
