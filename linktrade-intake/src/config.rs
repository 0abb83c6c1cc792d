//! Bot configuration: `linktrade.toml` settings for legality enforcement
//! and the shared queue.

use crate::error::{ConfigError, ConfigResult};
use linktrade_types::LinkCode;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{info, warn};

/// Legality settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalitySettings {
    /// Refuse creatures the rules engine judges illegal.
    #[serde(default = "default_true")]
    pub verify_legality: bool,
}

impl Default for LegalitySettings {
    fn default() -> Self {
        Self {
            verify_legality: true,
        }
    }
}

/// Shared-queue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueSettings {
    #[serde(default = "default_code_min")]
    pub trade_code_min: u32,
    #[serde(default = "default_code_max")]
    pub trade_code_max: u32,
    /// Maximum pending requests; `0` means unlimited. Privileged
    /// requesters are not counted against it.
    #[serde(default)]
    pub max_queue_count: usize,
    /// When false only privileged requesters may join the queue.
    #[serde(default = "default_true")]
    pub can_queue: bool,
}

fn default_true() -> bool {
    true
}

fn default_code_min() -> u32 {
    0
}

fn default_code_max() -> u32 {
    LinkCode::MAX
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            trade_code_min: default_code_min(),
            trade_code_max: default_code_max(),
            max_queue_count: 0,
            can_queue: true,
        }
    }
}

impl QueueSettings {
    /// Inclusive range random link codes are drawn from.
    #[must_use]
    pub fn code_range(&self) -> RangeInclusive<u32> {
        self.trade_code_min..=self.trade_code_max
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.trade_code_min > self.trade_code_max || self.trade_code_max > LinkCode::MAX {
            return Err(ConfigError::InvalidCodeRange {
                min: self.trade_code_min,
                max: self.trade_code_max,
                limit: LinkCode::MAX,
            });
        }
        Ok(())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub legality: LegalitySettings,
    #[serde(default)]
    pub queue: QueueSettings,
}

impl IntakeConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.queue.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn read(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is missing, unreadable, malformed or out of range.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config {:?}: {}. Falling back to defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
