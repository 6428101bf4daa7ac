//! Normalizer settings, from defaults, a TOML file or the environment.

use crate::error::{ConfigError, Result};
use crate::status::INTERNAL_SERVER_ERROR;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable enabling stacks in serialized output.
pub const DEBUG_ENV: &str = "SERIOUS_DEBUG";
/// Environment variable overriding the fallback status.
pub const DEFAULT_STATUS_ENV: &str = "SERIOUS_DEFAULT_STATUS";

/// Settings read by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Status for values no status can be derived from.
    pub default_status: u16,
    /// Include stack frames in serialized errors. Never enable for
    /// production responses.
    pub debug: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_status: INTERNAL_SERVER_ERROR,
            debug: false,
        }
    }
}

impl NormalizerConfig {
    /// Defaults overridden by `SERIOUS_DEBUG` / `SERIOUS_DEFAULT_STATUS`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment, a map in tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEBUG_ENV) {
            self.debug = parse_flag(DEBUG_ENV, &raw)?;
        }
        if let Some(raw) = lookup(DEFAULT_STATUS_ENV) {
            self.default_status = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_value(DEFAULT_STATUS_ENV, raw.as_str()))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Parse a TOML document such as `default_status = 500` / `debug = true`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NormalizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(100..=599).contains(&self.default_status) {
            return Err(ConfigError::InvalidStatus {
                status: self.default_status,
            });
        }
        Ok(())
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid_value(name, raw)),
    }
}
