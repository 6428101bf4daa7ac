use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading normalizer configuration.
///
/// Normalization itself never fails; only setting it up can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid default status {status}: expected a code between 100 and 599")]
    InvalidStatus { status: u16 },

    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    /// Create a new invalid value error
    pub fn invalid_value<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }
}
