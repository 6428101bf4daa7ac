//! HTTP Error - canonical HTTP-facing errors for anything that was caught
//!
//! This crate maps errors from the `taxonomy` hierarchy (and values from
//! anywhere else) onto a status code and reason phrase, keeping as much of
//! the original error's name, message and stack as it can.

// Core modules
pub mod config;
pub mod error;
pub mod status;

// Main functionality modules
pub mod classify;
pub mod http_error;
pub mod normalize;

// Re-export main types for convenience
pub use classify::{classify, Category, Classified};
pub use config::NormalizerConfig;
pub use error::{ConfigError, Result};
pub use http_error::{HttpError, HttpErrorBuilder, HttpErrorJson, ALWAYS_ALLOWED};
pub use normalize::{normalize, Normalizer, Thrown, ITEM_NOT_FOUND_MESSAGE};
pub use status::{reason_phrase, status_name, CUSTOM_STATUS_NAME};
