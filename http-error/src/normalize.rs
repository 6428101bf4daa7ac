//! Turning whatever was caught into an [`HttpError`].
//!
//! Normalization is total: every input yields a well-formed record, so a
//! request handler can call it without guarding the call.

use crate::classify::{classify, Category, Classified};
use crate::config::NormalizerConfig;
use crate::http_error::{HttpError, HttpErrorJson};
use crate::status::INTERNAL_SERVER_ERROR;
use taxonomy::{ErrorLike, Stack};
use tracing::{debug, error};

/// Message replacing the original one for "zero results" database errors.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Found 0 results for item lookup.";

/// A caught value of unknown shape.
#[derive(Clone, Copy)]
pub enum Thrown<'a> {
    /// A bare status code. [`Normalizer::pass_through`] builds the same
    /// record from explicit name, message and stack as well.
    Status(u16),
    /// Anything error-like, tagged or not.
    Error(&'a dyn ErrorLike),
    /// A non-error value, already stringified; `None` for null.
    Value(Option<&'a str>),
}

impl<'a, E: ErrorLike> From<&'a E> for Thrown<'a> {
    fn from(err: &'a E) -> Self {
        Thrown::Error(err)
    }
}

impl From<u16> for Thrown<'_> {
    fn from(status: u16) -> Self {
        Thrown::Status(status)
    }
}

/// Normalizes caught values under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Produce the canonical HTTP error for `thrown`. Never fails.
    pub fn normalize<'a, T: Into<Thrown<'a>>>(&self, thrown: T) -> HttpError {
        match thrown.into() {
            Thrown::Status(status) => HttpError::new(status),
            Thrown::Value(value) => {
                debug!(status = self.config.default_status, "normalizing a non-error value");
                let builder = HttpError::builder(self.config.default_status).no_stack();
                match value {
                    Some(value) => builder.message(value).build(),
                    None => builder.build(),
                }
            }
            Thrown::Error(candidate) => self.normalize_error(candidate),
        }
    }

    /// Build an HTTP error straight from explicit parts, without deriving
    /// anything from an existing value.
    ///
    /// A missing status is the configured default. Name and message collapse
    /// as in [`HttpError::builder`], so with neither given the message stays
    /// `None`. No stack is captured when none is given.
    pub fn pass_through(
        &self,
        status: Option<u16>,
        name: Option<&str>,
        message: Option<&str>,
        stack: Option<Stack>,
    ) -> HttpError {
        let mut builder = HttpError::builder(status.unwrap_or(self.config.default_status));
        if let Some(name) = name {
            builder = builder.name(name);
        }
        if let Some(message) = message {
            builder = builder.message(message);
        }
        match stack {
            Some(stack) => builder.stack(stack).build(),
            None => builder.no_stack().build(),
        }
    }

    fn normalize_error(&self, candidate: &dyn ErrorLike) -> HttpError {
        let classified = classify(candidate).unwrap_or_else(|err| {
            error!(error = %err, "classification failed, treating value as unrecognized");
            Classified::Unrecognized
        });

        let name = candidate
            .name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| candidate.type_name())
            .to_string();
        let mut message = candidate
            .message()
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| candidate.to_string());

        let status = match &classified {
            Classified::Recognized {
                category: Category::Http,
                status,
                ..
            } => status.unwrap_or(self.config.default_status),
            Classified::Recognized {
                category: Category::Auth,
                ..
            } => 401,
            Classified::Recognized {
                category: Category::Input,
                ..
            } => 400,
            Classified::Recognized {
                category: Category::ItemNotFound,
                ..
            } => {
                message = ITEM_NOT_FOUND_MESSAGE.to_string();
                404
            }
            Classified::Recognized {
                category: Category::Other,
                ..
            }
            | Classified::Unrecognized => INTERNAL_SERVER_ERROR,
        };

        debug!(status, name = %name, classified = ?classified, "normalized error");

        let builder = HttpError::builder(status).name(name).message(message);
        match candidate.stack() {
            Some(stack) => builder.stack(stack.clone()).build(),
            None => builder.no_stack().build(),
        }
    }

    /// Serialized form, with stacks only when the configuration allows it.
    pub fn to_json(&self, err: &HttpError) -> HttpErrorJson {
        err.to_json(self.config.debug)
    }

    /// [`Normalizer::to_json`] rendered as a JSON string.
    pub fn render(&self, err: &HttpError) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_json(err))
    }
}

/// Normalize with the default configuration.
pub fn normalize<'a, T: Into<Thrown<'a>>>(thrown: T) -> HttpError {
    Normalizer::default().normalize(thrown)
}
