use thiserror::Error;

/// Failures of the taxonomy itself, as opposed to the errors it describes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A declared kind chain did not reach its end within the hop limit.
    /// The hierarchy the candidate was built from is corrupt.
    #[error("Kind chain of '{start}' exceeded {hops} hops while looking for '{target}'; the hierarchy is cyclic")]
    ChainLoop {
        start: String,
        target: String,
        hops: usize,
    },

    #[error("Unknown error kind: {name}")]
    UnknownKind { name: String },
}

impl TaxonomyError {
    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            TaxonomyError::ChainLoop { start, .. } => {
                format!("Corrupt error hierarchy: the kind chain of '{start}' loops")
            }
            TaxonomyError::UnknownKind { name } => format!("'{name}' is not a known error kind"),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
