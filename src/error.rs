use thiserror::Error;

/// Library-level error type.
///
/// A missing record is the only domain failure; everything else in the core
/// is presumed to succeed. Callers are expected to surface `NotFound` once,
/// with no retry, since a missing record cannot be resolved by retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Seed dataset failed to parse. Surfaces at startup only.
    #[error("dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Error::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// True when the error is a missing-record failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
