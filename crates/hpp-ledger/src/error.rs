//! Ledger error types.
//!
//! `Connection` is the only class a caller may sensibly retry. `Conflict`
//! signals a contract violation (a write aimed at a frozen revision, or a
//! lifecycle operation applied in the wrong state) and must be treated as
//! fatal, not retried. Decode and validation errors pass through typed so
//! callers can pattern-match exhaustively.

use hpp_model::{ModelError, PackageId, RevisionId};
use hpp_proto::DecodeError;
use hpp_submit::SubmissionError;
use thiserror::Error;

/// Errors from ledger operations and the revision store.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No package with this identifier exists.
    #[error("package not found: {package_id}")]
    NotFound { package_id: PackageId },

    /// The operation would violate revision immutability or the lifecycle
    /// shape (e.g. a write against a submitted revision, an unlock of a
    /// package that already has an open draft).
    #[error("conflicting write against revision {revision_id}")]
    Conflict { revision_id: RevisionId },

    /// The backing store could not be reached.
    #[error("revision store connection failed: {message}")]
    Connection { message: String },

    /// Stored payload failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The transition engine refused the submission.
    #[error(transparent)]
    Validation(#[from] SubmissionError),

    /// A stored value failed model validation.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl LedgerError {
    pub(crate) fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// True when the caller may retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
