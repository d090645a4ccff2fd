//! Submission error types.
//!
//! These are user-actionable validation outcomes, not system faults: they
//! are surfaced to the caller as feedback and never retried or logged as
//! errors.

use thiserror::Error;

/// Coarse classification of a submission failure, for callers that branch
/// on kind rather than message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionErrorCode {
    /// Required content is missing (contract fields, rate fields,
    /// documents).
    Incomplete,
    /// Content is present that contradicts the submission type.
    Invalid,
    /// A resubmission was attempted without a reason.
    MissingReason,
}

/// Why a draft was refused at submit time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{message}")]
    Incomplete { message: String },

    #[error("{message}")]
    Invalid { message: String },

    #[error("resubmission requires a reason")]
    MissingReason,
}

impl SubmissionError {
    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::Incomplete {
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn code(&self) -> SubmissionErrorCode {
        match self {
            Self::Incomplete { .. } => SubmissionErrorCode::Incomplete,
            Self::Invalid { .. } => SubmissionErrorCode::Invalid,
            Self::MissingReason => SubmissionErrorCode::MissingReason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            SubmissionError::incomplete("x").code(),
            SubmissionErrorCode::Incomplete
        );
        assert_eq!(
            SubmissionError::invalid("x").code(),
            SubmissionErrorCode::Invalid
        );
        assert_eq!(
            SubmissionError::MissingReason.code(),
            SubmissionErrorCode::MissingReason
        );
    }
}
