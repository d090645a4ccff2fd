//! Model validation error types.

use thiserror::Error;

/// Errors raised when constructing model values from untrusted input.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Package identifier was empty or whitespace.
    #[error("invalid package id: {0:?}")]
    InvalidPackageId(String),

    /// Revision identifier was empty or whitespace.
    #[error("invalid revision id: {0:?}")]
    InvalidRevisionId(String),

    /// State code was not a two-letter uppercase jurisdiction code.
    #[error("invalid state code: {0:?}")]
    InvalidStateCode(String),

    /// Actor email was empty or missing an '@'.
    #[error("invalid actor email: {0:?}")]
    InvalidEmail(String),
}

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
