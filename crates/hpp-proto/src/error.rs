//! Decode error types.
//!
//! Encoding has no error type: a well-typed [`hpp_model::FormData`] always
//! serializes. Decode errors are surfaced to callers verbatim and are
//! never worth retrying; a malformed payload will not become valid.

use thiserror::Error;

/// Errors that can occur when decoding a form data payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload has no recognizable status discriminator. Covers empty
    /// payloads, wrong magic bytes, a missing status field, and an
    /// unrecognized status code. Hard precondition, not a soft default.
    #[error("Unknown or missing status on this proto. Cannot decode.")]
    MissingStatus,

    /// The payload decodes structurally but required fields for the
    /// selected variant are absent or inconsistent. Every offending field
    /// path is listed so callers can report all problems at once.
    #[error("form data payload violates schema: {}", fields.join(", "))]
    SchemaViolation { fields: Vec<String> },

    /// A required enum field carries a code outside the known set.
    #[error("unknown code {code} for {field}")]
    UnknownEnum { field: &'static str, code: u8 },

    /// A field value cannot be interpreted (bad length, invalid UTF-8,
    /// out-of-range instant or date).
    #[error("malformed field {field}: {message}")]
    Malformed { field: String, message: String },

    /// The byte stream ends inside a field header or value.
    #[error("payload truncated at offset {offset}")]
    Truncated { offset: usize },
}

impl DecodeError {
    pub(crate) fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn schema_violation(fields: Vec<String>) -> Self {
        Self::SchemaViolation { fields }
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_message_is_exact() {
        assert_eq!(
            DecodeError::MissingStatus.to_string(),
            "Unknown or missing status on this proto. Cannot decode."
        );
    }

    #[test]
    fn test_schema_violation_lists_all_fields() {
        let err = DecodeError::schema_violation(vec!["id".into(), "submitted_at".into()]);
        assert_eq!(
            err.to_string(),
            "form data payload violates schema: id, submitted_at"
        );
    }
}
