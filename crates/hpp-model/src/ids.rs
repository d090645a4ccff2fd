//! Validated newtype identifiers.
//!
//! Package and revision identifiers are opaque stable strings assigned by
//! the revision store; the model only guarantees they are non-empty.
//! State codes are two-letter uppercase jurisdiction codes.

use std::fmt;

use crate::error::{ModelError, Result};

/// Opaque stable identifier of a package.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidPackageId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque stable identifier of a revision within a package's history.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RevisionId(String);

impl RevisionId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRevisionId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-letter uppercase jurisdiction code (e.g. "FL", "MN").
///
/// State numbers are allocated per state code, so equality and ordering on
/// this type drive counter lookup in the revision store.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct StateCode(String);

impl StateCode {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ModelError::InvalidStateCode(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_id_rejects_empty() {
        assert!(PackageId::new("").is_err());
        assert!(PackageId::new("   ").is_err());
        assert_eq!(PackageId::new(" pkg-1 ").unwrap().as_str(), "pkg-1");
    }

    #[test]
    fn test_state_code_shape() {
        assert!(StateCode::new("FL").is_ok());
        assert!(StateCode::new("fl").is_err());
        assert!(StateCode::new("FLA").is_err());
        assert!(StateCode::new("F1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RevisionId::new("rev-9").unwrap().to_string(), "rev-9");
        assert_eq!(StateCode::new("MN").unwrap().to_string(), "MN");
    }
}
