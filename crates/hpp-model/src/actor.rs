//! Actor identity attached to submit and unlock metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Role of the person performing a lifecycle action.
///
/// State users draft and submit packages; CMS users unlock them for
/// corrections. Admins can do either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    StateUser,
    CmsUser,
    Admin,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::StateUser => "STATE_USER",
            ActorRole::CmsUser => "CMS_USER",
            ActorRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who performed a submit or unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: ActorRole,
}

impl Identity {
    /// Create an identity. The email is only shape-checked (non-empty,
    /// contains '@'); authentication lives in the excluded transport layer.
    pub fn new(email: impl Into<String>, role: ActorRole) -> Result<Self> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(ModelError::InvalidEmail(email));
        }
        Ok(Self {
            email: trimmed.to_string(),
            role,
        })
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.email, self.role)
    }
}
