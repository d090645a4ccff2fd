//! Revision and package types, and the derived package status.

use chrono::{DateTime, Utc};
use hpp_model::{Identity, PackageId, RevisionId, StateCode, clock};

/// Who did what, when, and why — attached to a revision as submit or
/// unlock metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub updated_at: DateTime<Utc>,
    pub updated_by: Identity,
    pub reason: String,
}

impl UpdateInfo {
    pub fn new(updated_by: Identity, reason: impl Into<String>) -> Self {
        Self {
            updated_at: clock::now(),
            updated_by,
            reason: reason.into(),
        }
    }
}

/// Metadata accompanying a revision write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionMetadata {
    pub unlock_info: Option<UpdateInfo>,
    pub submit_info: Option<UpdateInfo>,
}

impl RevisionMetadata {
    pub fn submitted(submit_info: UpdateInfo) -> Self {
        Self {
            unlock_info: None,
            submit_info: Some(submit_info),
        }
    }

    pub fn unlocked(unlock_info: UpdateInfo) -> Self {
        Self {
            unlock_info: Some(unlock_info),
            submit_info: None,
        }
    }
}

/// One immutable snapshot in a package's history.
///
/// A revision without submit metadata is the package's live draft; at
/// most one such revision exists per package at any time. Once submit
/// metadata is attached the revision is frozen and its bytes are never
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub id: RevisionId,
    pub package_id: PackageId,
    pub created_at: DateTime<Utc>,
    /// Store-assigned insertion sequence. Breaks `created_at` ties so two
    /// revisions can never both be "current".
    pub sequence: u64,
    pub form_data_bytes: Vec<u8>,
    pub unlock_info: Option<UpdateInfo>,
    pub submit_info: Option<UpdateInfo>,
}

impl Revision {
    pub fn is_submitted(&self) -> bool {
        self.submit_info.is_some()
    }
}

/// Derived lifecycle status of a package. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    Draft,
    Submitted,
    Unlocked,
    Resubmitted,
}

impl PackageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Draft => "DRAFT",
            PackageStatus::Submitted => "SUBMITTED",
            PackageStatus::Unlocked => "UNLOCKED",
            PackageStatus::Resubmitted => "RESUBMITTED",
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package and its revision history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: PackageId,
    pub state_code: StateCode,
    /// Ordered by `(created_at, sequence)` descending.
    pub revisions: Vec<Revision>,
}

impl Package {
    /// The most recent revision: the live draft if one exists, otherwise
    /// the latest submitted snapshot.
    pub fn current_revision(&self) -> Option<&Revision> {
        self.revisions.first()
    }

    /// Restore the newest-first invariant after mutation.
    pub fn sort_revisions(&mut self) {
        self.revisions
            .sort_by(|a, b| (b.created_at, b.sequence).cmp(&(a.created_at, a.sequence)));
    }

    /// Derive the lifecycle status from the shape of the history.
    pub fn status(&self) -> PackageStatus {
        let newest_submitted = self.current_revision().is_some_and(Revision::is_submitted);
        let earlier_submitted = self.revisions.iter().skip(1).any(Revision::is_submitted);
        match (newest_submitted, earlier_submitted) {
            (true, true) => PackageStatus::Resubmitted,
            (true, false) => PackageStatus::Submitted,
            (false, true) => PackageStatus::Unlocked,
            (false, false) => PackageStatus::Draft,
        }
    }
}
