//! Ledger orchestration: the only component allowed to request writes.
//!
//! Every operation is a read-decide-write sequence: fetch the package,
//! decode the relevant revision, run the pure transition, re-encode, and
//! issue exactly one store write. The store is never touched before the
//! transition returns `Ok`, so validation failures cannot corrupt stored
//! state.

use std::collections::BTreeSet;

use hpp_model::{FormData, Identity, PackageId, StateCode, SubmissionType, UnlockedFormData};
use hpp_proto::{decode_form_data, encode_form_data};
use hpp_submit::{resubmit, submit, unlock};

use crate::error::{LedgerError, Result};
use crate::revision::{Package, PackageStatus, Revision, RevisionMetadata, UpdateInfo};
use crate::store::RevisionStore;

/// Reason recorded on a package's first submission, when the caller has
/// none to give.
const INITIAL_SUBMISSION_REASON: &str = "Initial submission";

/// Manages a package's ordered, immutable revision history.
pub struct Ledger<S> {
    store: S,
}

impl<S: RevisionStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a package.
    pub fn get_package(&self, package_id: &PackageId) -> Result<Package> {
        self.store.get_package(package_id)
    }

    /// Create a package with one empty draft revision.
    ///
    /// The state number is requested from the store's atomic per-state
    /// counter exactly once, before the first form data value is built;
    /// it is never reallocated or mutated afterwards.
    pub fn create_package(
        &self,
        state_code: StateCode,
        program_ids: BTreeSet<String>,
        submission_type: SubmissionType,
    ) -> Result<Package> {
        let package_id = self.store.create_package(&state_code)?;
        let state_number = self.store.allocate_state_number(&state_code)?;
        let draft = UnlockedFormData::new(
            package_id.clone(),
            state_code,
            state_number,
            program_ids,
            submission_type,
        );
        let bytes = encode_form_data(&FormData::Unlocked(draft));
        self.store
            .append_revision(&package_id, bytes, RevisionMetadata::default())?;

        tracing::info!(package = %package_id, state_number, "created package");
        self.store.get_package(&package_id)
    }

    /// Persist an edited draft into the current unsubmitted revision.
    pub fn save_draft(&self, package_id: &PackageId, draft: UnlockedFormData) -> Result<Package> {
        let package = self.store.get_package(package_id)?;
        let current = self.open_draft_revision(&package)?;
        if draft.id != *package_id {
            return Err(LedgerError::Conflict {
                revision_id: current.id.clone(),
            });
        }
        let bytes = encode_form_data(&FormData::Unlocked(draft));
        self.store
            .write_revision(package_id, &current.id, bytes, RevisionMetadata::default())?;
        self.store.get_package(package_id)
    }

    /// Submit the package's current draft, finalizing the revision in
    /// place: same revision row, re-encoded locked bytes, submit metadata
    /// attached. No new revision is created.
    ///
    /// When the package has been unlocked before, a non-empty reason is
    /// required; the first submission needs none.
    pub fn submit_package(
        &self,
        package_id: &PackageId,
        actor: Identity,
        reason: Option<&str>,
    ) -> Result<Package> {
        let package = self.store.get_package(package_id)?;
        let status = package.status();
        let current = self.open_draft_revision(&package)?;

        let FormData::Unlocked(draft) = decode_form_data(&current.form_data_bytes)? else {
            // An unsubmitted revision holding locked bytes means someone
            // bypassed the ledger.
            return Err(LedgerError::Conflict {
                revision_id: current.id.clone(),
            });
        };

        let locked = match status {
            PackageStatus::Unlocked => resubmit(draft, reason.unwrap_or_default())?,
            _ => submit(draft)?,
        };

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(INITIAL_SUBMISSION_REASON);
        let bytes = encode_form_data(&FormData::Locked(locked));
        self.store.write_revision(
            package_id,
            &current.id,
            bytes,
            RevisionMetadata::submitted(UpdateInfo::new(actor, reason)),
        )?;

        tracing::info!(package = %package_id, revision = %current.id, "submitted package");
        self.store.get_package(package_id)
    }

    /// Unlock a submitted package: append a brand-new unsubmitted
    /// revision seeded from a cast of the latest submitted content. The
    /// submitted revision itself is left untouched.
    pub fn unlock_package(
        &self,
        package_id: &PackageId,
        actor: Identity,
        reason: &str,
    ) -> Result<Package> {
        let package = self.store.get_package(package_id)?;
        let Some(current) = package.current_revision() else {
            return Err(LedgerError::NotFound {
                package_id: package_id.clone(),
            });
        };
        if !current.is_submitted() {
            // Already has an open draft; unlocking again would leave two.
            return Err(LedgerError::Conflict {
                revision_id: current.id.clone(),
            });
        }

        let FormData::Locked(locked) = decode_form_data(&current.form_data_bytes)? else {
            return Err(LedgerError::Conflict {
                revision_id: current.id.clone(),
            });
        };

        let draft = unlock(locked, reason, &actor);
        let bytes = encode_form_data(&FormData::Unlocked(draft));
        let revision_id = self.store.append_revision(
            package_id,
            bytes,
            RevisionMetadata::unlocked(UpdateInfo::new(actor, reason)),
        )?;

        tracing::info!(package = %package_id, revision = %revision_id, "unlocked package");
        self.store.get_package(package_id)
    }

    /// The current revision, which must be an open draft.
    fn open_draft_revision<'a>(&self, package: &'a Package) -> Result<&'a Revision> {
        let Some(current) = package.current_revision() else {
            return Err(LedgerError::NotFound {
                package_id: package.id.clone(),
            });
        };
        if current.is_submitted() {
            return Err(LedgerError::Conflict {
                revision_id: current.id.clone(),
            });
        }
        Ok(current)
    }
}
