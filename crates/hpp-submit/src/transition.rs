//! The submit / resubmit / unlock transitions.

use chrono::{DateTime, Utc};
use hpp_model::{Identity, LockedFormData, UnlockedFormData, clock};

use crate::checks;
use crate::error::SubmissionError;

/// Submit a draft, freezing it at the current instant.
///
/// Checks run in a fixed priority order — contract, rates, documents —
/// and the first failure is returned alone; later checks are not
/// evaluated. On success the returned value satisfies the locked
/// invariant by construction.
pub fn submit(draft: UnlockedFormData) -> Result<LockedFormData, SubmissionError> {
    submit_at(draft, clock::now())
}

/// [`submit`] with an explicit submission instant.
pub fn submit_at(
    draft: UnlockedFormData,
    submitted_at: DateTime<Utc>,
) -> Result<LockedFormData, SubmissionError> {
    checks::contract::check(&draft)?;
    checks::rates::check(&draft)?;
    checks::documents::check(&draft)?;

    tracing::debug!(package = %draft.id, "draft passed submission checks");

    Ok(LockedFormData {
        id: draft.id,
        state_code: draft.state_code,
        state_number: draft.state_number,
        program_ids: draft.program_ids,
        submission_type: draft.submission_type,
        submission_description: draft.submission_description,
        created_at: draft.created_at,
        updated_at: draft.updated_at,
        submitted_at,
        documents: draft.documents,
        contract_info: draft.contract_info,
        rate_certifications: draft.rate_certifications,
        state_contacts: draft.state_contacts,
        actuary_contacts: draft.actuary_contacts,
    })
}

/// Submit a draft that originated from an unlock.
///
/// Identical to [`submit`] except that a non-empty reason is required:
/// the first submission of a package needs none, every subsequent one
/// does. The reason itself lands in the revision's submit metadata, not
/// in the form data.
pub fn resubmit(
    draft: UnlockedFormData,
    reason: &str,
) -> Result<LockedFormData, SubmissionError> {
    if reason.trim().is_empty() {
        return Err(SubmissionError::MissingReason);
    }
    submit(draft)
}

/// Unlock submitted form data for editing.
///
/// A total, non-failing cast: the locked variant is a strict
/// superset-shape of the unlocked one and every locked value was already
/// valid when constructed, so dropping `submitted_at` is always safe.
/// The reason and actor are recorded in the revision's unlock metadata by
/// the ledger; here they are only logged.
pub fn unlock(locked: LockedFormData, reason: &str, actor: &Identity) -> UnlockedFormData {
    tracing::info!(
        package = %locked.id,
        actor = %actor.email,
        reason,
        "unlocking submitted form data"
    );

    UnlockedFormData {
        id: locked.id,
        state_code: locked.state_code,
        state_number: locked.state_number,
        program_ids: locked.program_ids,
        submission_type: locked.submission_type,
        submission_description: locked.submission_description,
        created_at: locked.created_at,
        updated_at: locked.updated_at,
        documents: locked.documents,
        contract_info: locked.contract_info,
        rate_certifications: locked.rate_certifications,
        state_contacts: locked.state_contacts,
        actuary_contacts: locked.actuary_contacts,
    }
}
