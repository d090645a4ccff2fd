//! Form data: the content snapshot stored by every revision.
//!
//! `FormData` is the tagged union the rest of the workspace operates on.
//! The unlocked variant is the only one mutation is permitted on; the
//! locked variant is frozen at submission and additionally carries the
//! submission instant.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::enums::{
    ActuarialFirm, ContractExecutionStatus, ContractType, DocumentCategory, RateType,
    SubmissionType,
};
use crate::ids::{PackageId, StateCode};

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range whose end precedes its start covers no dates.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// An uploaded document reference.
///
/// The locator is an opaque handle into the attachment store (the model
/// never dereferences it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub locator: String,
    pub category: DocumentCategory,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        locator: impl Into<String>,
        category: DocumentCategory,
    ) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
            category,
        }
    }
}

/// Contract details of a submission. Every field is optional while the
/// draft is in progress; completeness is checked at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractInfo {
    pub contract_type: Option<ContractType>,
    pub execution_status: Option<ContractExecutionStatus>,
    pub contract_period: Option<DateRange>,
    pub amendment_description: Option<String>,
}

impl ContractInfo {
    /// True when every field submission requires is present and the
    /// contract period covers at least one day.
    pub fn is_complete(&self) -> bool {
        self.contract_type.is_some()
            && self.execution_status.is_some()
            && self.contract_period.is_some_and(|period| !period.is_empty())
    }
}

/// One rate certification. A contract-and-rates submission carries one or
/// many of these; a contract-only submission must carry none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateCertification {
    pub rate_type: Option<RateType>,
    pub rate_period: Option<DateRange>,
    pub certification_date: Option<NaiveDate>,
    pub amendment_effective_period: Option<DateRange>,
}

impl RateCertification {
    pub fn is_complete(&self) -> bool {
        self.rate_type.is_some()
            && self.rate_period.is_some_and(|period| !period.is_empty())
            && self.certification_date.is_some()
    }

    /// True if any field has been filled in at all. Used to detect rate
    /// data contaminating a contract-only submission.
    pub fn has_any_data(&self) -> bool {
        self.rate_type.is_some()
            || self.rate_period.is_some()
            || self.certification_date.is_some()
            || self.amendment_effective_period.is_some()
    }
}

/// A state contact listed on the submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateContact {
    pub name: Option<String>,
    pub title_role: Option<String>,
    pub email: Option<String>,
}

/// An actuary contact attached to the rate certifications.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActuaryContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub actuarial_firm: Option<ActuarialFirm>,
}

/// Draft form data: the only variant on which edits are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedFormData {
    pub id: PackageId,
    pub state_code: StateCode,
    /// Per-state monotonically increasing number. Assigned once at package
    /// creation and never mutated afterwards.
    pub state_number: u64,
    pub program_ids: BTreeSet<String>,
    pub submission_type: SubmissionType,
    pub submission_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub documents: Vec<Document>,
    pub contract_info: Option<ContractInfo>,
    pub rate_certifications: Vec<RateCertification>,
    pub state_contacts: Vec<StateContact>,
    pub actuary_contacts: Vec<ActuaryContact>,
}

impl UnlockedFormData {
    /// Create an empty draft. The state number must come from the revision
    /// store's atomic per-state counter.
    pub fn new(
        id: PackageId,
        state_code: StateCode,
        state_number: u64,
        program_ids: BTreeSet<String>,
        submission_type: SubmissionType,
    ) -> Self {
        let now = clock::now();
        Self {
            id,
            state_code,
            state_number,
            program_ids,
            submission_type,
            submission_description: None,
            created_at: now,
            updated_at: now,
            documents: Vec::new(),
            contract_info: None,
            rate_certifications: Vec::new(),
            state_contacts: Vec::new(),
            actuary_contacts: Vec::new(),
        }
    }

    /// Bump the updated timestamp after an edit.
    pub fn touch(&mut self) {
        self.updated_at = clock::now();
    }

    /// True if any rate certification carries data.
    pub fn has_rate_data(&self) -> bool {
        self.rate_certifications
            .iter()
            .any(RateCertification::has_any_data)
    }

    /// True if at least one contract-category document is attached.
    pub fn has_contract_document(&self) -> bool {
        self.documents
            .iter()
            .any(|doc| doc.category == DocumentCategory::Contract)
    }
}

/// Form data frozen at submission.
///
/// A value of this type has passed every valid-for-submission predicate at
/// the moment it was constructed. Only the transition engine's `submit`
/// (and the codec, when decoding a payload whose status discriminator says
/// Submitted) may build one; never hand-construct it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedFormData {
    pub id: PackageId,
    pub state_code: StateCode,
    pub state_number: u64,
    pub program_ids: BTreeSet<String>,
    pub submission_type: SubmissionType,
    pub submission_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Instant the draft was frozen. Required on this variant.
    pub submitted_at: DateTime<Utc>,
    pub documents: Vec<Document>,
    pub contract_info: Option<ContractInfo>,
    pub rate_certifications: Vec<RateCertification>,
    pub state_contacts: Vec<StateContact>,
    pub actuary_contacts: Vec<ActuaryContact>,
}

/// Tagged union over the two form data variants.
///
/// The wire format's status discriminator selects which variant decoding
/// produces, so the two shapes never blur into one duck-typed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormData {
    Unlocked(UnlockedFormData),
    Locked(LockedFormData),
}

impl FormData {
    pub fn id(&self) -> &PackageId {
        match self {
            FormData::Unlocked(draft) => &draft.id,
            FormData::Locked(locked) => &locked.id,
        }
    }

    pub fn state_code(&self) -> &StateCode {
        match self {
            FormData::Unlocked(draft) => &draft.state_code,
            FormData::Locked(locked) => &locked.state_code,
        }
    }

    pub fn state_number(&self) -> u64 {
        match self {
            FormData::Unlocked(draft) => draft.state_number,
            FormData::Locked(locked) => locked.state_number,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, FormData::Locked(_))
    }
}
