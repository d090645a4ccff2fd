//! Field tags, status codes, and enum wire codes.
//!
//! Tags are append-only across schema versions: never remove or renumber
//! one, only add. Nested messages (documents, contract info, rate
//! certifications, contacts) each have their own tag space.

use hpp_model::{
    ActuarialFirm, ContractExecutionStatus, ContractType, DocumentCategory, RateType,
    SubmissionType,
};

/// Payload identification bytes.
pub const MAGIC: [u8; 4] = *b"HPFD";

/// Current schema version written by the encoder.
pub const SCHEMA_VERSION: u16 = 1;

/// Container header length: magic plus version.
pub(crate) const HEADER_LEN: usize = 6;

/// Top-level field tags.
pub(crate) mod top {
    pub const STATUS: u16 = 1;
    pub const ID: u16 = 2;
    pub const STATE_CODE: u16 = 3;
    pub const STATE_NUMBER: u16 = 4;
    pub const PROGRAM_ID: u16 = 5;
    pub const SUBMISSION_TYPE: u16 = 6;
    pub const SUBMISSION_DESCRIPTION: u16 = 7;
    pub const CREATED_AT: u16 = 8;
    pub const UPDATED_AT: u16 = 9;
    pub const SUBMITTED_AT: u16 = 10;
    pub const DOCUMENT: u16 = 11;
    pub const CONTRACT_INFO: u16 = 12;
    pub const RATE_CERTIFICATION: u16 = 13;
    pub const STATE_CONTACT: u16 = 14;
    pub const ACTUARY_CONTACT: u16 = 15;
}

/// Document message tags.
pub(crate) mod doc {
    pub const NAME: u16 = 1;
    pub const LOCATOR: u16 = 2;
    pub const CATEGORY: u16 = 3;
}

/// Contract info message tags.
pub(crate) mod contract {
    pub const CONTRACT_TYPE: u16 = 1;
    pub const EXECUTION_STATUS: u16 = 2;
    pub const PERIOD_START: u16 = 3;
    pub const PERIOD_END: u16 = 4;
    pub const AMENDMENT_DESCRIPTION: u16 = 5;
}

/// Rate certification message tags.
pub(crate) mod rate {
    pub const RATE_TYPE: u16 = 1;
    pub const PERIOD_START: u16 = 2;
    pub const PERIOD_END: u16 = 3;
    pub const CERTIFICATION_DATE: u16 = 4;
    pub const AMENDMENT_START: u16 = 5;
    pub const AMENDMENT_END: u16 = 6;
}

/// State contact message tags.
pub(crate) mod state_contact {
    pub const NAME: u16 = 1;
    pub const TITLE_ROLE: u16 = 2;
    pub const EMAIL: u16 = 3;
}

/// Actuary contact message tags.
pub(crate) mod actuary {
    pub const NAME: u16 = 1;
    pub const EMAIL: u16 = 2;
    pub const FIRM: u16 = 3;
}

/// Status discriminator code for a draft payload.
pub(crate) const STATUS_DRAFT: u8 = 1;
/// Status discriminator code for a submitted payload.
pub(crate) const STATUS_SUBMITTED: u8 = 2;

pub(crate) fn submission_type_code(value: SubmissionType) -> u8 {
    match value {
        SubmissionType::ContractOnly => 1,
        SubmissionType::ContractAndRates => 2,
    }
}

pub(crate) fn submission_type_from_code(code: u8) -> Option<SubmissionType> {
    match code {
        1 => Some(SubmissionType::ContractOnly),
        2 => Some(SubmissionType::ContractAndRates),
        _ => None,
    }
}

pub(crate) fn contract_type_code(value: ContractType) -> u8 {
    match value {
        ContractType::Base => 1,
        ContractType::Amendment => 2,
    }
}

pub(crate) fn contract_type_from_code(code: u8) -> Option<ContractType> {
    match code {
        1 => Some(ContractType::Base),
        2 => Some(ContractType::Amendment),
        _ => None,
    }
}

pub(crate) fn execution_status_code(value: ContractExecutionStatus) -> u8 {
    match value {
        ContractExecutionStatus::Executed => 1,
        ContractExecutionStatus::Unexecuted => 2,
    }
}

pub(crate) fn execution_status_from_code(code: u8) -> Option<ContractExecutionStatus> {
    match code {
        1 => Some(ContractExecutionStatus::Executed),
        2 => Some(ContractExecutionStatus::Unexecuted),
        _ => None,
    }
}

pub(crate) fn rate_type_code(value: RateType) -> u8 {
    match value {
        RateType::New => 1,
        RateType::Amendment => 2,
    }
}

pub(crate) fn rate_type_from_code(code: u8) -> Option<RateType> {
    match code {
        1 => Some(RateType::New),
        2 => Some(RateType::Amendment),
        _ => None,
    }
}

pub(crate) fn actuarial_firm_code(value: ActuarialFirm) -> u8 {
    match value {
        ActuarialFirm::Mercer => 1,
        ActuarialFirm::Milliman => 2,
        ActuarialFirm::Optumas => 3,
        ActuarialFirm::Guidehouse => 4,
        ActuarialFirm::Deloitte => 5,
        ActuarialFirm::StateInHouse => 6,
        ActuarialFirm::Other => 7,
    }
}

pub(crate) fn actuarial_firm_from_code(code: u8) -> Option<ActuarialFirm> {
    match code {
        1 => Some(ActuarialFirm::Mercer),
        2 => Some(ActuarialFirm::Milliman),
        3 => Some(ActuarialFirm::Optumas),
        4 => Some(ActuarialFirm::Guidehouse),
        5 => Some(ActuarialFirm::Deloitte),
        6 => Some(ActuarialFirm::StateInHouse),
        7 => Some(ActuarialFirm::Other),
        _ => None,
    }
}

pub(crate) fn document_category_code(value: DocumentCategory) -> u8 {
    match value {
        DocumentCategory::Contract => 1,
        DocumentCategory::ContractSupporting => 2,
        DocumentCategory::Rate => 3,
        DocumentCategory::RateSupporting => 4,
    }
}

pub(crate) fn document_category_from_code(code: u8) -> Option<DocumentCategory> {
    match code {
        1 => Some(DocumentCategory::Contract),
        2 => Some(DocumentCategory::ContractSupporting),
        3 => Some(DocumentCategory::Rate),
        4 => Some(DocumentCategory::RateSupporting),
        _ => None,
    }
}
