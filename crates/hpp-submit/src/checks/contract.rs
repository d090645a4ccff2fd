//! Contract completeness check.
//!
//! Contract type, execution status, and a non-empty contract period must
//! all be present before a draft can be submitted.

use hpp_model::{ContractInfo, UnlockedFormData};

use crate::error::SubmissionError;

pub fn check(draft: &UnlockedFormData) -> Result<(), SubmissionError> {
    let complete = draft
        .contract_info
        .as_ref()
        .is_some_and(ContractInfo::is_complete);
    if complete {
        Ok(())
    } else {
        Err(SubmissionError::incomplete(
            "formData is missing required contract fields",
        ))
    }
}
