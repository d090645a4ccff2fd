//! Document presence check.
//!
//! At least one contract-category document must be attached.

use hpp_model::UnlockedFormData;

use crate::error::SubmissionError;

pub fn check(draft: &UnlockedFormData) -> Result<(), SubmissionError> {
    if draft.has_contract_document() {
        Ok(())
    } else {
        Err(SubmissionError::incomplete(
            "formData must include at least one contract document",
        ))
    }
}
