//! Rate certification checks.
//!
//! For a contract-and-rates submission every certification must be
//! complete (and at least one must exist). For a contract-only submission
//! the presence of any rate data is a different failure class entirely:
//! contamination between submission types, reported as Invalid rather
//! than Incomplete.

use hpp_model::{RateCertification, UnlockedFormData};

use crate::error::SubmissionError;

pub fn check(draft: &UnlockedFormData) -> Result<(), SubmissionError> {
    if draft.submission_type.includes_rates() {
        let complete = !draft.rate_certifications.is_empty()
            && draft
                .rate_certifications
                .iter()
                .all(RateCertification::is_complete);
        if complete {
            Ok(())
        } else {
            Err(SubmissionError::incomplete(
                "formData is missing required rate fields",
            ))
        }
    } else if draft.has_rate_data() {
        Err(SubmissionError::invalid(
            "formData includes rate data for a contract-only submission",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmissionErrorCode;
    use chrono::NaiveDate;
    use hpp_model::{DateRange, PackageId, RateType, StateCode, SubmissionType};
    use std::collections::BTreeSet;

    fn draft(submission_type: SubmissionType) -> UnlockedFormData {
        UnlockedFormData::new(
            PackageId::new("pkg-1").unwrap(),
            StateCode::new("FL").unwrap(),
            1,
            BTreeSet::new(),
            submission_type,
        )
    }

    fn complete_certification() -> RateCertification {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        RateCertification {
            rate_type: Some(RateType::New),
            rate_period: Some(DateRange::new(start, end)),
            certification_date: Some(start),
            amendment_effective_period: None,
        }
    }

    #[test]
    fn test_contract_and_rates_requires_a_certification() {
        let d = draft(SubmissionType::ContractAndRates);
        let err = check(&d).unwrap_err();
        assert_eq!(err.code(), SubmissionErrorCode::Incomplete);
    }

    #[test]
    fn test_incomplete_certification_fails() {
        let mut d = draft(SubmissionType::ContractAndRates);
        d.rate_certifications = vec![complete_certification(), RateCertification {
            certification_date: None,
            ..complete_certification()
        }];
        let err = check(&d).unwrap_err();
        assert_eq!(err.code(), SubmissionErrorCode::Incomplete);
    }

    #[test]
    fn test_complete_certifications_pass() {
        let mut d = draft(SubmissionType::ContractAndRates);
        d.rate_certifications = vec![complete_certification()];
        assert!(check(&d).is_ok());
    }

    #[test]
    fn test_contract_only_with_rate_data_is_invalid_not_incomplete() {
        let mut d = draft(SubmissionType::ContractOnly);
        d.rate_certifications = vec![RateCertification {
            rate_type: Some(RateType::New),
            ..Default::default()
        }];
        let err = check(&d).unwrap_err();
        assert_eq!(err.code(), SubmissionErrorCode::Invalid);
    }

    #[test]
    fn test_contract_only_with_blank_entries_passes() {
        // An empty placeholder row carries no data and is not contamination.
        let mut d = draft(SubmissionType::ContractOnly);
        d.rate_certifications = vec![RateCertification::default()];
        assert!(check(&d).is_ok());
    }
}
