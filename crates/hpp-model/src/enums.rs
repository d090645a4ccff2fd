//! Type-safe enumerations for package form data.
//!
//! These enums cover the values that are represented as bare strings in
//! the upstream review workflow. Each carries a canonical name for
//! display, a `FromStr` that accepts the formats found in stored data
//! (case-insensitive), and nothing else; wire codes live in the codec
//! crate so that renumbering stays a codec-local concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a package submits for review: a contract alone, or a contract
/// together with rate certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionType {
    ContractOnly,
    ContractAndRates,
}

impl SubmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::ContractOnly => "CONTRACT_ONLY",
            SubmissionType::ContractAndRates => "CONTRACT_AND_RATES",
        }
    }

    /// Returns true if rate certifications belong in this submission.
    pub fn includes_rates(&self) -> bool {
        matches!(self, SubmissionType::ContractAndRates)
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CONTRACT_ONLY" => Ok(SubmissionType::ContractOnly),
            "CONTRACT_AND_RATES" => Ok(SubmissionType::ContractAndRates),
            _ => Err(format!("Unknown submission type: {s}")),
        }
    }
}

/// Whether the contract is a base contract or an amendment to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    Base,
    Amendment,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Base => "BASE",
            ContractType::Amendment => "AMENDMENT",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BASE" => Ok(ContractType::Base),
            "AMENDMENT" => Ok(ContractType::Amendment),
            _ => Err(format!("Unknown contract type: {s}")),
        }
    }
}

/// Execution status of the submitted contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractExecutionStatus {
    Executed,
    Unexecuted,
}

impl ContractExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractExecutionStatus::Executed => "EXECUTED",
            ContractExecutionStatus::Unexecuted => "UNEXECUTED",
        }
    }
}

impl fmt::Display for ContractExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractExecutionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EXECUTED" => Ok(ContractExecutionStatus::Executed),
            "UNEXECUTED" => Ok(ContractExecutionStatus::Unexecuted),
            _ => Err(format!("Unknown contract execution status: {s}")),
        }
    }
}

/// Whether a rate certification covers a new rate or amends a prior one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateType {
    New,
    Amendment,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::New => "NEW",
            RateType::Amendment => "AMENDMENT",
        }
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NEW" => Ok(RateType::New),
            "AMENDMENT" => Ok(RateType::Amendment),
            _ => Err(format!("Unknown rate type: {s}")),
        }
    }
}

/// Actuarial firm certifying the rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActuarialFirm {
    Mercer,
    Milliman,
    Optumas,
    Guidehouse,
    Deloitte,
    StateInHouse,
    Other,
}

impl ActuarialFirm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActuarialFirm::Mercer => "MERCER",
            ActuarialFirm::Milliman => "MILLIMAN",
            ActuarialFirm::Optumas => "OPTUMAS",
            ActuarialFirm::Guidehouse => "GUIDEHOUSE",
            ActuarialFirm::Deloitte => "DELOITTE",
            ActuarialFirm::StateInHouse => "STATE_IN_HOUSE",
            ActuarialFirm::Other => "OTHER",
        }
    }
}

impl fmt::Display for ActuarialFirm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActuarialFirm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MERCER" => Ok(ActuarialFirm::Mercer),
            "MILLIMAN" => Ok(ActuarialFirm::Milliman),
            "OPTUMAS" => Ok(ActuarialFirm::Optumas),
            "GUIDEHOUSE" => Ok(ActuarialFirm::Guidehouse),
            "DELOITTE" => Ok(ActuarialFirm::Deloitte),
            "STATE_IN_HOUSE" => Ok(ActuarialFirm::StateInHouse),
            "OTHER" => Ok(ActuarialFirm::Other),
            _ => Err(format!("Unknown actuarial firm: {s}")),
        }
    }
}

/// Category of an uploaded document.
///
/// Submission validity requires at least one [`DocumentCategory::Contract`]
/// document; everything else is supporting material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    Contract,
    ContractSupporting,
    Rate,
    RateSupporting,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Contract => "CONTRACT",
            DocumentCategory::ContractSupporting => "CONTRACT_SUPPORTING",
            DocumentCategory::Rate => "RATE",
            DocumentCategory::RateSupporting => "RATE_SUPPORTING",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CONTRACT" => Ok(DocumentCategory::Contract),
            "CONTRACT_SUPPORTING" => Ok(DocumentCategory::ContractSupporting),
            "RATE" => Ok(DocumentCategory::Rate),
            "RATE_SUPPORTING" => Ok(DocumentCategory::RateSupporting),
            _ => Err(format!("Unknown document category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_type_from_str() {
        assert_eq!(
            "contract_only".parse::<SubmissionType>().unwrap(),
            SubmissionType::ContractOnly
        );
        assert_eq!(
            "CONTRACT_AND_RATES".parse::<SubmissionType>().unwrap(),
            SubmissionType::ContractAndRates
        );
        assert!("RATES_ONLY".parse::<SubmissionType>().is_err());
    }

    #[test]
    fn test_includes_rates() {
        assert!(!SubmissionType::ContractOnly.includes_rates());
        assert!(SubmissionType::ContractAndRates.includes_rates());
    }

    #[test]
    fn test_document_category_roundtrip() {
        for category in [
            DocumentCategory::Contract,
            DocumentCategory::ContractSupporting,
            DocumentCategory::Rate,
            DocumentCategory::RateSupporting,
        ] {
            assert_eq!(
                category.as_str().parse::<DocumentCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_actuarial_firm_from_str() {
        assert_eq!(
            "state_in_house".parse::<ActuarialFirm>().unwrap(),
            ActuarialFirm::StateInHouse
        );
        assert!("ACME".parse::<ActuarialFirm>().is_err());
    }
}
