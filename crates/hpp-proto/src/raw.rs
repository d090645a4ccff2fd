//! Wire-adjacent presence layer.
//!
//! Every field read off the wire lands here wrapped in an `Option` (or a
//! list), so "field absent" never collapses into "field explicitly empty".
//! Conversion into the domain [`FormData`] happens in one step afterwards:
//! the status discriminator selects the variant, unknown enum codes fail
//! fast, and every missing variant-required field is collected into a
//! single [`DecodeError::SchemaViolation`].

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use hpp_model::{
    ActuaryContact, ContractInfo, DateRange, Document, FormData, LockedFormData, PackageId,
    RateCertification, StateCode, StateContact, UnlockedFormData,
};

use crate::error::{DecodeError, Result};
use crate::tags::{self, STATUS_DRAFT, STATUS_SUBMITTED};

#[derive(Debug, Default)]
pub(crate) struct RawForm {
    pub status: Option<u8>,
    pub id: Option<String>,
    pub state_code: Option<String>,
    pub state_number: Option<u64>,
    pub program_ids: BTreeSet<String>,
    pub submission_type: Option<u8>,
    pub submission_description: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub submitted_at: Option<i64>,
    pub documents: Vec<RawDocument>,
    pub contract_info: Option<RawContract>,
    pub rate_certifications: Vec<RawRate>,
    pub state_contacts: Vec<RawStateContact>,
    pub actuary_contacts: Vec<RawActuary>,
}

#[derive(Debug, Default)]
pub(crate) struct RawDocument {
    pub name: Option<String>,
    pub locator: Option<String>,
    pub category: Option<u8>,
}

#[derive(Debug, Default)]
pub(crate) struct RawContract {
    pub contract_type: Option<u8>,
    pub execution_status: Option<u8>,
    pub period_start: Option<i32>,
    pub period_end: Option<i32>,
    pub amendment_description: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct RawRate {
    pub rate_type: Option<u8>,
    pub period_start: Option<i32>,
    pub period_end: Option<i32>,
    pub certification_date: Option<i32>,
    pub amendment_start: Option<i32>,
    pub amendment_end: Option<i32>,
}

#[derive(Debug, Default)]
pub(crate) struct RawStateContact {
    pub name: Option<String>,
    pub title_role: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct RawActuary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub firm: Option<u8>,
}

enum Variant {
    Draft,
    Submitted,
}

impl RawForm {
    /// Convert the presence layer into a typed domain value.
    pub fn into_form_data(self) -> Result<FormData> {
        // The status discriminator is checked before anything else.
        let variant = match self.status {
            Some(STATUS_DRAFT) => Variant::Draft,
            Some(STATUS_SUBMITTED) => Variant::Submitted,
            _ => return Err(DecodeError::MissingStatus),
        };

        let mut violations: Vec<String> = Vec::new();

        let id = self.id.and_then(|value| PackageId::new(value).ok());
        if id.is_none() {
            violations.push("id".to_string());
        }

        let state_code = self
            .state_code
            .and_then(|value| StateCode::new(value).ok());
        if state_code.is_none() {
            violations.push("state_code".to_string());
        }

        if self.state_number.is_none() {
            violations.push("state_number".to_string());
        }

        let submission_type = match self.submission_type {
            Some(code) => match tags::submission_type_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "submission_type",
                        code,
                    });
                }
            },
            None => {
                violations.push("submission_type".to_string());
                None
            }
        };

        let created_at = convert_required_instant("created_at", self.created_at, &mut violations)?;
        let updated_at = convert_required_instant("updated_at", self.updated_at, &mut violations)?;

        let submitted_at = match (&variant, self.submitted_at) {
            (Variant::Submitted, Some(millis)) => Some(instant_from_millis("submitted_at", millis)?),
            (Variant::Submitted, None) => {
                violations.push("submitted_at".to_string());
                None
            }
            // A draft payload never carries a submission instant; one left
            // behind by a foreign writer is dropped.
            (Variant::Draft, _) => None,
        };

        let mut documents = Vec::with_capacity(self.documents.len());
        for (index, raw) in self.documents.into_iter().enumerate() {
            if let Some(document) = raw.into_document(index, &mut violations)? {
                documents.push(document);
            }
        }

        let contract_info = match self.contract_info {
            Some(raw) => Some(raw.into_contract(&mut violations)?),
            None => None,
        };

        let mut rate_certifications = Vec::with_capacity(self.rate_certifications.len());
        for (index, raw) in self.rate_certifications.into_iter().enumerate() {
            rate_certifications.push(raw.into_certification(index, &mut violations)?);
        }

        let state_contacts: Vec<StateContact> = self
            .state_contacts
            .into_iter()
            .map(RawStateContact::into_contact)
            .collect();

        let mut actuary_contacts = Vec::with_capacity(self.actuary_contacts.len());
        for raw in self.actuary_contacts {
            actuary_contacts.push(raw.into_contact()?);
        }

        match (
            id,
            state_code,
            self.state_number,
            submission_type,
            created_at,
            updated_at,
        ) {
            (
                Some(id),
                Some(state_code),
                Some(state_number),
                Some(submission_type),
                Some(created_at),
                Some(updated_at),
            ) if violations.is_empty() => match variant {
                Variant::Draft => Ok(FormData::Unlocked(UnlockedFormData {
                    id,
                    state_code,
                    state_number,
                    program_ids: self.program_ids,
                    submission_type,
                    submission_description: self.submission_description,
                    created_at,
                    updated_at,
                    documents,
                    contract_info,
                    rate_certifications,
                    state_contacts,
                    actuary_contacts,
                })),
                Variant::Submitted => {
                    let Some(submitted_at) = submitted_at else {
                        return Err(DecodeError::schema_violation(vec![
                            "submitted_at".to_string()
                        ]));
                    };
                    Ok(FormData::Locked(LockedFormData {
                        id,
                        state_code,
                        state_number,
                        program_ids: self.program_ids,
                        submission_type,
                        submission_description: self.submission_description,
                        created_at,
                        updated_at,
                        submitted_at,
                        documents,
                        contract_info,
                        rate_certifications,
                        state_contacts,
                        actuary_contacts,
                    }))
                }
            },
            _ => Err(DecodeError::schema_violation(violations)),
        }
    }
}

impl RawDocument {
    fn into_document(
        self,
        index: usize,
        violations: &mut Vec<String>,
    ) -> Result<Option<Document>> {
        let category = match self.category {
            Some(code) => match tags::document_category_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "documents.category",
                        code,
                    });
                }
            },
            None => {
                violations.push(format!("documents[{index}].category"));
                None
            }
        };
        if self.name.is_none() {
            violations.push(format!("documents[{index}].name"));
        }
        if self.locator.is_none() {
            violations.push(format!("documents[{index}].locator"));
        }
        match (self.name, self.locator, category) {
            (Some(name), Some(locator), Some(category)) => {
                Ok(Some(Document::new(name, locator, category)))
            }
            _ => Ok(None),
        }
    }
}

impl RawContract {
    fn into_contract(self, violations: &mut Vec<String>) -> Result<ContractInfo> {
        let contract_type = match self.contract_type {
            Some(code) => match tags::contract_type_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "contract_info.contract_type",
                        code,
                    });
                }
            },
            None => None,
        };
        let execution_status = match self.execution_status {
            Some(code) => match tags::execution_status_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "contract_info.execution_status",
                        code,
                    });
                }
            },
            None => None,
        };
        let contract_period = range_from_parts(
            "contract_info.contract_period",
            self.period_start,
            self.period_end,
            violations,
        )?;
        Ok(ContractInfo {
            contract_type,
            execution_status,
            contract_period,
            amendment_description: self.amendment_description,
        })
    }
}

impl RawRate {
    fn into_certification(
        self,
        index: usize,
        violations: &mut Vec<String>,
    ) -> Result<RateCertification> {
        let rate_type = match self.rate_type {
            Some(code) => match tags::rate_type_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "rate_certifications.rate_type",
                        code,
                    });
                }
            },
            None => None,
        };
        let rate_period = range_from_parts(
            &format!("rate_certifications[{index}].rate_period"),
            self.period_start,
            self.period_end,
            violations,
        )?;
        let certification_date = match self.certification_date {
            Some(days) => Some(date_from_days(
                format!("rate_certifications[{index}].certification_date"),
                days,
            )?),
            None => None,
        };
        let amendment_effective_period = range_from_parts(
            &format!("rate_certifications[{index}].amendment_effective_period"),
            self.amendment_start,
            self.amendment_end,
            violations,
        )?;
        Ok(RateCertification {
            rate_type,
            rate_period,
            certification_date,
            amendment_effective_period,
        })
    }
}

impl RawStateContact {
    fn into_contact(self) -> StateContact {
        StateContact {
            name: self.name,
            title_role: self.title_role,
            email: self.email,
        }
    }
}

impl RawActuary {
    fn into_contact(self) -> Result<ActuaryContact> {
        let actuarial_firm = match self.firm {
            Some(code) => match tags::actuarial_firm_from_code(code) {
                Some(value) => Some(value),
                None => {
                    return Err(DecodeError::UnknownEnum {
                        field: "actuary_contacts.actuarial_firm",
                        code,
                    });
                }
            },
            None => None,
        };
        Ok(ActuaryContact {
            name: self.name,
            email: self.email,
            actuarial_firm,
        })
    }
}

fn convert_required_instant(
    field: &'static str,
    millis: Option<i64>,
    violations: &mut Vec<String>,
) -> Result<Option<DateTime<Utc>>> {
    match millis {
        Some(millis) => Ok(Some(instant_from_millis(field, millis)?)),
        None => {
            violations.push(field.to_string());
            Ok(None)
        }
    }
}

fn instant_from_millis(field: impl Into<String>, millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| DecodeError::malformed(field, format!("instant out of range: {millis}")))
}

fn date_from_days(field: impl Into<String>, days: i32) -> Result<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days)
        .ok_or_else(|| DecodeError::malformed(field, format!("date out of range: {days}")))
}

/// Pair two optional endpoints into a date range. Exactly one endpoint
/// present is a schema violation: a legal encoder writes both or neither.
fn range_from_parts(
    path: &str,
    start: Option<i32>,
    end: Option<i32>,
    violations: &mut Vec<String>,
) -> Result<Option<DateRange>> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => Ok(Some(DateRange::new(
            date_from_days(path, start)?,
            date_from_days(path, end)?,
        ))),
        _ => {
            violations.push(path.to_string());
            Ok(None)
        }
    }
}
