//! Payload encoding.
//!
//! Both variants flatten into the same field set; the status discriminator
//! and (for submitted payloads) `submitted_at` are the only differences,
//! so encoding borrows a unified view of the fields and walks it once.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use hpp_model::{
    ActuaryContact, ContractInfo, DateRange, Document, FormData, LockedFormData, PackageId,
    RateCertification, StateCode, StateContact, SubmissionType, UnlockedFormData,
};

use crate::tags::{
    self, MAGIC, SCHEMA_VERSION, STATUS_DRAFT, STATUS_SUBMITTED, actuary, contract, doc, rate,
    state_contact, top,
};

/// Encode form data into a versioned binary payload.
///
/// Never fails: values reaching the codec are well-typed by construction.
/// Optional fields that are absent are omitted from the payload entirely.
pub fn encode_form_data(form: &FormData) -> Vec<u8> {
    let (status, fields) = match form {
        FormData::Unlocked(draft) => (STATUS_DRAFT, Fields::from(draft)),
        FormData::Locked(locked) => (STATUS_SUBMITTED, Fields::from(locked)),
    };

    let mut writer = FieldWriter::container();
    writer.u8(top::STATUS, status);
    write_fields(&mut writer, &fields);
    writer.finish()
}

/// Borrowed view over the field set shared by both variants.
struct Fields<'a> {
    id: &'a PackageId,
    state_code: &'a StateCode,
    state_number: u64,
    program_ids: &'a BTreeSet<String>,
    submission_type: SubmissionType,
    submission_description: Option<&'a str>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
    documents: &'a [Document],
    contract_info: Option<&'a ContractInfo>,
    rate_certifications: &'a [RateCertification],
    state_contacts: &'a [StateContact],
    actuary_contacts: &'a [ActuaryContact],
}

impl<'a> From<&'a UnlockedFormData> for Fields<'a> {
    fn from(draft: &'a UnlockedFormData) -> Self {
        Self {
            id: &draft.id,
            state_code: &draft.state_code,
            state_number: draft.state_number,
            program_ids: &draft.program_ids,
            submission_type: draft.submission_type,
            submission_description: draft.submission_description.as_deref(),
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            submitted_at: None,
            documents: &draft.documents,
            contract_info: draft.contract_info.as_ref(),
            rate_certifications: &draft.rate_certifications,
            state_contacts: &draft.state_contacts,
            actuary_contacts: &draft.actuary_contacts,
        }
    }
}

impl<'a> From<&'a LockedFormData> for Fields<'a> {
    fn from(locked: &'a LockedFormData) -> Self {
        Self {
            id: &locked.id,
            state_code: &locked.state_code,
            state_number: locked.state_number,
            program_ids: &locked.program_ids,
            submission_type: locked.submission_type,
            submission_description: locked.submission_description.as_deref(),
            created_at: locked.created_at,
            updated_at: locked.updated_at,
            submitted_at: Some(locked.submitted_at),
            documents: &locked.documents,
            contract_info: locked.contract_info.as_ref(),
            rate_certifications: &locked.rate_certifications,
            state_contacts: &locked.state_contacts,
            actuary_contacts: &locked.actuary_contacts,
        }
    }
}

fn write_fields(writer: &mut FieldWriter, fields: &Fields<'_>) {
    writer.str(top::ID, fields.id.as_str());
    writer.str(top::STATE_CODE, fields.state_code.as_str());
    writer.u64(top::STATE_NUMBER, fields.state_number);
    for program_id in fields.program_ids {
        writer.str(top::PROGRAM_ID, program_id);
    }
    writer.u8(
        top::SUBMISSION_TYPE,
        tags::submission_type_code(fields.submission_type),
    );
    if let Some(description) = fields.submission_description {
        writer.str(top::SUBMISSION_DESCRIPTION, description);
    }
    writer.instant(top::CREATED_AT, fields.created_at);
    writer.instant(top::UPDATED_AT, fields.updated_at);
    if let Some(submitted_at) = fields.submitted_at {
        writer.instant(top::SUBMITTED_AT, submitted_at);
    }
    for document in fields.documents {
        writer.message(top::DOCUMENT, encode_document(document));
    }
    if let Some(info) = fields.contract_info {
        writer.message(top::CONTRACT_INFO, encode_contract(info));
    }
    for certification in fields.rate_certifications {
        writer.message(top::RATE_CERTIFICATION, encode_rate(certification));
    }
    for contact in fields.state_contacts {
        writer.message(top::STATE_CONTACT, encode_state_contact(contact));
    }
    for contact in fields.actuary_contacts {
        writer.message(top::ACTUARY_CONTACT, encode_actuary_contact(contact));
    }
}

fn encode_document(document: &Document) -> Vec<u8> {
    let mut writer = FieldWriter::nested();
    writer.str(doc::NAME, &document.name);
    writer.str(doc::LOCATOR, &document.locator);
    writer.u8(
        doc::CATEGORY,
        tags::document_category_code(document.category),
    );
    writer.finish()
}

fn encode_contract(info: &ContractInfo) -> Vec<u8> {
    let mut writer = FieldWriter::nested();
    if let Some(contract_type) = info.contract_type {
        writer.u8(
            contract::CONTRACT_TYPE,
            tags::contract_type_code(contract_type),
        );
    }
    if let Some(status) = info.execution_status {
        writer.u8(
            contract::EXECUTION_STATUS,
            tags::execution_status_code(status),
        );
    }
    if let Some(period) = info.contract_period {
        writer.range(contract::PERIOD_START, contract::PERIOD_END, period);
    }
    if let Some(description) = info.amendment_description.as_deref() {
        writer.str(contract::AMENDMENT_DESCRIPTION, description);
    }
    writer.finish()
}

fn encode_rate(certification: &RateCertification) -> Vec<u8> {
    let mut writer = FieldWriter::nested();
    if let Some(rate_type) = certification.rate_type {
        writer.u8(rate::RATE_TYPE, tags::rate_type_code(rate_type));
    }
    if let Some(period) = certification.rate_period {
        writer.range(rate::PERIOD_START, rate::PERIOD_END, period);
    }
    if let Some(date) = certification.certification_date {
        writer.date(rate::CERTIFICATION_DATE, date);
    }
    if let Some(period) = certification.amendment_effective_period {
        writer.range(rate::AMENDMENT_START, rate::AMENDMENT_END, period);
    }
    writer.finish()
}

fn encode_state_contact(contact: &StateContact) -> Vec<u8> {
    let mut writer = FieldWriter::nested();
    if let Some(name) = contact.name.as_deref() {
        writer.str(state_contact::NAME, name);
    }
    if let Some(title_role) = contact.title_role.as_deref() {
        writer.str(state_contact::TITLE_ROLE, title_role);
    }
    if let Some(email) = contact.email.as_deref() {
        writer.str(state_contact::EMAIL, email);
    }
    writer.finish()
}

fn encode_actuary_contact(contact: &ActuaryContact) -> Vec<u8> {
    let mut writer = FieldWriter::nested();
    if let Some(name) = contact.name.as_deref() {
        writer.str(actuary::NAME, name);
    }
    if let Some(email) = contact.email.as_deref() {
        writer.str(actuary::EMAIL, email);
    }
    if let Some(firm) = contact.actuarial_firm {
        writer.u8(actuary::FIRM, tags::actuarial_firm_code(firm));
    }
    writer.finish()
}

/// Tag/length/value field writer.
struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    /// Writer for a top-level container: starts with magic and version.
    fn container() -> Self {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
        Self { buf }
    }

    /// Writer for a nested message: bare field sequence.
    fn nested() -> Self {
        Self { buf: Vec::new() }
    }

    fn bytes(&mut self, tag: u16, value: &[u8]) {
        self.buf.extend_from_slice(&tag.to_le_bytes());
        self.buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(value);
    }

    fn str(&mut self, tag: u16, value: &str) {
        self.bytes(tag, value.as_bytes());
    }

    fn u8(&mut self, tag: u16, value: u8) {
        self.bytes(tag, &[value]);
    }

    fn u64(&mut self, tag: u16, value: u64) {
        self.bytes(tag, &value.to_le_bytes());
    }

    /// Absolute instant as epoch milliseconds.
    fn instant(&mut self, tag: u16, value: DateTime<Utc>) {
        self.bytes(tag, &value.timestamp_millis().to_le_bytes());
    }

    /// Calendar date as a day number (days from the common era).
    fn date(&mut self, tag: u16, value: NaiveDate) {
        self.bytes(tag, &value.num_days_from_ce().to_le_bytes());
    }

    fn range(&mut self, start_tag: u16, end_tag: u16, range: DateRange) {
        self.date(start_tag, range.start);
        self.date(end_tag, range.end);
    }

    fn message(&mut self, tag: u16, payload: Vec<u8>) {
        self.bytes(tag, &payload);
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn draft() -> UnlockedFormData {
        UnlockedFormData::new(
            PackageId::new("pkg-1").unwrap(),
            StateCode::new("FL").unwrap(),
            1,
            BTreeSet::from(["pmap".to_string()]),
            SubmissionType::ContractOnly,
        )
    }

    #[test]
    fn test_payload_starts_with_magic_and_version() {
        let payload = encode_form_data(&FormData::Unlocked(draft()));
        assert_eq!(&payload[..4], b"HPFD");
        assert_eq!(u16::from_le_bytes([payload[4], payload[5]]), SCHEMA_VERSION);
    }

    #[test]
    fn test_status_is_first_field() {
        let payload = encode_form_data(&FormData::Unlocked(draft()));
        // tag 1, length 1, value STATUS_DRAFT
        assert_eq!(u16::from_le_bytes([payload[6], payload[7]]), top::STATUS);
        assert_eq!(payload[12], STATUS_DRAFT);
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let bare = encode_form_data(&FormData::Unlocked(draft()));
        let mut with_description = draft();
        with_description.submission_description = Some("base contract".to_string());
        let described = encode_form_data(&FormData::Unlocked(with_description));
        assert!(described.len() > bare.len());
    }
}
