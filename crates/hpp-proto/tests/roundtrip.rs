//! Round-trip fidelity across the optional-field matrix.
//!
//! For every legally constructed form data value `v`,
//! `decode(encode(v)) == v` must hold, whichever optional fields happen to
//! be present or absent.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use hpp_model::{
    ActuarialFirm, ActuaryContact, ContractExecutionStatus, ContractInfo, ContractType, DateRange,
    Document, DocumentCategory, FormData, LockedFormData, PackageId, RateCertification, RateType,
    StateCode, StateContact, SubmissionType, UnlockedFormData,
};
use hpp_proto::{decode_form_data, encode_form_data};
use proptest::collection::{btree_set, vec};
use proptest::option;
use proptest::prelude::*;

fn date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn date_range() -> impl Strategy<Value = DateRange> {
    (date(), date()).prop_map(|(start, end)| DateRange::new(start, end))
}

fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970..2100, millisecond precision like the wire format.
    (0i64..4_102_444_800_000).prop_map(|ms| Utc.timestamp_millis_opt(ms).single().unwrap())
}

fn short_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,-]{0,24}"
}

fn submission_type() -> impl Strategy<Value = SubmissionType> {
    prop_oneof![
        Just(SubmissionType::ContractOnly),
        Just(SubmissionType::ContractAndRates),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    (
        short_text(),
        short_text(),
        prop_oneof![
            Just(DocumentCategory::Contract),
            Just(DocumentCategory::ContractSupporting),
            Just(DocumentCategory::Rate),
            Just(DocumentCategory::RateSupporting),
        ],
    )
        .prop_map(|(name, locator, category)| Document::new(name, locator, category))
}

fn contract_info() -> impl Strategy<Value = ContractInfo> {
    (
        option::of(prop_oneof![
            Just(ContractType::Base),
            Just(ContractType::Amendment)
        ]),
        option::of(prop_oneof![
            Just(ContractExecutionStatus::Executed),
            Just(ContractExecutionStatus::Unexecuted)
        ]),
        option::of(date_range()),
        option::of(short_text()),
    )
        .prop_map(
            |(contract_type, execution_status, contract_period, amendment_description)| {
                ContractInfo {
                    contract_type,
                    execution_status,
                    contract_period,
                    amendment_description,
                }
            },
        )
}

fn rate_certification() -> impl Strategy<Value = RateCertification> {
    (
        option::of(prop_oneof![Just(RateType::New), Just(RateType::Amendment)]),
        option::of(date_range()),
        option::of(date()),
        option::of(date_range()),
    )
        .prop_map(
            |(rate_type, rate_period, certification_date, amendment_effective_period)| {
                RateCertification {
                    rate_type,
                    rate_period,
                    certification_date,
                    amendment_effective_period,
                }
            },
        )
}

fn state_contact() -> impl Strategy<Value = StateContact> {
    (
        option::of(short_text()),
        option::of(short_text()),
        option::of(short_text()),
    )
        .prop_map(|(name, title_role, email)| StateContact {
            name,
            title_role,
            email,
        })
}

fn actuary_contact() -> impl Strategy<Value = ActuaryContact> {
    (
        option::of(short_text()),
        option::of(short_text()),
        option::of(prop_oneof![
            Just(ActuarialFirm::Mercer),
            Just(ActuarialFirm::Milliman),
            Just(ActuarialFirm::Optumas),
            Just(ActuarialFirm::Guidehouse),
            Just(ActuarialFirm::Deloitte),
            Just(ActuarialFirm::StateInHouse),
            Just(ActuarialFirm::Other),
        ]),
    )
        .prop_map(|(name, email, actuarial_firm)| ActuaryContact {
            name,
            email,
            actuarial_firm,
        })
}

#[allow(clippy::type_complexity)]
fn unlocked() -> impl Strategy<Value = UnlockedFormData> {
    (
        (
            "[a-z0-9-]{1,12}",
            prop_oneof![Just("FL"), Just("MN"), Just("VA")],
            1u64..10_000,
            btree_set("[a-z0-9-]{1,8}", 0..4),
            submission_type(),
            option::of(short_text()),
            instant(),
            instant(),
        ),
        (
            vec(document(), 0..3),
            option::of(contract_info()),
            vec(rate_certification(), 0..3),
            vec(state_contact(), 0..2),
            vec(actuary_contact(), 0..2),
        ),
    )
        .prop_map(
            |(
                (
                    id,
                    state_code,
                    state_number,
                    program_ids,
                    submission_type,
                    submission_description,
                    created_at,
                    updated_at,
                ),
                (documents, contract_info, rate_certifications, state_contacts, actuary_contacts),
            )| UnlockedFormData {
                id: PackageId::new(id).unwrap(),
                state_code: StateCode::new(state_code).unwrap(),
                state_number,
                program_ids,
                submission_type,
                submission_description,
                created_at,
                updated_at,
                documents,
                contract_info,
                rate_certifications,
                state_contacts,
                actuary_contacts,
            },
        )
}

fn form_data() -> impl Strategy<Value = FormData> {
    (unlocked(), option::of(instant())).prop_map(|(draft, submitted_at)| match submitted_at {
        None => FormData::Unlocked(draft),
        Some(submitted_at) => FormData::Locked(LockedFormData {
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
        }),
    })
}

proptest! {
    #[test]
    fn roundtrip_across_optional_matrix(form in form_data()) {
        let payload = encode_form_data(&form);
        let decoded = decode_form_data(&payload).unwrap();
        prop_assert_eq!(decoded, form);
    }
}

#[test]
fn minimal_draft_roundtrips() {
    let draft = UnlockedFormData::new(
        PackageId::new("fl-mmc-0001").unwrap(),
        StateCode::new("FL").unwrap(),
        1,
        BTreeSet::new(),
        SubmissionType::ContractOnly,
    );
    let form = FormData::Unlocked(draft);
    assert_eq!(decode_form_data(&encode_form_data(&form)).unwrap(), form);
}

#[test]
fn fully_populated_locked_roundtrips() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 2, 10, 16, 45, 0).unwrap();
    let locked = LockedFormData {
        id: PackageId::new("mn-pmap-0042").unwrap(),
        state_code: StateCode::new("MN").unwrap(),
        state_number: 42,
        program_ids: BTreeSet::from(["pmap".to_string(), "snbc".to_string()]),
        submission_type: SubmissionType::ContractAndRates,
        submission_description: Some("Contract and rates for 2024".to_string()),
        created_at: now,
        updated_at: now,
        submitted_at: now,
        documents: vec![
            Document::new("contract.pdf", "s3://bucket/contract.pdf", DocumentCategory::Contract),
            Document::new("rates.pdf", "s3://bucket/rates.pdf", DocumentCategory::Rate),
        ],
        contract_info: Some(ContractInfo {
            contract_type: Some(ContractType::Base),
            execution_status: Some(ContractExecutionStatus::Executed),
            contract_period: Some(DateRange::new(start, end)),
            amendment_description: None,
        }),
        rate_certifications: vec![RateCertification {
            rate_type: Some(RateType::New),
            rate_period: Some(DateRange::new(start, end)),
            certification_date: Some(start),
            amendment_effective_period: None,
        }],
        state_contacts: vec![StateContact {
            name: Some("Ana Sostenuto".to_string()),
            title_role: Some("Program Lead".to_string()),
            email: Some("ana@state.mn.us".to_string()),
        }],
        actuary_contacts: vec![ActuaryContact {
            name: Some("Luis Acturro".to_string()),
            email: Some("luis@example.com".to_string()),
            actuarial_firm: Some(ActuarialFirm::Mercer),
        }],
    };
    let form = FormData::Locked(locked);
    assert_eq!(decode_form_data(&encode_form_data(&form)).unwrap(), form);
}
