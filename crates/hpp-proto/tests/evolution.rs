//! Schema evolution and decode-failure behavior.
//!
//! Payloads written by a newer codec (extra tags) must decode unchanged;
//! payloads that select the locked variant but lack its required fields
//! must fail with one error that names every offending field.

use std::collections::BTreeSet;

use hpp_model::{DocumentCategory, FormData, PackageId, StateCode, SubmissionType, UnlockedFormData};
use hpp_proto::{DecodeError, decode_form_data, encode_form_data};

fn draft() -> UnlockedFormData {
    UnlockedFormData::new(
        PackageId::new("fl-mmc-0007").unwrap(),
        StateCode::new("FL").unwrap(),
        7,
        BTreeSet::from(["mma".to_string()]),
        SubmissionType::ContractOnly,
    )
}

/// Append a raw field to an encoded payload.
fn append_field(payload: &mut Vec<u8>, tag: u16, value: &[u8]) {
    payload.extend_from_slice(&tag.to_le_bytes());
    payload.extend_from_slice(&(value.len() as u32).to_le_bytes());
    payload.extend_from_slice(value);
}

#[test]
fn unknown_trailing_fields_are_ignored() {
    let form = FormData::Unlocked(draft());
    let mut payload = encode_form_data(&form);
    append_field(&mut payload, 2047, b"a field from a future schema");
    append_field(&mut payload, 2048, &42u64.to_le_bytes());

    assert_eq!(decode_form_data(&payload).unwrap(), form);
}

#[test]
fn status_flip_without_submitted_at_is_a_schema_violation() {
    // The encoder writes the status discriminator first: tag at byte 6,
    // one-byte value at byte 12. Flipping draft -> submitted produces a
    // locked-shaped payload missing submitted_at.
    let mut payload = encode_form_data(&FormData::Unlocked(draft()));
    payload[12] = 2;

    match decode_form_data(&payload).unwrap_err() {
        DecodeError::SchemaViolation { fields } => {
            assert_eq!(fields, vec!["submitted_at".to_string()]);
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn bare_submitted_status_lists_every_missing_field() {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"HPFD");
    payload.extend_from_slice(&1u16.to_le_bytes());
    append_field(&mut payload, 1, &[2]); // status = submitted

    match decode_form_data(&payload).unwrap_err() {
        DecodeError::SchemaViolation { fields } => {
            for expected in [
                "id",
                "state_code",
                "state_number",
                "submission_type",
                "created_at",
                "updated_at",
                "submitted_at",
            ] {
                assert!(
                    fields.iter().any(|f| f == expected),
                    "expected {expected} in {fields:?}"
                );
            }
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn unknown_enum_code_is_rejected() {
    let mut draft = draft();
    draft.documents.push(hpp_model::Document::new(
        "contract.pdf",
        "s3://bucket/contract.pdf",
        DocumentCategory::Contract,
    ));
    let mut payload = encode_form_data(&FormData::Unlocked(draft));
    // The document category byte is the last value written for the
    // document message; stomp it with an unknown code.
    let position = payload.len() - 1;
    payload[position] = 250;

    match decode_form_data(&payload).unwrap_err() {
        DecodeError::UnknownEnum { field, code } => {
            assert_eq!(field, "documents.category");
            assert_eq!(code, 250);
        }
        other => panic!("expected unknown enum error, got {other:?}"),
    }
}

#[test]
fn statusless_payload_has_exact_message() {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"HPFD");
    payload.extend_from_slice(&1u16.to_le_bytes());
    let err = decode_form_data(&payload).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown or missing status on this proto. Cannot decode."
    );
}

#[test]
fn draft_payload_tolerates_partial_content() {
    // Drafts are allowed to be semantically incomplete: no documents, no
    // contract info, no contacts. Decode must not reject them.
    let form = FormData::Unlocked(draft());
    let decoded = decode_form_data(&encode_form_data(&form)).unwrap();
    match decoded {
        FormData::Unlocked(d) => {
            assert!(d.contract_info.is_none());
            assert!(d.documents.is_empty());
        }
        FormData::Locked(_) => panic!("draft decoded as locked"),
    }
}
