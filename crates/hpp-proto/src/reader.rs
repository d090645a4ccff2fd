//! Payload decoding.
//!
//! Decoding walks the tag/length/value stream once into the raw presence
//! layer, skipping tags it does not recognize (payloads written by a newer
//! codec stay readable), then converts the raw layer into a typed
//! [`FormData`] in a single parse step.

use hpp_model::FormData;

use crate::error::{DecodeError, Result};
use crate::raw::{RawActuary, RawContract, RawDocument, RawForm, RawRate, RawStateContact};
use crate::tags::{HEADER_LEN, MAGIC, actuary, contract, doc, rate, state_contact, top};

/// Decode a binary payload into form data.
///
/// Fails with [`DecodeError::MissingStatus`] when the payload carries no
/// recognizable status discriminator, with [`DecodeError::SchemaViolation`]
/// when the selected variant's required fields are absent (all offending
/// paths listed), and with [`DecodeError::UnknownEnum`] when a required
/// enum field carries an unknown code. Unknown tags are ignored.
pub fn decode_form_data(bytes: &[u8]) -> Result<FormData> {
    if bytes.len() < HEADER_LEN || bytes[..4] != MAGIC {
        return Err(DecodeError::MissingStatus);
    }
    // Version is informational: tags are append-only, so newer payloads
    // decode by skipping tags this codec does not know.
    let _version = u16::from_le_bytes([bytes[4], bytes[5]]);

    parse_form(&bytes[HEADER_LEN..])?.into_form_data()
}

fn parse_form(data: &[u8]) -> Result<RawForm> {
    let mut raw = RawForm::default();
    let mut reader = FieldReader::new(data);

    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            top::STATUS => raw.status = Some(read_u8("status", value)?),
            top::ID => raw.id = Some(read_str("id", value)?),
            top::STATE_CODE => raw.state_code = Some(read_str("state_code", value)?),
            top::STATE_NUMBER => raw.state_number = Some(read_u64("state_number", value)?),
            top::PROGRAM_ID => {
                raw.program_ids.insert(read_str("program_ids", value)?);
            }
            top::SUBMISSION_TYPE => {
                raw.submission_type = Some(read_u8("submission_type", value)?);
            }
            top::SUBMISSION_DESCRIPTION => {
                raw.submission_description = Some(read_str("submission_description", value)?);
            }
            top::CREATED_AT => raw.created_at = Some(read_i64("created_at", value)?),
            top::UPDATED_AT => raw.updated_at = Some(read_i64("updated_at", value)?),
            top::SUBMITTED_AT => raw.submitted_at = Some(read_i64("submitted_at", value)?),
            top::DOCUMENT => raw.documents.push(parse_document(value)?),
            top::CONTRACT_INFO => raw.contract_info = Some(parse_contract(value)?),
            top::RATE_CERTIFICATION => raw.rate_certifications.push(parse_rate(value)?),
            top::STATE_CONTACT => raw.state_contacts.push(parse_state_contact(value)?),
            top::ACTUARY_CONTACT => raw.actuary_contacts.push(parse_actuary(value)?),
            _ => {}
        }
    }

    Ok(raw)
}

fn parse_document(data: &[u8]) -> Result<RawDocument> {
    let mut raw = RawDocument::default();
    let mut reader = FieldReader::new(data);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            doc::NAME => raw.name = Some(read_str("documents.name", value)?),
            doc::LOCATOR => raw.locator = Some(read_str("documents.locator", value)?),
            doc::CATEGORY => raw.category = Some(read_u8("documents.category", value)?),
            _ => {}
        }
    }
    Ok(raw)
}

fn parse_contract(data: &[u8]) -> Result<RawContract> {
    let mut raw = RawContract::default();
    let mut reader = FieldReader::new(data);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            contract::CONTRACT_TYPE => {
                raw.contract_type = Some(read_u8("contract_info.contract_type", value)?);
            }
            contract::EXECUTION_STATUS => {
                raw.execution_status = Some(read_u8("contract_info.execution_status", value)?);
            }
            contract::PERIOD_START => {
                raw.period_start = Some(read_i32("contract_info.contract_period", value)?);
            }
            contract::PERIOD_END => {
                raw.period_end = Some(read_i32("contract_info.contract_period", value)?);
            }
            contract::AMENDMENT_DESCRIPTION => {
                raw.amendment_description =
                    Some(read_str("contract_info.amendment_description", value)?);
            }
            _ => {}
        }
    }
    Ok(raw)
}

fn parse_rate(data: &[u8]) -> Result<RawRate> {
    let mut raw = RawRate::default();
    let mut reader = FieldReader::new(data);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            rate::RATE_TYPE => {
                raw.rate_type = Some(read_u8("rate_certifications.rate_type", value)?);
            }
            rate::PERIOD_START => {
                raw.period_start = Some(read_i32("rate_certifications.rate_period", value)?);
            }
            rate::PERIOD_END => {
                raw.period_end = Some(read_i32("rate_certifications.rate_period", value)?);
            }
            rate::CERTIFICATION_DATE => {
                raw.certification_date =
                    Some(read_i32("rate_certifications.certification_date", value)?);
            }
            rate::AMENDMENT_START => {
                raw.amendment_start =
                    Some(read_i32("rate_certifications.amendment_effective_period", value)?);
            }
            rate::AMENDMENT_END => {
                raw.amendment_end =
                    Some(read_i32("rate_certifications.amendment_effective_period", value)?);
            }
            _ => {}
        }
    }
    Ok(raw)
}

fn parse_state_contact(data: &[u8]) -> Result<RawStateContact> {
    let mut raw = RawStateContact::default();
    let mut reader = FieldReader::new(data);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            state_contact::NAME => raw.name = Some(read_str("state_contacts.name", value)?),
            state_contact::TITLE_ROLE => {
                raw.title_role = Some(read_str("state_contacts.title_role", value)?);
            }
            state_contact::EMAIL => raw.email = Some(read_str("state_contacts.email", value)?),
            _ => {}
        }
    }
    Ok(raw)
}

fn parse_actuary(data: &[u8]) -> Result<RawActuary> {
    let mut raw = RawActuary::default();
    let mut reader = FieldReader::new(data);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            actuary::NAME => raw.name = Some(read_str("actuary_contacts.name", value)?),
            actuary::EMAIL => raw.email = Some(read_str("actuary_contacts.email", value)?),
            actuary::FIRM => {
                raw.firm = Some(read_u8("actuary_contacts.actuarial_firm", value)?);
            }
            _ => {}
        }
    }
    Ok(raw)
}

/// Walks a tag/length/value field sequence.
struct FieldReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Next (tag, value) pair, or `None` at a clean end of stream.
    fn next_field(&mut self) -> Result<Option<(u16, &'a [u8])>> {
        if self.offset == self.data.len() {
            return Ok(None);
        }
        if self.offset + 6 > self.data.len() {
            return Err(DecodeError::Truncated {
                offset: self.offset,
            });
        }
        let tag = u16::from_le_bytes([self.data[self.offset], self.data[self.offset + 1]]);
        let length = u32::from_le_bytes([
            self.data[self.offset + 2],
            self.data[self.offset + 3],
            self.data[self.offset + 4],
            self.data[self.offset + 5],
        ]) as usize;
        let start = self.offset + 6;
        let end = start + length;
        if end > self.data.len() {
            return Err(DecodeError::Truncated {
                offset: self.offset,
            });
        }
        self.offset = end;
        Ok(Some((tag, &self.data[start..end])))
    }
}

fn read_str(field: &'static str, value: &[u8]) -> Result<String> {
    String::from_utf8(value.to_vec())
        .map_err(|_| DecodeError::malformed(field, "invalid UTF-8"))
}

fn read_u8(field: &'static str, value: &[u8]) -> Result<u8> {
    match value {
        [byte] => Ok(*byte),
        _ => Err(DecodeError::malformed(
            field,
            format!("expected 1 byte, got {}", value.len()),
        )),
    }
}

fn read_u64(field: &'static str, value: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = value
        .try_into()
        .map_err(|_| DecodeError::malformed(field, format!("expected 8 bytes, got {}", value.len())))?;
    Ok(u64::from_le_bytes(bytes))
}

fn read_i64(field: &'static str, value: &[u8]) -> Result<i64> {
    let bytes: [u8; 8] = value
        .try_into()
        .map_err(|_| DecodeError::malformed(field, format!("expected 8 bytes, got {}", value.len())))?;
    Ok(i64::from_le_bytes(bytes))
}

fn read_i32(field: &'static str, value: &[u8]) -> Result<i32> {
    let bytes: [u8; 4] = value
        .try_into()
        .map_err(|_| DecodeError::malformed(field, format!("expected 4 bytes, got {}", value.len())))?;
    Ok(i32::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::SCHEMA_VERSION;

    fn container(fields: &[u8]) -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(&MAGIC);
        payload.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
        payload.extend_from_slice(fields);
        payload
    }

    fn field(tag: u16, value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        out.extend_from_slice(value);
        out
    }

    #[test]
    fn test_empty_payload_is_missing_status() {
        assert_eq!(decode_form_data(&[]), Err(DecodeError::MissingStatus));
    }

    #[test]
    fn test_wrong_magic_is_missing_status() {
        let payload = container(&[]);
        let mut wrong = payload.clone();
        wrong[0] = b'X';
        assert_eq!(decode_form_data(&wrong), Err(DecodeError::MissingStatus));
    }

    #[test]
    fn test_statusless_fields_are_missing_status() {
        let fields = field(top::ID, b"pkg-1");
        assert_eq!(
            decode_form_data(&container(&fields)),
            Err(DecodeError::MissingStatus)
        );
    }

    #[test]
    fn test_unrecognized_status_code_is_missing_status() {
        let fields = field(top::STATUS, &[99]);
        assert_eq!(
            decode_form_data(&container(&fields)),
            Err(DecodeError::MissingStatus)
        );
    }

    #[test]
    fn test_truncated_field_header() {
        let mut payload = container(&[]);
        payload.extend_from_slice(&[1, 0, 4]);
        assert_eq!(
            decode_form_data(&payload),
            Err(DecodeError::Truncated { offset: 0 })
        );
    }

    #[test]
    fn test_truncated_field_value() {
        let mut fields = field(top::ID, b"pkg-1");
        fields.truncate(fields.len() - 2);
        assert_eq!(
            decode_form_data(&container(&fields)),
            Err(DecodeError::Truncated { offset: 0 })
        );
    }

    #[test]
    fn test_bad_scalar_width_is_malformed() {
        let mut fields = field(top::STATUS, &[1]);
        fields.extend_from_slice(&field(top::STATE_NUMBER, &[1, 2, 3]));
        let err = decode_form_data(&container(&fields)).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }));
    }

    #[test]
    fn test_unknown_tags_are_skipped() {
        // A status-only payload with an unknown future field still reaches
        // schema validation (and fails there for missing required fields,
        // not for the unknown tag).
        let mut fields = field(top::STATUS, &[1]);
        fields.extend_from_slice(&field(9999, b"from the future"));
        let err = decode_form_data(&container(&fields)).unwrap_err();
        assert!(matches!(err, DecodeError::SchemaViolation { .. }));
    }
}
