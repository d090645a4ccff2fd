//! Versioned binary wire format for package form data.
//!
//! Every revision stores its content as one payload in this format. The
//! container is a flat sequence of tagged fields:
//!
//! ```text
//! +------------------+
//! | Magic: "HPFD"    | 4 bytes - payload identification
//! +------------------+
//! | Version          | 2 bytes - u16 little-endian schema version
//! +------------------+
//! | Fields           | repeated: u16 tag, u32 length, value bytes
//! +------------------+
//! ```
//!
//! Schema evolution rules: tags are append-only (never removed or
//! renumbered), optional fields absent in the domain value are omitted
//! from the payload rather than written as sentinels, and the decoder
//! silently skips tags it does not know. Old payloads therefore decode
//! under newer codecs (the new optional fields are simply absent) and new
//! payloads decode under older codecs (the unknown tags are skipped).
//!
//! The status discriminator (tag 1) selects which [`FormData`] variant
//! decoding produces. A payload without a recognizable status fails
//! immediately with [`DecodeError::MissingStatus`]; a Submitted-status
//! payload missing a locked-required field fails with a
//! [`DecodeError::SchemaViolation`] that lists every offending field path
//! at once. Instants travel as epoch milliseconds and calendar dates as
//! day numbers, never as formatted strings.
//!
//! [`encode_form_data`] cannot fail: every reachable [`FormData`] value is
//! well-typed by construction. Both directions are pure and
//! allocation-only.
//!
//! [`FormData`]: hpp_model::FormData

mod error;
mod raw;
mod reader;
mod tags;
mod writer;

pub use error::{DecodeError, Result};
pub use reader::decode_form_data;
pub use tags::{MAGIC, SCHEMA_VERSION};
pub use writer::encode_form_data;
