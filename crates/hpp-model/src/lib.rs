//! Domain model for health plan package form data.
//!
//! A package's content is represented as [`FormData`], a tagged union over
//! two variants:
//!
//! - [`UnlockedFormData`] — a draft in progress. Almost everything is
//!   optional or partially filled; mutation is permitted.
//! - [`LockedFormData`] — content frozen at submission. Carries a required
//!   `submitted_at` instant and must only ever be produced by the
//!   transition engine's `submit` (or by the codec when decoding a payload
//!   that was written for a submitted revision).
//!
//! The compiler, not a runtime predicate, decides which fields are
//! reachable in each state: there is no shared duck-typed shape with a
//! status string.
//!
//! Timestamps are `chrono` instants truncated to millisecond precision
//! (the resolution of the wire format); use [`clock::now`] when stamping
//! them so that values survive an encode/decode round trip unchanged.

pub mod actor;
pub mod clock;
pub mod enums;
pub mod error;
pub mod form;
pub mod ids;

pub use actor::{ActorRole, Identity};
pub use enums::{
    ActuarialFirm, ContractExecutionStatus, ContractType, DocumentCategory, RateType,
    SubmissionType,
};
pub use error::{ModelError, Result};
pub use form::{
    ActuaryContact, ContractInfo, DateRange, Document, FormData, LockedFormData,
    RateCertification, StateContact, UnlockedFormData,
};
pub use ids::{PackageId, RevisionId, StateCode};
