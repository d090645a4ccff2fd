//! Lifecycle transitions over form data.
//!
//! A state machine with two states, Unlocked and Locked, and three named
//! transitions:
//!
//! - [`submit`]: Unlocked → Locked. Runs the valid-for-submission checks
//!   in a fixed priority order (contract, then rates, then documents) and
//!   returns the first failure as a typed [`SubmissionError`]. On success
//!   the caller holds a fully-typed [`LockedFormData`] — no partially
//!   valid object is ever exposed. Parse, don't validate.
//! - [`resubmit`]: the same transition, gated on a non-empty reason.
//!   Packages that have been unlocked must explain each new submission.
//! - [`unlock`]: Locked → Unlocked. Total: every locked value was already
//!   valid when constructed, so dropping the submission instant is always
//!   safe and this function cannot fail.
//!
//! Everything here is pure and synchronous; nothing touches storage. The
//! revision ledger only persists once a transition has returned `Ok`.

pub mod checks;
pub mod error;
pub mod transition;

pub use error::{SubmissionError, SubmissionErrorCode};
pub use transition::{resubmit, submit, submit_at, unlock};
