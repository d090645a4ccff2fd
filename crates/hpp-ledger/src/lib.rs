//! Append-only revision ledger for package lifecycle history.
//!
//! A package's history is an ordered, immutable sequence of revisions,
//! each holding one encoded form data snapshot. Status is derived from
//! the shape of that history, never stored:
//!
//! - `DRAFT` — one revision, unsubmitted
//! - `SUBMITTED` — one revision, submitted
//! - `UNLOCKED` — newest revision unsubmitted, an older one submitted
//! - `RESUBMITTED` — newest revision submitted, an older one too
//!
//! Lifecycle rules the ledger enforces: `submit` finalizes the current
//! draft revision in place (same row, new bytes, submit metadata
//! attached) — it never appends; `unlock` appends a brand-new unsubmitted
//! revision seeded from the latest submitted content; once a revision
//! carries submit metadata its bytes are frozen forever, and the ledger
//! refuses to issue a write against it regardless of what the backing
//! store would accept.
//!
//! The backing store is abstracted behind [`RevisionStore`]. State-number
//! allocation and the read-decide-write sequences are each issued as a
//! single atomic unit against it; the ledger performs no retries of its
//! own (only connection-class store errors are worth retrying, and that
//! policy belongs to the caller).

pub mod error;
pub mod ledger;
pub mod revision;
pub mod store;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use revision::{Package, PackageStatus, Revision, RevisionMetadata, UpdateInfo};
pub use store::{MemoryStore, RevisionStore};
