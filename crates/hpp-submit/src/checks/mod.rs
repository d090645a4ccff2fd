//! Valid-for-submission checks.
//!
//! Each check is a pure predicate over a draft. `submit` runs them in a
//! fixed priority order and stops at the first failure, so error messages
//! are deterministic and singular.

pub mod contract;
pub mod documents;
pub mod rates;
