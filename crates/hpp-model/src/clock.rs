//! Millisecond-precision instants.
//!
//! The wire format stores instants as epoch milliseconds, so every
//! timestamp stamped into form data must already be truncated to that
//! precision or an encode/decode round trip would not compare equal.

use chrono::{DateTime, TimeZone, Utc};

/// Current time truncated to millisecond precision.
pub fn now() -> DateTime<Utc> {
    truncate_millis(Utc::now())
}

/// Drop sub-millisecond precision from an instant.
pub fn truncate_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    match Utc.timestamp_millis_opt(instant.timestamp_millis()).single() {
        Some(truncated) => truncated,
        // timestamp_millis of a valid DateTime always maps back.
        None => instant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_is_idempotent() {
        let t = now();
        assert_eq!(t, truncate_millis(t));
        assert_eq!(t.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_truncation_drops_nanos() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(1_234_567);
        let truncated = truncate_millis(t);
        assert_eq!(truncated.timestamp_subsec_millis(), 1);
        assert_eq!(truncated.timestamp_subsec_nanos(), 1_000_000);
    }
}
