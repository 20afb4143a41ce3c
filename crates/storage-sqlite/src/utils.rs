//! Helpers for the epoch-second timestamps stored in SQLite.

use chrono::{DateTime, Utc};

/// Unix epoch seconds for a UTC instant.
pub fn epoch_secs(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// UTC instant for stored epoch seconds. Out-of-range values fall back to
/// the epoch rather than panicking on corrupt rows.
pub fn from_epoch_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn epoch_round_trip() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 10, 14, 30, 0).unwrap();
        assert_eq!(from_epoch_secs(epoch_secs(instant)), instant);
    }

    #[test]
    fn corrupt_timestamps_fall_back_to_the_epoch() {
        assert_eq!(from_epoch_secs(i64::MAX), DateTime::<Utc>::UNIX_EPOCH);
    }
}
