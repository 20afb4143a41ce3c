use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time window `[start, end)` used by all windowed queries and
/// aggregations. An event at exactly `end` is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window covering the last `days` days, ending now.
    pub fn last_days(days: i64) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Window covering `days` days ending at `end`.
    pub fn days_ending_at(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Window spanning one local calendar day, from midnight to midnight.
    pub fn for_local_day(date: NaiveDate) -> Self {
        let start_naive = date.and_time(NaiveTime::MIN);
        let end_naive = start_naive + Duration::days(1);
        Self {
            start: to_utc(start_naive),
            end: to_utc(end_naive),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Number of calendar days the window spans, never less than one.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days().max(1)
    }
}

fn to_utc(naive: chrono::NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Fall back to treating the wall-clock value as UTC when the local
        // time does not exist (DST gap).
        None => Utc.from_utc_datetime(&naive),
    }
}

/// Local calendar day an instant falls on.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Local hour of day (0-23) an instant falls in.
pub fn local_hour(instant: DateTime<Utc>) -> u32 {
    instant.with_timezone(&Local).hour()
}

/// All calendar days between `start` and `end`, inclusive.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}
