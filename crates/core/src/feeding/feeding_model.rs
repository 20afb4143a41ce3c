//! Feeding domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::PeakHour;

/// Side the baby finished a nursing session on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinishSide {
    Left,
    Right,
    /// Both sides, or not recorded.
    Both,
}

impl FinishSide {
    /// Stored encoding: 0 = left, 1 = right, 2 = both/unknown.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => FinishSide::Left,
            1 => FinishSide::Right,
            _ => FinishSide::Both,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            FinishSide::Left => 0,
            FinishSide::Right => 1,
            FinishSide::Both => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinishSide::Left => "left",
            FinishSide::Right => "right",
            FinishSide::Both => "both/unknown",
        }
    }
}

/// A nursing session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nursing {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub finish_side: FinishSide,
    pub left_minutes: i32,
    pub right_minutes: i32,
    pub both_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl Nursing {
    pub fn total_minutes(&self) -> i32 {
        self.left_minutes + self.right_minutes + self.both_minutes
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNursing {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub finish_side: FinishSide,
    pub left_minutes: i32,
    pub right_minutes: i32,
    pub both_minutes: i32,
}

/// A bottle of formula.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewFormula {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
}

/// A pumping session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pumping {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPumping {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub minutes: i32,
}

/// A solid-food meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solids {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSolids {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount: f64,
}

/// Feeding totals for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyFeedingStats {
    pub date: NaiveDate,
    pub nursing_sessions: i64,
    pub nursing_minutes: i64,
    pub formula_sessions: i64,
    pub formula_ml: f64,
    pub total_sessions: i64,
    pub average_session_minutes: f64,
}

/// Aggregates one day's nursing and formula records.
///
/// The average session length covers nursing sessions only; formula feeds
/// carry no duration.
pub fn daily_feeding_stats(
    date: NaiveDate,
    nursing: &[Nursing],
    formula: &[Formula],
) -> DailyFeedingStats {
    let nursing_sessions = nursing.len() as i64;
    let nursing_minutes: i64 = nursing.iter().map(|r| r.total_minutes() as i64).sum();
    let formula_sessions = formula.len() as i64;
    let formula_ml: f64 = formula.iter().map(|r| r.amount_ml).sum();
    let average_session_minutes = if nursing_sessions > 0 {
        nursing_minutes as f64 / nursing_sessions as f64
    } else {
        0.0
    };

    DailyFeedingStats {
        date,
        nursing_sessions,
        nursing_minutes,
        formula_sessions,
        formula_ml,
        total_sessions: nursing_sessions + formula_sessions,
        average_session_minutes,
    }
}

/// Seven-day feeding breakdown with totals and per-day averages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyFeedingSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub daily: Vec<DailyFeedingStats>,
    pub total_nursing_sessions: i64,
    pub average_daily_nursing_sessions: f64,
    pub total_nursing_minutes: i64,
    pub average_daily_nursing_minutes: f64,
    pub total_formula_sessions: i64,
    pub average_daily_formula_sessions: f64,
    pub total_formula_ml: f64,
    pub average_daily_formula_ml: f64,
    pub total_sessions: i64,
    pub average_daily_sessions: f64,
}

/// Hour-of-day feeding pattern over an analysis period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedingPatterns {
    pub period_days: i64,
    pub nursing_sessions: i64,
    pub formula_sessions: i64,
    pub peak_nursing_hours: Vec<PeakHour>,
    pub peak_formula_hours: Vec<PeakHour>,
    pub average_nursing_interval_hours: f64,
    /// Session counts per local hour of day, index 0-23.
    pub hourly_nursing: Vec<i64>,
    pub hourly_formula: Vec<i64>,
}
