//! Analysis result models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::TimeWindow;

/// One hour-of-day bucket with its session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakHour {
    /// Local hour of day, 0-23.
    pub hour: u32,
    pub sessions: i64,
}

/// Nursing and formula session counts for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySessions {
    pub date: NaiveDate,
    pub nursing: i64,
    pub formula: i64,
}

/// Feeding analysis over a time window.
///
/// Percentages are of nursing + formula sessions and sum to 100 whenever any
/// session exists; both are zero on an empty window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingAnalysis {
    pub window: TimeWindow,
    pub total_sessions: i64,
    pub nursing_sessions: i64,
    pub formula_sessions: i64,
    pub daily_average_sessions: f64,
    pub nursing_percentage: f64,
    pub formula_percentage: f64,
    /// Top hourly buckets, busiest first, ties broken by earlier hour.
    pub peak_feeding_hours: Vec<PeakHour>,
    pub daily_sessions: Vec<DailySessions>,
}

/// First/last measurements in a window and the gain between them.
///
/// Gains are `None` when the window holds fewer than two measurements of the
/// kind; that is an answer, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAnalysis {
    pub window: TimeWindow,
    pub weight_first_grams: Option<f64>,
    pub weight_last_grams: Option<f64>,
    pub weight_gain_grams: Option<f64>,
    pub height_first_cm: Option<f64>,
    pub height_last_cm: Option<f64>,
    pub height_gain_cm: Option<f64>,
}

/// Temperature statistics over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureAnalysis {
    pub window: TimeWindow,
    pub reading_count: i64,
    /// Zero when the window has no readings.
    pub average_celsius: f64,
    pub min_celsius: Option<f64>,
    pub max_celsius: Option<f64>,
    pub fever_count: i64,
    pub fever_percentage: f64,
}
