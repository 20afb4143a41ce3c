//! Health domain models.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FEVER_THRESHOLD_CELSIUS;

/// A sleep session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sleep {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl Sleep {
    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSleep {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub minutes: i32,
}

/// A diaper change; the kind lives in the `diaper_types` lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diaper {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDiaper {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
}

/// A weight measurement in grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub grams: f64,
    pub created_at: DateTime<Utc>,
}

impl Weight {
    pub fn kilograms(&self) -> f64 {
        self.grams / 1000.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewWeight {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub grams: f64,
}

/// A height measurement in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Height {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHeight {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
}

/// A head-circumference measurement in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadSize {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHeadSize {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
}

/// Reading bands for axillary temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperatureBand {
    Low,
    Normal,
    Elevated,
    Fever,
}

impl TemperatureBand {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Low => "low",
            TemperatureBand::Normal => "normal",
            TemperatureBand::Elevated => "elevated",
            TemperatureBand::Fever => "fever",
        }
    }
}

/// A temperature reading in degrees Celsius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub celsius: f64,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Temperature {
    pub fn is_fever(&self) -> bool {
        self.celsius >= FEVER_THRESHOLD_CELSIUS
    }

    pub fn band(&self) -> TemperatureBand {
        if self.celsius < 36.0 {
            TemperatureBand::Low
        } else if self.celsius <= 37.0 {
            TemperatureBand::Normal
        } else if self.celsius < FEVER_THRESHOLD_CELSIUS {
            TemperatureBand::Elevated
        } else {
            TemperatureBand::Fever
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTemperature {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub celsius: f64,
    pub location: Option<String>,
}

/// Direction of a growth series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// Sleep totals over an analysis period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepStats {
    pub daily_minutes: BTreeMap<NaiveDate, i64>,
    pub total_minutes: i64,
    /// Average over days that have at least one sleep record.
    pub average_minutes_per_day: f64,
    pub record_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyDiaperCount {
    pub total: i64,
    pub by_type: BTreeMap<String, i64>,
}

/// Diaper counts over an analysis period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiaperStats {
    pub daily: BTreeMap<NaiveDate, DailyDiaperCount>,
    pub total_count: i64,
    /// Average over the requested number of days, recorded or not.
    pub daily_average: f64,
}

/// Per-day weight series and the gain across the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    pub series: BTreeMap<NaiveDate, f64>,
    pub gain_grams: Option<f64>,
    pub gain_kilograms: Option<f64>,
    pub latest_grams: Option<f64>,
}

/// Latest measurements plus classified trends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    pub baby_id: String,
    pub latest_weight_grams: Option<f64>,
    pub latest_height_cm: Option<f64>,
    pub latest_head_cm: Option<f64>,
    pub weight_trend: Trend,
    pub height_trend: Trend,
}
