//! Activity domain models.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A playtime session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playtime {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub play_kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaytime {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub play_kind: Option<String>,
}

/// A bath.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bath {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub water_celsius: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBath {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub water_celsius: Option<f64>,
}

/// A photo reference; the file itself lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub caption: Option<String>,
}

/// A video reference with its duration in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub seconds: i32,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: DateTime<Utc>,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub seconds: i32,
    pub caption: Option<String>,
}

/// Playtime totals over an analysis period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaytimeStats {
    pub daily_minutes: BTreeMap<NaiveDate, i64>,
    /// Minutes by play kind; untagged sessions are not counted here.
    pub minutes_by_kind: BTreeMap<String, i64>,
    pub total_minutes: i64,
    pub average_daily_minutes: f64,
    pub record_count: i64,
}

/// Bath statistics over an analysis period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BathStats {
    pub bath_count: i64,
    pub baths_per_week: f64,
    pub average_minutes: f64,
    /// Average over baths that recorded a water temperature.
    pub average_water_celsius: Option<f64>,
}

/// Photo and video counts for one baby.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaStats {
    pub photo_count: i64,
    /// Photo counts keyed by local "YYYY-MM" month.
    pub photos_by_month: BTreeMap<String, i64>,
    pub video_count: i64,
    pub total_video_seconds: i64,
    pub total_video_minutes: f64,
}
