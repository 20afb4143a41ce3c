//! Baby domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_MONTH;
use crate::feeding::DailyFeedingStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Stored encoding: 0 = female, 1 = male.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Gender::Male,
            _ => Gender::Female,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "girl",
            Gender::Male => "boy",
        }
    }
}

/// Domain model representing a tracked baby.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Baby {
    pub id: String,
    pub name: String,
    pub birthday: DateTime<Utc>,
    pub gender: Gender,
    pub due_date: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Baby {
    /// Age in whole days at `now`; negative before the birthday.
    pub fn age_in_days_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.birthday).num_days()
    }

    pub fn age_in_days(&self) -> i64 {
        self.age_in_days_at(Utc::now())
    }

    pub fn age_in_weeks(&self) -> i64 {
        self.age_in_days() / 7
    }

    /// Rough months, counting 30 days per month.
    pub fn age_in_months(&self) -> i64 {
        self.age_in_days() / DAYS_PER_MONTH
    }

    pub fn birth_date(&self) -> NaiveDate {
        crate::utils::time_utils::local_date(self.birthday)
    }
}

/// Input model for registering a new baby.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBaby {
    pub id: Option<String>,
    pub name: String,
    pub birthday: DateTime<Utc>,
    pub gender: Gender,
    pub due_date: Option<String>,
    pub picture: Option<String>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BabyUpdate {
    pub id: String,
    pub name: Option<String>,
    pub due_date: Option<String>,
    pub picture: Option<String>,
}

/// Profile block shown on the dashboard and in exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfile {
    pub id: String,
    pub name: String,
    pub age_days: i64,
    pub age_weeks: i64,
    pub age_months: i64,
    pub gender_label: String,
    pub birth_date: NaiveDate,
}

impl From<&Baby> for BabyProfile {
    fn from(baby: &Baby) -> Self {
        Self {
            id: baby.id.clone(),
            name: baby.name.clone(),
            age_days: baby.age_in_days(),
            age_weeks: baby.age_in_weeks(),
            age_months: baby.age_in_months(),
            gender_label: baby.gender.label().to_string(),
            birth_date: baby.birth_date(),
        }
    }
}

/// A milestone the baby will reach within the lookahead window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMilestone {
    pub days_until: i64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneReport {
    pub age_category: String,
    pub development_stage: String,
    pub upcoming: Vec<UpcomingMilestone>,
}

/// Dashboard payload: profile, today's feeding, milestones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BabyDashboard {
    pub profile: BabyProfile,
    pub today: DailyFeedingStats,
    pub milestones: MilestoneReport,
}

/// Period feeding statistics, one entry per day plus totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BabyStatistics {
    pub period_days: i64,
    pub daily: Vec<DailyFeedingStats>,
    pub total_sessions: i64,
    pub average_daily_sessions: f64,
    pub total_nursing_minutes: i64,
    pub average_daily_nursing_minutes: f64,
    pub total_formula_ml: f64,
    pub average_daily_formula_ml: f64,
}
