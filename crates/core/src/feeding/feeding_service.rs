use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::debug;

use super::feeding_model::{
    daily_feeding_stats, DailyFeedingStats, FeedingPatterns, FinishSide, Formula, NewFormula,
    NewNursing, NewPumping, NewSolids, Nursing, Pumping, Solids, WeeklyFeedingSummary,
};
use crate::analytics::peak_hours;
use crate::errors::{DatabaseError, Result};
use crate::events::EventRepositoryTrait;
use crate::utils::time_utils::{get_days_between, local_hour, TimeWindow};

/// Service for nursing, formula, pumping, and solids records.
pub struct FeedingService {
    nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
    formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
    pumping: Arc<dyn EventRepositoryTrait<Pumping, NewPumping>>,
    solids: Arc<dyn EventRepositoryTrait<Solids, NewSolids>>,
}

impl FeedingService {
    pub fn new(
        nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
        formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
        pumping: Arc<dyn EventRepositoryTrait<Pumping, NewPumping>>,
        solids: Arc<dyn EventRepositoryTrait<Solids, NewSolids>>,
    ) -> Self {
        Self {
            nursing,
            formula,
            pumping,
            solids,
        }
    }

    // === Nursing ===

    pub fn add_nursing(&self, new_nursing: NewNursing) -> Result<Nursing> {
        self.nursing.insert(new_nursing)
    }

    /// Opens a nursing session with no durations yet; `finish_nursing`
    /// completes it.
    pub fn start_nursing(
        &self,
        baby_id: &str,
        start_time: Option<DateTime<Utc>>,
        note: Option<String>,
    ) -> Result<Nursing> {
        self.nursing.insert(NewNursing {
            id: None,
            baby_id: baby_id.to_string(),
            event_time: start_time.unwrap_or_else(Utc::now),
            note,
            has_picture: false,
            type_id: None,
            finish_side: FinishSide::Both,
            left_minutes: 0,
            right_minutes: 0,
            both_minutes: 0,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn finish_nursing(
        &self,
        session_id: &str,
        finish_side: FinishSide,
        left_minutes: i32,
        right_minutes: i32,
        both_minutes: i32,
        note: Option<String>,
    ) -> Result<Nursing> {
        let mut session = self.nursing.get(session_id)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("nursing session {}", session_id))
        })?;
        session.finish_side = finish_side;
        session.left_minutes = left_minutes;
        session.right_minutes = right_minutes;
        session.both_minutes = both_minutes;
        if note.is_some() {
            session.note = note;
        }
        self.nursing.update(session)
    }

    pub fn nursing_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Nursing>> {
        self.nursing.list_for_baby(baby_id, limit)
    }

    pub fn nursing_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<Vec<Nursing>> {
        self.nursing.list_in_window(baby_id, window)
    }

    pub fn latest_nursing(&self, baby_id: &str) -> Result<Option<Nursing>> {
        self.nursing.latest_for_baby(baby_id)
    }

    pub fn update_nursing(&self, record: Nursing) -> Result<Nursing> {
        self.nursing.update(record)
    }

    pub fn delete_nursing(&self, id: &str) -> Result<usize> {
        self.nursing.delete(id)
    }

    // === Formula ===

    pub fn add_formula(&self, new_formula: NewFormula) -> Result<Formula> {
        self.formula.insert(new_formula)
    }

    pub fn formula_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Formula>> {
        self.formula.list_for_baby(baby_id, limit)
    }

    pub fn formula_in_window(&self, baby_id: &str, window: &TimeWindow) -> Result<Vec<Formula>> {
        self.formula.list_in_window(baby_id, window)
    }

    pub fn update_formula(&self, record: Formula) -> Result<Formula> {
        self.formula.update(record)
    }

    pub fn delete_formula(&self, id: &str) -> Result<usize> {
        self.formula.delete(id)
    }

    pub fn daily_formula_ml(&self, baby_id: &str, date: NaiveDate) -> Result<f64> {
        let window = TimeWindow::for_local_day(date);
        let records = self.formula.list_in_window(baby_id, &window)?;
        Ok(records.iter().map(|r| r.amount_ml).sum())
    }

    // === Pumping and solids ===

    pub fn add_pumping(&self, new_pumping: NewPumping) -> Result<Pumping> {
        self.pumping.insert(new_pumping)
    }

    pub fn pumping_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Pumping>> {
        self.pumping.list_for_baby(baby_id, limit)
    }

    pub fn add_solids(&self, new_solids: NewSolids) -> Result<Solids> {
        self.solids.insert(new_solids)
    }

    pub fn solids_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Solids>> {
        self.solids.list_for_baby(baby_id, limit)
    }

    // === Statistics ===

    pub fn daily_stats(&self, baby_id: &str, date: NaiveDate) -> Result<DailyFeedingStats> {
        let window = TimeWindow::for_local_day(date);
        let nursing = self.nursing.list_in_window(baby_id, &window)?;
        let formula = self.formula.list_in_window(baby_id, &window)?;
        Ok(daily_feeding_stats(date, &nursing, &formula))
    }

    /// Seven-day breakdown ending on `end_day` (inclusive).
    pub fn weekly_summary(&self, baby_id: &str, end_day: NaiveDate) -> Result<WeeklyFeedingSummary> {
        let start = end_day - Duration::days(6);
        let mut daily = Vec::with_capacity(7);
        for day in get_days_between(start, end_day) {
            daily.push(self.daily_stats(baby_id, day)?);
        }

        let total_nursing_sessions: i64 = daily.iter().map(|d| d.nursing_sessions).sum();
        let total_nursing_minutes: i64 = daily.iter().map(|d| d.nursing_minutes).sum();
        let total_formula_sessions: i64 = daily.iter().map(|d| d.formula_sessions).sum();
        let total_formula_ml: f64 = daily.iter().map(|d| d.formula_ml).sum();
        let total_sessions: i64 = daily.iter().map(|d| d.total_sessions).sum();

        Ok(WeeklyFeedingSummary {
            start,
            end: end_day,
            daily,
            total_nursing_sessions,
            average_daily_nursing_sessions: total_nursing_sessions as f64 / 7.0,
            total_nursing_minutes,
            average_daily_nursing_minutes: total_nursing_minutes as f64 / 7.0,
            total_formula_sessions,
            average_daily_formula_sessions: total_formula_sessions as f64 / 7.0,
            total_formula_ml,
            average_daily_formula_ml: total_formula_ml / 7.0,
            total_sessions,
            average_daily_sessions: total_sessions as f64 / 7.0,
        })
    }

    /// Hour-of-day distribution and nursing intervals over the last `days`.
    pub fn patterns(&self, baby_id: &str, days: i64) -> Result<FeedingPatterns> {
        debug!("Analyzing feeding patterns for baby {} over {} days", baby_id, days);
        let window = TimeWindow::last_days(days);
        let nursing = self.nursing.list_in_window(baby_id, &window)?;
        let formula = self.formula.list_in_window(baby_id, &window)?;

        let mut hourly_nursing = vec![0i64; 24];
        for record in &nursing {
            hourly_nursing[local_hour(record.event_time) as usize] += 1;
        }
        let mut hourly_formula = vec![0i64; 24];
        for record in &formula {
            hourly_formula[local_hour(record.event_time) as usize] += 1;
        }

        let peak_nursing_hours = peak_hours(nursing.iter().map(|r| local_hour(r.event_time)));
        let peak_formula_hours = peak_hours(formula.iter().map(|r| local_hour(r.event_time)));

        // Records arrive oldest first; intervals are between consecutive
        // sessions.
        let mut interval_hours = Vec::new();
        for pair in nursing.windows(2) {
            let gap = pair[1].event_time - pair[0].event_time;
            interval_hours.push(gap.num_seconds() as f64 / 3600.0);
        }
        let average_nursing_interval_hours = if interval_hours.is_empty() {
            0.0
        } else {
            interval_hours.iter().sum::<f64>() / interval_hours.len() as f64
        };

        Ok(FeedingPatterns {
            period_days: days,
            nursing_sessions: nursing.len() as i64,
            formula_sessions: formula.len() as i64,
            peak_nursing_hours,
            peak_formula_hours,
            average_nursing_interval_hours,
            hourly_nursing,
            hourly_formula,
        })
    }
}
