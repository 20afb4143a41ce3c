use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::health_model::{
    DailyDiaperCount, Diaper, DiaperStats, GrowthSummary, HeadSize, Height, NewDiaper,
    NewHeadSize, NewHeight, NewSleep, NewWeight, Sleep, SleepStats, Temperature, Trend, Weight,
    WeightTrend,
};
use super::health_traits::TemperatureRepositoryTrait;
use crate::constants::{WEIGHT_TREND_GAIN_GRAMS, WEIGHT_TREND_WINDOW_DAYS};
use crate::errors::Result;
use crate::events::EventRepositoryTrait;
use crate::health::NewTemperature;
use crate::utils::time_utils::{local_date, TimeWindow};

/// Service for sleep, diaper, growth, and temperature records.
pub struct HealthService {
    sleep: Arc<dyn EventRepositoryTrait<Sleep, NewSleep>>,
    diapers: Arc<dyn EventRepositoryTrait<Diaper, NewDiaper>>,
    weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
    heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
    heads: Arc<dyn EventRepositoryTrait<HeadSize, NewHeadSize>>,
    temperatures: Arc<dyn TemperatureRepositoryTrait>,
}

impl HealthService {
    pub fn new(
        sleep: Arc<dyn EventRepositoryTrait<Sleep, NewSleep>>,
        diapers: Arc<dyn EventRepositoryTrait<Diaper, NewDiaper>>,
        weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
        heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
        heads: Arc<dyn EventRepositoryTrait<HeadSize, NewHeadSize>>,
        temperatures: Arc<dyn TemperatureRepositoryTrait>,
    ) -> Self {
        Self {
            sleep,
            diapers,
            weights,
            heights,
            heads,
            temperatures,
        }
    }

    // === Sleep ===

    pub fn add_sleep(&self, new_sleep: NewSleep) -> Result<Sleep> {
        self.sleep.insert(new_sleep)
    }

    pub fn sleep_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Sleep>> {
        self.sleep.list_for_baby(baby_id, limit)
    }

    pub fn sleep_stats(&self, baby_id: &str, days: i64) -> Result<SleepStats> {
        let window = TimeWindow::last_days(days);
        let records = self.sleep.list_in_window(baby_id, &window)?;

        let mut daily_minutes: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for record in &records {
            *daily_minutes.entry(local_date(record.event_time)).or_insert(0) +=
                record.minutes as i64;
        }

        let total_minutes: i64 = daily_minutes.values().sum();
        let average_minutes_per_day = if daily_minutes.is_empty() {
            0.0
        } else {
            total_minutes as f64 / daily_minutes.len() as f64
        };

        Ok(SleepStats {
            daily_minutes,
            total_minutes,
            average_minutes_per_day,
            record_count: records.len() as i64,
        })
    }

    // === Diapers ===

    pub fn add_diaper(&self, new_diaper: NewDiaper) -> Result<Diaper> {
        self.diapers.insert(new_diaper)
    }

    pub fn diaper_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Diaper>> {
        self.diapers.list_for_baby(baby_id, limit)
    }

    pub fn diaper_stats(&self, baby_id: &str, days: i64) -> Result<DiaperStats> {
        let window = TimeWindow::last_days(days);
        let records = self.diapers.list_in_window(baby_id, &window)?;

        let mut daily: BTreeMap<NaiveDate, DailyDiaperCount> = BTreeMap::new();
        for record in &records {
            let entry = daily.entry(local_date(record.event_time)).or_default();
            entry.total += 1;
            let kind = record
                .type_id
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            *entry.by_type.entry(kind).or_insert(0) += 1;
        }

        let total_count = records.len() as i64;
        Ok(DiaperStats {
            daily,
            total_count,
            daily_average: total_count as f64 / days.max(1) as f64,
        })
    }

    // === Weight ===

    pub fn add_weight(&self, new_weight: NewWeight) -> Result<Weight> {
        self.weights.insert(new_weight)
    }

    pub fn weight_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Weight>> {
        self.weights.list_for_baby(baby_id, limit)
    }

    pub fn weight_trend(&self, baby_id: &str, days: i64) -> Result<WeightTrend> {
        debug!("Building weight trend for baby {} over {} days", baby_id, days);
        let window = TimeWindow::last_days(days);
        let records = self.weights.list_in_window(baby_id, &window)?;

        // Later measurement wins when a day has more than one.
        let mut series: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in &records {
            series.insert(local_date(record.event_time), record.grams);
        }

        let gain_grams = self.weight_gain_in_window(&records);
        let latest_grams = self
            .weights
            .latest_for_baby(baby_id)?
            .map(|record| record.grams);

        Ok(WeightTrend {
            series,
            gain_kilograms: gain_grams.map(|g| g / 1000.0),
            gain_grams,
            latest_grams,
        })
    }

    /// Last minus first measurement; `None` below two records.
    fn weight_gain_in_window(&self, records: &[Weight]) -> Option<f64> {
        if records.len() < 2 {
            return None;
        }
        match (records.first(), records.last()) {
            (Some(first), Some(last)) => Some(last.grams - first.grams),
            _ => None,
        }
    }

    // === Height and head circumference ===

    pub fn add_height(&self, new_height: NewHeight) -> Result<Height> {
        self.heights.insert(new_height)
    }

    pub fn height_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<Height>> {
        self.heights.list_for_baby(baby_id, limit)
    }

    pub fn add_head_size(&self, new_head: NewHeadSize) -> Result<HeadSize> {
        self.heads.insert(new_head)
    }

    pub fn head_size_records(&self, baby_id: &str, limit: Option<i64>) -> Result<Vec<HeadSize>> {
        self.heads.list_for_baby(baby_id, limit)
    }

    // === Temperature ===

    pub fn add_temperature(&self, new_temperature: NewTemperature) -> Result<Temperature> {
        self.temperatures.insert(new_temperature)
    }

    pub fn temperature_records(
        &self,
        baby_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Temperature>> {
        self.temperatures.list_for_baby(baby_id, limit)
    }

    pub fn fever_history(&self, baby_id: &str, days: i64) -> Result<Vec<Temperature>> {
        let window = TimeWindow::last_days(days);
        self.temperatures.fever_records_in_window(baby_id, &window)
    }

    // === Combined ===

    pub fn growth_summary(&self, baby_id: &str) -> Result<GrowthSummary> {
        let latest_weight = self.weights.latest_for_baby(baby_id)?;
        let latest_height = self.heights.latest_for_baby(baby_id)?;
        let latest_head = self.heads.latest_for_baby(baby_id)?;

        let mut weight_trend = Trend::Stable;
        if latest_weight.is_some() {
            let window = TimeWindow::last_days(WEIGHT_TREND_WINDOW_DAYS);
            let records = self.weights.list_in_window(baby_id, &window)?;
            if let Some(gain) = self.weight_gain_in_window(&records) {
                if gain > WEIGHT_TREND_GAIN_GRAMS {
                    weight_trend = Trend::Increasing;
                } else if gain < 0.0 {
                    weight_trend = Trend::Decreasing;
                }
            }
        }

        Ok(GrowthSummary {
            baby_id: baby_id.to_string(),
            latest_weight_grams: latest_weight.map(|r| r.grams),
            latest_height_cm: latest_height.map(|r| r.centimeters),
            latest_head_cm: latest_head.map(|r| r.centimeters),
            weight_trend,
            height_trend: Trend::Stable,
        })
    }
}
