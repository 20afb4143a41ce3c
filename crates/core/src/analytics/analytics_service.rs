use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Duration;
use log::debug;

use super::analytics_model::{
    DailySessions, FeedingAnalysis, GrowthAnalysis, PeakHour, TemperatureAnalysis,
};
use crate::constants::{FEVER_THRESHOLD_CELSIUS, PEAK_HOUR_COUNT};
use crate::errors::Result;
use crate::events::EventRepositoryTrait;
use crate::feeding::{Formula, NewFormula, NewNursing, Nursing};
use crate::health::{Height, NewHeight, NewTemperature, NewWeight, Temperature, Weight};
use crate::utils::time_utils::{get_days_between, local_date, local_hour, TimeWindow};

/// Ranks hour-of-day buckets by session count.
///
/// Busiest hours first; ties resolve to the earlier hour so the result is
/// deterministic regardless of input order. Hours with no sessions never
/// appear, so an empty input yields an empty list.
pub fn peak_hours<I>(hours: I) -> Vec<PeakHour>
where
    I: IntoIterator<Item = u32>,
{
    let mut buckets = [0i64; 24];
    for hour in hours {
        if (hour as usize) < buckets.len() {
            buckets[hour as usize] += 1;
        }
    }

    let mut ranked: Vec<PeakHour> = buckets
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(hour, &count)| PeakHour {
            hour: hour as u32,
            sessions: count,
        })
        .collect();
    ranked.sort_by(|a, b| b.sessions.cmp(&a.sessions).then(a.hour.cmp(&b.hour)));
    ranked.truncate(PEAK_HOUR_COUNT);
    ranked
}

/// Windowed aggregation over feeding, growth, and temperature records.
pub struct AnalyticsService {
    nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
    formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
    weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
    heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
    temperatures: Arc<dyn EventRepositoryTrait<Temperature, NewTemperature>>,
}

impl AnalyticsService {
    pub fn new(
        nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
        formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
        weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
        heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
        temperatures: Arc<dyn EventRepositoryTrait<Temperature, NewTemperature>>,
    ) -> Self {
        Self {
            nursing,
            formula,
            weights,
            heights,
            temperatures,
        }
    }

    pub fn feeding_analysis(&self, baby_id: &str, window: &TimeWindow) -> Result<FeedingAnalysis> {
        debug!("Running feeding analysis for baby {}", baby_id);
        let nursing = self.nursing.list_in_window(baby_id, window)?;
        let formula = self.formula.list_in_window(baby_id, window)?;

        let nursing_sessions = nursing.len() as i64;
        let formula_sessions = formula.len() as i64;
        let total_sessions = nursing_sessions + formula_sessions;

        let (nursing_percentage, formula_percentage) = if total_sessions > 0 {
            (
                nursing_sessions as f64 / total_sessions as f64 * 100.0,
                formula_sessions as f64 / total_sessions as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        let all_hours = nursing
            .iter()
            .map(|r| local_hour(r.event_time))
            .chain(formula.iter().map(|r| local_hour(r.event_time)));
        let peak_feeding_hours = peak_hours(all_hours);

        let daily_sessions = bucket_daily_sessions(window, &nursing, &formula);

        Ok(FeedingAnalysis {
            window: *window,
            total_sessions,
            nursing_sessions,
            formula_sessions,
            daily_average_sessions: total_sessions as f64 / window.num_days() as f64,
            nursing_percentage,
            formula_percentage,
            peak_feeding_hours,
            daily_sessions,
        })
    }

    pub fn growth_analysis(&self, baby_id: &str, window: &TimeWindow) -> Result<GrowthAnalysis> {
        debug!("Running growth analysis for baby {}", baby_id);
        let weights = self.weights.list_in_window(baby_id, window)?;
        let heights = self.heights.list_in_window(baby_id, window)?;

        let (weight_first_grams, weight_last_grams, weight_gain_grams) =
            first_last_gain(weights.iter().map(|r| r.grams));
        let (height_first_cm, height_last_cm, height_gain_cm) =
            first_last_gain(heights.iter().map(|r| r.centimeters));

        Ok(GrowthAnalysis {
            window: *window,
            weight_first_grams,
            weight_last_grams,
            weight_gain_grams,
            height_first_cm,
            height_last_cm,
            height_gain_cm,
        })
    }

    pub fn temperature_analysis(
        &self,
        baby_id: &str,
        window: &TimeWindow,
    ) -> Result<TemperatureAnalysis> {
        debug!("Running temperature analysis for baby {}", baby_id);
        let readings = self.temperatures.list_in_window(baby_id, window)?;

        let reading_count = readings.len() as i64;
        let fever_count = readings
            .iter()
            .filter(|r| r.celsius >= FEVER_THRESHOLD_CELSIUS)
            .count() as i64;

        let (average_celsius, fever_percentage) = if reading_count > 0 {
            let sum: f64 = readings.iter().map(|r| r.celsius).sum();
            (
                sum / reading_count as f64,
                fever_count as f64 / reading_count as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        let min_celsius = readings.iter().map(|r| r.celsius).fold(None, min_fold);
        let max_celsius = readings.iter().map(|r| r.celsius).fold(None, max_fold);

        Ok(TemperatureAnalysis {
            window: *window,
            reading_count,
            average_celsius,
            min_celsius,
            max_celsius,
            fever_count,
            fever_percentage,
        })
    }
}

/// First and last values in chronological order, and last - first when at
/// least two values exist.
fn first_last_gain<I>(values: I) -> (Option<f64>, Option<f64>, Option<f64>)
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    let first = values.first().copied();
    let last = values.last().copied();
    let gain = if values.len() >= 2 {
        match (first, last) {
            (Some(f), Some(l)) => Some(l - f),
            _ => None,
        }
    } else {
        None
    };
    (first, last, gain)
}

fn min_fold(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(match acc {
        Some(current) => current.min(value),
        None => value,
    })
}

fn max_fold(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(match acc {
        Some(current) => current.max(value),
        None => value,
    })
}

fn bucket_daily_sessions(
    window: &TimeWindow,
    nursing: &[Nursing],
    formula: &[Formula],
) -> Vec<DailySessions> {
    let mut per_day: BTreeMap<chrono::NaiveDate, (i64, i64)> = BTreeMap::new();
    let last_day = local_date(window.end - Duration::seconds(1));
    for day in get_days_between(local_date(window.start), last_day) {
        per_day.insert(day, (0, 0));
    }
    for record in nursing {
        per_day
            .entry(local_date(record.event_time))
            .or_insert((0, 0))
            .0 += 1;
    }
    for record in formula {
        per_day
            .entry(local_date(record.event_time))
            .or_insert((0, 0))
            .1 += 1;
    }

    per_day
        .into_iter()
        .map(|(date, (nursing, formula))| DailySessions {
            date,
            nursing,
            formula,
        })
        .collect()
}
