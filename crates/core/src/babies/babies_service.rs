use std::sync::Arc;

use chrono::{Duration, Local};
use log::debug;

use super::babies_model::{
    Baby, BabyDashboard, BabyProfile, BabyStatistics, BabyUpdate, Gender, MilestoneReport,
    NewBaby, UpcomingMilestone,
};
use super::babies_traits::{BabyRepositoryTrait, BabyServiceTrait};
use crate::constants::MILESTONE_LOOKAHEAD_DAYS;
use crate::errors::{DatabaseError, Result};
use crate::events::EventRepositoryTrait;
use crate::feeding::{daily_feeding_stats, Formula, NewFormula, NewNursing, Nursing};
use crate::utils::time_utils::{get_days_between, TimeWindow};

/// Age milestones in days, with the announcement shown when one is near.
const MILESTONES: &[(i64, &str)] = &[
    (7, "One week old!"),
    (14, "Two weeks old!"),
    (30, "One month old!"),
    (60, "Two months old!"),
    (90, "Three months old!"),
    (180, "Six months old!"),
    (365, "First birthday!"),
    (730, "Second birthday!"),
];

/// Service for baby profiles, the dashboard, and period statistics.
pub struct BabyService {
    repository: Arc<dyn BabyRepositoryTrait>,
    nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
    formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
}

impl BabyService {
    pub fn new(
        repository: Arc<dyn BabyRepositoryTrait>,
        nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
        formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
    ) -> Self {
        Self {
            repository,
            nursing,
            formula,
        }
    }

    fn require_baby(&self, baby_id: &str) -> Result<Baby> {
        self.repository
            .get(baby_id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("baby {}", baby_id)).into())
    }

    fn milestones(baby: &Baby) -> MilestoneReport {
        let age_days = baby.age_in_days();
        MilestoneReport {
            age_category: age_category(age_days).to_string(),
            development_stage: development_stage(age_days).to_string(),
            upcoming: upcoming_milestones(age_days),
        }
    }
}

impl BabyServiceTrait for BabyService {
    fn create_baby(&self, new_baby: NewBaby) -> Result<Baby> {
        debug!("Registering baby {}", new_baby.name);
        self.repository.create(new_baby)
    }

    fn get_baby(&self, baby_id: &str) -> Result<Option<Baby>> {
        self.repository.get(baby_id)
    }

    fn list_babies(&self) -> Result<Vec<Baby>> {
        self.repository.list()
    }

    fn update_baby(&self, update: BabyUpdate) -> Result<Baby> {
        let mut baby = self.require_baby(&update.id)?;
        if let Some(name) = update.name {
            baby.name = name;
        }
        if update.due_date.is_some() {
            baby.due_date = update.due_date;
        }
        if update.picture.is_some() {
            baby.picture = update.picture;
        }
        self.repository.update(baby)
    }

    fn delete_baby(&self, baby_id: &str) -> Result<usize> {
        debug!("Deleting baby {} and all its events", baby_id);
        self.repository.delete(baby_id)
    }

    fn search_babies(&self, query: &str) -> Result<Vec<Baby>> {
        self.repository.search_by_name(query)
    }

    fn babies_by_gender(&self, gender: Gender) -> Result<Vec<Baby>> {
        self.repository.list_by_gender(gender)
    }

    fn babies_by_age_range(&self, min_days: i64, max_days: i64) -> Result<Vec<Baby>> {
        self.repository.list_by_age_range(min_days, max_days)
    }

    fn dashboard(&self, baby_id: &str) -> Result<BabyDashboard> {
        let baby = self.require_baby(baby_id)?;
        let today = Local::now().date_naive();

        let window = TimeWindow::for_local_day(today);
        let nursing = self.nursing.list_in_window(baby_id, &window)?;
        let formula = self.formula.list_in_window(baby_id, &window)?;

        Ok(BabyDashboard {
            profile: BabyProfile::from(&baby),
            today: daily_feeding_stats(today, &nursing, &formula),
            milestones: Self::milestones(&baby),
        })
    }

    fn statistics(&self, baby_id: &str, days: i64) -> Result<BabyStatistics> {
        self.require_baby(baby_id)?;
        let end = Local::now().date_naive();
        let start = end - Duration::days(days.max(1) - 1);

        let mut daily = Vec::new();
        for day in get_days_between(start, end) {
            let window = TimeWindow::for_local_day(day);
            let nursing = self.nursing.list_in_window(baby_id, &window)?;
            let formula = self.formula.list_in_window(baby_id, &window)?;
            daily.push(daily_feeding_stats(day, &nursing, &formula));
        }

        let total_sessions: i64 = daily.iter().map(|d| d.total_sessions).sum();
        let total_nursing_minutes: i64 = daily.iter().map(|d| d.nursing_minutes).sum();
        let total_formula_ml: f64 = daily.iter().map(|d| d.formula_ml).sum();
        let period = days.max(1) as f64;

        Ok(BabyStatistics {
            period_days: days.max(1),
            daily,
            total_sessions,
            average_daily_sessions: total_sessions as f64 / period,
            total_nursing_minutes,
            average_daily_nursing_minutes: total_nursing_minutes as f64 / period,
            total_formula_ml,
            average_daily_formula_ml: total_formula_ml / period,
        })
    }
}

fn age_category(age_days: i64) -> &'static str {
    if age_days < 0 {
        "not yet born"
    } else if age_days <= 28 {
        "newborn"
    } else if age_days <= 365 {
        "infant"
    } else if age_days <= 1095 {
        "toddler"
    } else {
        "preschooler"
    }
}

fn development_stage(age_days: i64) -> &'static str {
    if age_days < 0 {
        "prenatal"
    } else if age_days <= 7 {
        "early newborn"
    } else if age_days <= 28 {
        "late newborn"
    } else if age_days <= 90 {
        "early infancy"
    } else if age_days <= 180 {
        "middle infancy"
    } else if age_days <= 365 {
        "late infancy"
    } else if age_days <= 730 {
        "early toddlerhood"
    } else {
        "toddlerhood"
    }
}

fn upcoming_milestones(age_days: i64) -> Vec<UpcomingMilestone> {
    MILESTONES
        .iter()
        .filter(|(day, _)| age_days < *day && *day <= age_days + MILESTONE_LOOKAHEAD_DAYS)
        .map(|(day, label)| UpcomingMilestone {
            days_until: day - age_days,
            label: (*label).to_string(),
        })
        .collect()
}
