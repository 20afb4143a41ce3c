//! Feeding module - nursing, formula, pumping, and solids records.

mod feeding_model;
mod feeding_service;

pub use feeding_model::{
    daily_feeding_stats, DailyFeedingStats, FeedingPatterns, FinishSide, Formula, NewFormula,
    NewNursing, NewPumping, NewSolids, Nursing, Pumping, Solids, WeeklyFeedingSummary,
};
pub use feeding_service::FeedingService;

#[cfg(test)]
mod feeding_service_tests;
