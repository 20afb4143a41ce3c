//! Analytics module - time-windowed aggregation over event records.

mod analytics_model;
mod analytics_service;

pub use analytics_model::{
    DailySessions, FeedingAnalysis, GrowthAnalysis, PeakHour, TemperatureAnalysis,
};
pub use analytics_service::{peak_hours, AnalyticsService};
