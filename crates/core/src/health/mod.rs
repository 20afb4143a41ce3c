//! Health module - sleep, diapers, growth measurements, and temperature.

mod health_model;
mod health_service;
mod health_traits;

pub use health_model::{
    DailyDiaperCount, Diaper, DiaperStats, GrowthSummary, HeadSize, Height, NewDiaper,
    NewHeadSize, NewHeight, NewSleep, NewTemperature, NewWeight, Sleep, SleepStats, Temperature,
    TemperatureBand, Trend, Weight, WeightTrend,
};
pub use health_service::HealthService;
pub use health_traits::TemperatureRepositoryTrait;

#[cfg(test)]
mod health_service_tests;
