//! Babies module - domain models, services, and traits.

mod babies_model;
mod babies_service;
mod babies_traits;

pub use babies_model::{
    Baby, BabyDashboard, BabyProfile, BabyStatistics, BabyUpdate, Gender, MilestoneReport,
    NewBaby, UpcomingMilestone,
};
pub use babies_service::BabyService;
pub use babies_traits::{BabyRepositoryTrait, BabyServiceTrait};
