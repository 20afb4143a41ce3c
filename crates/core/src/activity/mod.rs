//! Activity module - playtime, baths, and media records.

mod activity_model;
mod activity_service;
mod activity_traits;

pub use activity_model::{
    Bath, BathStats, MediaStats, NewBath, NewPhoto, NewPlaytime, NewVideo, Photo, Playtime,
    PlaytimeStats, Video,
};
pub use activity_service::ActivityService;
pub use activity_traits::{PhotoRepositoryTrait, VideoRepositoryTrait};

#[cfg(test)]
mod activity_service_tests;
