//! Lookup module - descriptor tables for feeds, sleep, and diapers.

mod lookup_model;
mod lookup_traits;

pub use lookup_model::{
    default_diaper_types, default_feed_types, default_sleep_types, DiaperType, FeedCategory,
    FeedType, SleepType,
};
pub use lookup_traits::LookupRepositoryTrait;
