mod model;
mod repository;

pub use model::{DiaperTypeDB, FeedTypeDB, SleepTypeDB};
pub use repository::{seed_lookups, LookupRepository};
