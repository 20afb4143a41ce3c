use crate::errors::Result;
use crate::lookup::lookup_model::{DiaperType, FeedType, SleepType};

/// Trait for lookup-table operations. Upserts keep seeding idempotent.
pub trait LookupRepositoryTrait: Send + Sync {
    fn upsert_feed_type(&self, feed_type: FeedType) -> Result<FeedType>;
    fn list_feed_types(&self) -> Result<Vec<FeedType>>;

    fn upsert_sleep_type(&self, sleep_type: SleepType) -> Result<SleepType>;
    fn list_sleep_types(&self) -> Result<Vec<SleepType>>;

    fn upsert_diaper_type(&self, diaper_type: DiaperType) -> Result<DiaperType>;
    fn list_diaper_types(&self) -> Result<Vec<DiaperType>>;
    fn get_diaper_type(&self, id: &str) -> Result<Option<DiaperType>>;
}
