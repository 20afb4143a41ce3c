use crate::activity::activity_model::{NewPhoto, NewVideo, Photo, Video};
use crate::errors::Result;
use crate::events::EventRepositoryTrait;

/// Photo repository with caption search on top of the shared event
/// operations.
pub trait PhotoRepositoryTrait: EventRepositoryTrait<Photo, NewPhoto> {
    /// Photos whose caption contains `keyword`, newest first.
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> Result<Vec<Photo>>;
}

/// Video repository with caption search and the duration total.
pub trait VideoRepositoryTrait: EventRepositoryTrait<Video, NewVideo> {
    /// Videos whose caption contains `keyword`, newest first.
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> Result<Vec<Video>>;

    /// Sum of all video durations for one baby, in seconds.
    fn total_seconds(&self, baby_id: &str) -> Result<i64>;
}
