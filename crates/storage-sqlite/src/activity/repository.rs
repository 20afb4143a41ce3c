//! SQLite-backed repositories for activity and media events.

use diesel::prelude::*;

use nestling_core::activity::{
    Bath, NewBath, NewPhoto, NewPlaytime, NewVideo, Photo, PhotoRepositoryTrait, Playtime, Video,
    VideoRepositoryTrait,
};

use super::model::{
    BathDB, NewBathDB, NewPhotoDB, NewPlaytimeDB, NewVideoDB, PhotoDB, PlaytimeDB, VideoDB,
};
use crate::event_repository;

event_repository!(PlaytimeRepository, playtimes, PlaytimeDB, NewPlaytimeDB, Playtime, NewPlaytime);
event_repository!(BathRepository, baths, BathDB, NewBathDB, Bath, NewBath);
event_repository!(PhotoRepository, photos, PhotoDB, NewPhotoDB, Photo, NewPhoto);
event_repository!(VideoRepository, videos, VideoDB, NewVideoDB, Video, NewVideo);

impl PhotoRepositoryTrait for PhotoRepository {
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> nestling_core::Result<Vec<Photo>> {
        use crate::schema::photos;

        let mut conn = crate::db::get_connection(&self.pool)?;
        let rows = photos::table
            .filter(photos::baby_id.eq(baby_id))
            .filter(photos::caption.like(format!("%{}%", keyword)))
            .order(photos::event_time.desc())
            .load::<PhotoDB>(&mut conn)
            .map_err(crate::errors::StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl VideoRepositoryTrait for VideoRepository {
    fn search_by_caption(&self, baby_id: &str, keyword: &str) -> nestling_core::Result<Vec<Video>> {
        use crate::schema::videos;

        let mut conn = crate::db::get_connection(&self.pool)?;
        let rows = videos::table
            .filter(videos::baby_id.eq(baby_id))
            .filter(videos::caption.like(format!("%{}%", keyword)))
            .order(videos::event_time.desc())
            .load::<VideoDB>(&mut conn)
            .map_err(crate::errors::StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn total_seconds(&self, baby_id: &str) -> nestling_core::Result<i64> {
        use crate::schema::videos;

        let mut conn = crate::db::get_connection(&self.pool)?;
        let total: Option<i64> = videos::table
            .filter(videos::baby_id.eq(baby_id))
            .select(diesel::dsl::sum(videos::seconds))
            .get_result(&mut conn)
            .map_err(crate::errors::StorageError::from)?;
        Ok(total.unwrap_or(0))
    }
}
