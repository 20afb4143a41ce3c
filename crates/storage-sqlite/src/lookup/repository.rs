//! SQLite-backed repository for the descriptor tables.

use std::sync::Arc;

use diesel::prelude::*;

use nestling_core::lookup::{DiaperType, FeedType, LookupRepositoryTrait, SleepType};
use nestling_core::Result;

use super::model::{DiaperTypeDB, FeedTypeDB, SleepTypeDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;

pub struct LookupRepository {
    pool: Arc<DbPool>,
}

impl LookupRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LookupRepositoryTrait for LookupRepository {
    fn upsert_feed_type(&self, feed_type: FeedType) -> Result<FeedType> {
        use crate::schema::feed_types;

        let mut conn = get_connection(&self.pool)?;
        let row: FeedTypeDB = feed_type.into();
        let saved = diesel::insert_into(feed_types::table)
            .values(&row)
            .on_conflict(feed_types::id)
            .do_update()
            .set(&row)
            .returning(FeedTypeDB::as_returning())
            .get_result::<FeedTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(saved.into())
    }

    fn list_feed_types(&self) -> Result<Vec<FeedType>> {
        use crate::schema::feed_types;

        let mut conn = get_connection(&self.pool)?;
        let rows = feed_types::table
            .order(feed_types::id.asc())
            .load::<FeedTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn upsert_sleep_type(&self, sleep_type: SleepType) -> Result<SleepType> {
        use crate::schema::sleep_types;

        let mut conn = get_connection(&self.pool)?;
        let row: SleepTypeDB = sleep_type.into();
        let saved = diesel::insert_into(sleep_types::table)
            .values(&row)
            .on_conflict(sleep_types::id)
            .do_update()
            .set(&row)
            .returning(SleepTypeDB::as_returning())
            .get_result::<SleepTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(saved.into())
    }

    fn list_sleep_types(&self) -> Result<Vec<SleepType>> {
        use crate::schema::sleep_types;

        let mut conn = get_connection(&self.pool)?;
        let rows = sleep_types::table
            .order(sleep_types::id.asc())
            .load::<SleepTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn upsert_diaper_type(&self, diaper_type: DiaperType) -> Result<DiaperType> {
        use crate::schema::diaper_types;

        let mut conn = get_connection(&self.pool)?;
        let row: DiaperTypeDB = diaper_type.into();
        let saved = diesel::insert_into(diaper_types::table)
            .values(&row)
            .on_conflict(diaper_types::id)
            .do_update()
            .set(&row)
            .returning(DiaperTypeDB::as_returning())
            .get_result::<DiaperTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(saved.into())
    }

    fn list_diaper_types(&self) -> Result<Vec<DiaperType>> {
        use crate::schema::diaper_types;

        let mut conn = get_connection(&self.pool)?;
        let rows = diaper_types::table
            .order(diaper_types::id.asc())
            .load::<DiaperTypeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_diaper_type(&self, id: &str) -> Result<Option<DiaperType>> {
        use crate::schema::diaper_types;

        let mut conn = get_connection(&self.pool)?;
        let found = diaper_types::table
            .find(id)
            .first::<DiaperTypeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Into::into))
    }
}

/// Writes the built-in descriptor rows. Safe to run on every startup.
pub fn seed_lookups(repository: &LookupRepository) -> Result<()> {
    for feed_type in nestling_core::lookup::default_feed_types() {
        repository.upsert_feed_type(feed_type)?;
    }
    for sleep_type in nestling_core::lookup::default_sleep_types() {
        repository.upsert_sleep_type(sleep_type)?;
    }
    for diaper_type in nestling_core::lookup::default_diaper_types() {
        repository.upsert_diaper_type(diaper_type)?;
    }
    log::debug!("Lookup tables seeded");
    Ok(())
}
