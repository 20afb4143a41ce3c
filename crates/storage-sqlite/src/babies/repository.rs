use std::sync::Arc;

use chrono::{Duration, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use nestling_core::babies::{Baby, BabyRepositoryTrait, Gender, NewBaby};
use nestling_core::errors::DatabaseError;
use nestling_core::Result;

use super::model::{BabyDB, NewBabyDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::babies;
use crate::utils::epoch_secs;

pub struct BabyRepository {
    pool: Arc<DbPool>,
}

impl BabyRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl BabyRepositoryTrait for BabyRepository {
    fn create(&self, new_baby: NewBaby) -> Result<Baby> {
        let mut conn = get_connection(&self.pool)?;
        let mut row: NewBabyDB = new_baby.into();
        if row.id.is_none() {
            row.id = Some(Uuid::new_v4().to_string());
        }
        let inserted = diesel::insert_into(babies::table)
            .values(&row)
            .returning(BabyDB::as_returning())
            .get_result::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(inserted.into())
    }

    fn get(&self, baby_id: &str) -> Result<Option<Baby>> {
        let mut conn = get_connection(&self.pool)?;
        let found = babies::table
            .find(baby_id)
            .first::<BabyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found.map(Into::into))
    }

    fn list(&self) -> Result<Vec<Baby>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = babies::table
            .order(babies::birthday.asc())
            .load::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn update(&self, baby: Baby) -> Result<Baby> {
        let mut conn = get_connection(&self.pool)?;
        let row: BabyDB = baby.into();
        let baby_id = row.id.clone();
        let affected = diesel::update(babies::table.find(&baby_id))
            .set(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        if affected == 0 {
            return Err(DatabaseError::NotFound(baby_id).into());
        }
        let reloaded = babies::table
            .find(&baby_id)
            .first::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(reloaded.into())
    }

    /// Event rows cascade via their foreign keys.
    fn delete(&self, baby_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(babies::table.find(baby_id))
            .execute(&mut conn)
            .map_err(|e| StorageError::from(e).into())
    }

    fn search_by_name(&self, query: &str) -> Result<Vec<Baby>> {
        let mut conn = get_connection(&self.pool)?;
        let pattern = format!("%{}%", query);
        let rows = babies::table
            .filter(babies::name.like(pattern))
            .order(babies::name.asc())
            .load::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_by_gender(&self, gender: Gender) -> Result<Vec<Baby>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = babies::table
            .filter(babies::gender.eq(gender.as_i32()))
            .order(babies::birthday.asc())
            .load::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_by_age_range(&self, min_days: i64, max_days: i64) -> Result<Vec<Baby>> {
        let now = Utc::now();
        // age >= min_days means born at least min_days ago; age <= max_days
        // means born less than max_days + 1 days ago.
        let youngest = epoch_secs(now - Duration::days(min_days));
        let oldest = epoch_secs(now - Duration::days(max_days + 1));

        let mut conn = get_connection(&self.pool)?;
        let rows = babies::table
            .filter(babies::birthday.le(youngest))
            .filter(babies::birthday.gt(oldest))
            .order(babies::birthday.asc())
            .load::<BabyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
