//! Database models for the descriptor tables.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestling_core::lookup::{DiaperType, FeedCategory, FeedType, SleepType};

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::feed_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FeedTypeDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

impl From<FeedTypeDB> for FeedType {
    fn from(db: FeedTypeDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            category: FeedCategory::from_str_or_default(&db.category),
        }
    }
}

impl From<FeedType> for FeedTypeDB {
    fn from(domain: FeedType) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            category: domain.category.as_str().to_string(),
        }
    }
}

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::sleep_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SleepTypeDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<SleepTypeDB> for SleepType {
    fn from(db: SleepTypeDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
        }
    }
}

impl From<SleepType> for SleepTypeDB {
    fn from(domain: SleepType) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
        }
    }
}

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::diaper_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DiaperTypeDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<DiaperTypeDB> for DiaperType {
    fn from(db: DiaperTypeDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
        }
    }
}

impl From<DiaperType> for DiaperTypeDB {
    fn from(domain: DiaperType) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
        }
    }
}
