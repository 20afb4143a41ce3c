//! Database models for babies.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestling_core::babies::{Baby, Gender, NewBaby};

use crate::utils::{epoch_secs, from_epoch_secs};

/// Database model for a baby profile.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::babies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BabyDB {
    pub id: String,
    pub name: String,
    pub birthday: i64,
    pub gender: i32,
    pub due_date: Option<String>,
    pub picture: Option<String>,
    pub created_at: i64,
}

/// Database model for registering a new baby.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::babies)]
#[serde(rename_all = "camelCase")]
pub struct NewBabyDB {
    pub id: Option<String>,
    pub name: String,
    pub birthday: i64,
    pub gender: i32,
    pub due_date: Option<String>,
    pub picture: Option<String>,
    pub created_at: i64,
}

impl From<BabyDB> for Baby {
    fn from(db: BabyDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            birthday: from_epoch_secs(db.birthday),
            gender: Gender::from_i32(db.gender),
            due_date: db.due_date,
            picture: db.picture,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Baby> for BabyDB {
    fn from(domain: Baby) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            birthday: epoch_secs(domain.birthday),
            gender: domain.gender.as_i32(),
            due_date: domain.due_date,
            picture: domain.picture,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewBaby> for NewBabyDB {
    fn from(domain: NewBaby) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            birthday: epoch_secs(domain.birthday),
            gender: domain.gender.as_i32(),
            due_date: domain.due_date,
            picture: domain.picture,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}
