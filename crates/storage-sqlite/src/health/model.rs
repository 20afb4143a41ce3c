//! Database models for sleep, diaper, growth, and temperature tables.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestling_core::health::{
    Diaper, HeadSize, Height, NewDiaper, NewHeadSize, NewHeight, NewSleep, NewTemperature,
    NewWeight, Sleep, Temperature, Weight,
};

use crate::utils::{epoch_secs, from_epoch_secs};

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
#[diesel(table_name = crate::schema::sleep)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SleepDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub minutes: i32,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::sleep)]
#[serde(rename_all = "camelCase")]
pub struct NewSleepDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub minutes: i32,
    pub created_at: i64,
}

impl From<SleepDB> for Sleep {
    fn from(db: SleepDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            minutes: db.minutes,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Sleep> for SleepDB {
    fn from(domain: Sleep) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            minutes: domain.minutes,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewSleep> for NewSleepDB {
    fn from(domain: NewSleep) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            minutes: domain.minutes,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}

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
#[diesel(table_name = crate::schema::diapers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DiaperDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::diapers)]
#[serde(rename_all = "camelCase")]
pub struct NewDiaperDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub created_at: i64,
}

impl From<DiaperDB> for Diaper {
    fn from(db: DiaperDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Diaper> for DiaperDB {
    fn from(domain: Diaper) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewDiaper> for NewDiaperDB {
    fn from(domain: NewDiaper) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}

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
#[diesel(table_name = crate::schema::weights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WeightDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub grams: f64,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::weights)]
#[serde(rename_all = "camelCase")]
pub struct NewWeightDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub grams: f64,
    pub created_at: i64,
}

impl From<WeightDB> for Weight {
    fn from(db: WeightDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            grams: db.grams,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Weight> for WeightDB {
    fn from(domain: Weight) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            grams: domain.grams,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewWeight> for NewWeightDB {
    fn from(domain: NewWeight) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            grams: domain.grams,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}

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
#[diesel(table_name = crate::schema::heights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HeightDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::heights)]
#[serde(rename_all = "camelCase")]
pub struct NewHeightDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: i64,
}

impl From<HeightDB> for Height {
    fn from(db: HeightDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            centimeters: db.centimeters,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Height> for HeightDB {
    fn from(domain: Height) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            centimeters: domain.centimeters,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewHeight> for NewHeightDB {
    fn from(domain: NewHeight) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            centimeters: domain.centimeters,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}

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
#[diesel(table_name = crate::schema::head_sizes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HeadSizeDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::head_sizes)]
#[serde(rename_all = "camelCase")]
pub struct NewHeadSizeDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub centimeters: f64,
    pub created_at: i64,
}

impl From<HeadSizeDB> for HeadSize {
    fn from(db: HeadSizeDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            centimeters: db.centimeters,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<HeadSize> for HeadSizeDB {
    fn from(domain: HeadSize) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            centimeters: domain.centimeters,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewHeadSize> for NewHeadSizeDB {
    fn from(domain: NewHeadSize) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            centimeters: domain.centimeters,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}

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
#[diesel(table_name = crate::schema::temperatures)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub celsius: f64,
    pub location: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::temperatures)]
#[serde(rename_all = "camelCase")]
pub struct NewTemperatureDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub celsius: f64,
    pub location: Option<String>,
    pub created_at: i64,
}

impl From<TemperatureDB> for Temperature {
    fn from(db: TemperatureDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            celsius: db.celsius,
            location: db.location,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Temperature> for TemperatureDB {
    fn from(domain: Temperature) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            celsius: domain.celsius,
            location: domain.location,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewTemperature> for NewTemperatureDB {
    fn from(domain: NewTemperature) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            celsius: domain.celsius,
            location: domain.location,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}
