//! Database models for the feeding tables.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestling_core::feeding::{
    FinishSide, Formula, NewFormula, NewNursing, NewPumping, NewSolids, Nursing, Pumping, Solids,
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
#[diesel(table_name = crate::schema::nursing)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NursingDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub finish_side: i32,
    pub left_minutes: i32,
    pub right_minutes: i32,
    pub both_minutes: i32,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::nursing)]
#[serde(rename_all = "camelCase")]
pub struct NewNursingDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub finish_side: i32,
    pub left_minutes: i32,
    pub right_minutes: i32,
    pub both_minutes: i32,
    pub created_at: i64,
}

impl From<NursingDB> for Nursing {
    fn from(db: NursingDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            finish_side: FinishSide::from_i32(db.finish_side),
            left_minutes: db.left_minutes,
            right_minutes: db.right_minutes,
            both_minutes: db.both_minutes,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Nursing> for NursingDB {
    fn from(domain: Nursing) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            finish_side: domain.finish_side.as_i32(),
            left_minutes: domain.left_minutes,
            right_minutes: domain.right_minutes,
            both_minutes: domain.both_minutes,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewNursing> for NewNursingDB {
    fn from(domain: NewNursing) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            finish_side: domain.finish_side.as_i32(),
            left_minutes: domain.left_minutes,
            right_minutes: domain.right_minutes,
            both_minutes: domain.both_minutes,
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
#[diesel(table_name = crate::schema::formula)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FormulaDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::formula)]
#[serde(rename_all = "camelCase")]
pub struct NewFormulaDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub created_at: i64,
}

impl From<FormulaDB> for Formula {
    fn from(db: FormulaDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            amount_ml: db.amount_ml,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Formula> for FormulaDB {
    fn from(domain: Formula) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount_ml: domain.amount_ml,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewFormula> for NewFormulaDB {
    fn from(domain: NewFormula) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount_ml: domain.amount_ml,
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
#[diesel(table_name = crate::schema::pumping)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PumpingDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub minutes: i32,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::pumping)]
#[serde(rename_all = "camelCase")]
pub struct NewPumpingDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount_ml: f64,
    pub minutes: i32,
    pub created_at: i64,
}

impl From<PumpingDB> for Pumping {
    fn from(db: PumpingDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            amount_ml: db.amount_ml,
            minutes: db.minutes,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Pumping> for PumpingDB {
    fn from(domain: Pumping) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount_ml: domain.amount_ml,
            minutes: domain.minutes,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewPumping> for NewPumpingDB {
    fn from(domain: NewPumping) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount_ml: domain.amount_ml,
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
#[diesel(table_name = crate::schema::solids)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SolidsDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount: f64,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::solids)]
#[serde(rename_all = "camelCase")]
pub struct NewSolidsDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub type_id: Option<String>,
    pub amount: f64,
    pub created_at: i64,
}

impl From<SolidsDB> for Solids {
    fn from(db: SolidsDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            type_id: db.type_id,
            amount: db.amount,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Solids> for SolidsDB {
    fn from(domain: Solids) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount: domain.amount,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewSolids> for NewSolidsDB {
    fn from(domain: NewSolids) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            type_id: domain.type_id,
            amount: domain.amount,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}
