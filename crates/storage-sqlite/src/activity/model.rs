//! Database models for playtime, bath, and media tables.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use nestling_core::activity::{
    Bath, NewBath, NewPhoto, NewPlaytime, NewVideo, Photo, Playtime, Video,
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
#[diesel(table_name = crate::schema::playtimes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PlaytimeDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub play_kind: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::playtimes)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaytimeDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub play_kind: Option<String>,
    pub created_at: i64,
}

impl From<PlaytimeDB> for Playtime {
    fn from(db: PlaytimeDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            minutes: db.minutes,
            play_kind: db.play_kind,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Playtime> for PlaytimeDB {
    fn from(domain: Playtime) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            minutes: domain.minutes,
            play_kind: domain.play_kind,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewPlaytime> for NewPlaytimeDB {
    fn from(domain: NewPlaytime) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            minutes: domain.minutes,
            play_kind: domain.play_kind,
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
#[diesel(table_name = crate::schema::baths)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BathDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub water_celsius: Option<f64>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::baths)]
#[serde(rename_all = "camelCase")]
pub struct NewBathDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub minutes: i32,
    pub water_celsius: Option<f64>,
    pub created_at: i64,
}

impl From<BathDB> for Bath {
    fn from(db: BathDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            minutes: db.minutes,
            water_celsius: db.water_celsius,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Bath> for BathDB {
    fn from(domain: Bath) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            minutes: domain.minutes,
            water_celsius: domain.water_celsius,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewBath> for NewBathDB {
    fn from(domain: NewBath) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            minutes: domain.minutes,
            water_celsius: domain.water_celsius,
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
#[diesel(table_name = crate::schema::photos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PhotoDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub caption: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::photos)]
#[serde(rename_all = "camelCase")]
pub struct NewPhotoDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub caption: Option<String>,
    pub created_at: i64,
}

impl From<PhotoDB> for Photo {
    fn from(db: PhotoDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            file_path: db.file_path,
            caption: db.caption,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Photo> for PhotoDB {
    fn from(domain: Photo) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            file_path: domain.file_path,
            caption: domain.caption,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewPhoto> for NewPhotoDB {
    fn from(domain: NewPhoto) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            file_path: domain.file_path,
            caption: domain.caption,
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
#[diesel(table_name = crate::schema::videos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct VideoDB {
    pub id: String,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub seconds: i32,
    pub caption: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::videos)]
#[serde(rename_all = "camelCase")]
pub struct NewVideoDB {
    pub id: Option<String>,
    pub baby_id: String,
    pub event_time: i64,
    pub note: Option<String>,
    pub has_picture: bool,
    pub file_path: String,
    pub seconds: i32,
    pub caption: Option<String>,
    pub created_at: i64,
}

impl From<VideoDB> for Video {
    fn from(db: VideoDB) -> Self {
        Self {
            id: db.id,
            baby_id: db.baby_id,
            event_time: from_epoch_secs(db.event_time),
            note: db.note,
            has_picture: db.has_picture,
            file_path: db.file_path,
            seconds: db.seconds,
            caption: db.caption,
            created_at: from_epoch_secs(db.created_at),
        }
    }
}

impl From<Video> for VideoDB {
    fn from(domain: Video) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            file_path: domain.file_path,
            seconds: domain.seconds,
            caption: domain.caption,
            created_at: epoch_secs(domain.created_at),
        }
    }
}

impl From<NewVideo> for NewVideoDB {
    fn from(domain: NewVideo) -> Self {
        Self {
            id: domain.id,
            baby_id: domain.baby_id,
            event_time: epoch_secs(domain.event_time),
            note: domain.note,
            has_picture: domain.has_picture,
            file_path: domain.file_path,
            seconds: domain.seconds,
            caption: domain.caption,
            created_at: epoch_secs(chrono::Utc::now()),
        }
    }
}
