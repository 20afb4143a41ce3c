//! Imports records from the legacy CamelCase SQLite schema.
//!
//! The old application stored one table per category (`Baby`, `Nursing`,
//! `Formula`, ...) with `ID`/`BabyID`/`Time` columns and epoch-second
//! timestamps. Rows are copied one at a time through the repositories so
//! every record passes through the same conversion path as live writes.
//! A row that fails to convert or insert is logged and skipped; a missing
//! table is skipped wholesale.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use nestling_core::babies::{Gender, NewBaby};
use nestling_core::events::EventRepositoryTrait;
use nestling_core::feeding::FinishSide;
use nestling_core::{activity, feeding, health};

use nestling_storage_sqlite::activity::{
    BathRepository, PhotoRepository, PlaytimeRepository, VideoRepository,
};
use nestling_storage_sqlite::babies::BabyRepository;
use nestling_storage_sqlite::db::DbPool;
use nestling_storage_sqlite::feeding::{FormulaRepository, NursingRepository};
use nestling_storage_sqlite::health::{
    DiaperRepository, HeadSizeRepository, HeightRepository, SleepRepository,
    TemperatureRepository, WeightRepository,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryCounts {
    pub total: usize,
    pub migrated: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct MigrationReport {
    pub categories: Vec<(&'static str, CategoryCounts)>,
}

impl MigrationReport {
    pub fn migrated(&self) -> usize {
        self.categories.iter().map(|(_, c)| c.migrated).sum()
    }

    pub fn failed(&self) -> usize {
        self.categories.iter().map(|(_, c)| c.failed).sum()
    }
}

fn to_utc(epoch: f64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch as i64, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Shared legacy columns every event table carries.
struct LegacyEvent {
    id: String,
    baby_id: String,
    time: DateTime<Utc>,
    note: Option<String>,
    has_picture: bool,
}

fn legacy_event(row: &rusqlite::Row<'_>) -> rusqlite::Result<LegacyEvent> {
    Ok(LegacyEvent {
        id: row.get("ID")?,
        baby_id: row.get("BabyID")?,
        time: to_utc(row.get::<_, f64>("Time")?),
        note: row.get("Note")?,
        has_picture: row.get::<_, Option<i64>>("HasPicture")?.unwrap_or(0) != 0,
    })
}

/// Reads every row of `query`, converts it, and inserts it through `insert`.
/// Returns `None` when the table does not exist in the source database.
fn migrate_table<T, F, G>(
    conn: &Connection,
    label: &'static str,
    query: &str,
    mut convert: F,
    mut insert: G,
) -> Option<CategoryCounts>
where
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    G: FnMut(T) -> nestling_core::Result<()>,
{
    let mut stmt = match conn.prepare(query) {
        Ok(stmt) => stmt,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", label, e);
            return None;
        }
    };

    let mut counts = CategoryCounts::default();
    let mut rows = match stmt.query([]) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", label, e);
            return None;
        }
    };

    loop {
        let row = match rows.next() {
            Ok(Some(row)) => row,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Stopped reading {}: {}", label, e);
                break;
            }
        };
        counts.total += 1;
        let record = match convert(row) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Bad {} row: {}", label, e);
                counts.failed += 1;
                continue;
            }
        };
        match insert(record) {
            Ok(()) => counts.migrated += 1,
            Err(e) => {
                tracing::error!("Failed to insert {} row: {}", label, e);
                counts.failed += 1;
            }
        }
    }

    tracing::info!("{}: {}/{} rows migrated", label, counts.migrated, counts.total);
    Some(counts)
}

/// Copies everything from `source` into the current database behind `pool`.
pub fn run(source: &Path, pool: Arc<DbPool>) -> anyhow::Result<MigrationReport> {
    let conn = Connection::open(source)?;
    tracing::info!("Reading legacy database {}", source.display());

    let mut report = MigrationReport::default();
    let mut record = |label, counts: Option<CategoryCounts>| {
        if let Some(counts) = counts {
            report.categories.push((label, counts));
        }
    };

    let babies = BabyRepository::new(pool.clone());
    record(
        "babies",
        migrate_table(
            &conn,
            "babies",
            "SELECT ID, Name, DOB, DueDay, Gender, Picture FROM Baby",
            |row| {
                Ok(NewBaby {
                    id: Some(row.get("ID")?),
                    name: row.get("Name")?,
                    birthday: to_utc(row.get::<_, f64>("DOB")?),
                    gender: Gender::from_i32(
                        row.get::<_, Option<i64>>("Gender")?.unwrap_or(0) as i32
                    ),
                    due_date: row.get("DueDay")?,
                    picture: row.get("Picture")?,
                })
            },
            |baby| {
                use nestling_core::babies::BabyRepositoryTrait;
                babies.create(baby).map(|_| ())
            },
        ),
    );

    let nursing = NursingRepository::new(pool.clone());
    record(
        "nursing",
        migrate_table(
            &conn,
            "nursing",
            "SELECT ID, BabyID, Time, Note, HasPicture, DescID, FinishSide, \
             LeftDuration, RightDuration, BothDuration FROM Nursing",
            |row| {
                let base = legacy_event(row)?;
                Ok(feeding::NewNursing {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    type_id: row.get("DescID")?,
                    finish_side: FinishSide::from_i32(
                        row.get::<_, Option<i64>>("FinishSide")?.unwrap_or(2) as i32,
                    ),
                    left_minutes: row.get::<_, Option<i64>>("LeftDuration")?.unwrap_or(0) as i32,
                    right_minutes: row.get::<_, Option<i64>>("RightDuration")?.unwrap_or(0) as i32,
                    both_minutes: row.get::<_, Option<i64>>("BothDuration")?.unwrap_or(0) as i32,
                })
            },
            |r| nursing.insert(r).map(|_| ()),
        ),
    );

    let formula = FormulaRepository::new(pool.clone());
    record(
        "formula",
        migrate_table(
            &conn,
            "formula",
            "SELECT ID, BabyID, Time, Note, HasPicture, DescID, Amount FROM Formula",
            |row| {
                let base = legacy_event(row)?;
                Ok(feeding::NewFormula {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    type_id: row.get("DescID")?,
                    amount_ml: row.get::<_, Option<f64>>("Amount")?.unwrap_or(0.0),
                })
            },
            |r| formula.insert(r).map(|_| ()),
        ),
    );

    let sleep = SleepRepository::new(pool.clone());
    record(
        "sleep",
        migrate_table(
            &conn,
            "sleep",
            "SELECT ID, BabyID, Time, Note, HasPicture, DescID, Duration FROM Sleep",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewSleep {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    type_id: row.get("DescID")?,
                    minutes: row.get::<_, Option<i64>>("Duration")?.unwrap_or(0) as i32,
                })
            },
            |r| sleep.insert(r).map(|_| ()),
        ),
    );

    let diapers = DiaperRepository::new(pool.clone());
    record(
        "diapers",
        migrate_table(
            &conn,
            "diapers",
            "SELECT ID, BabyID, Time, Note, HasPicture, DescID FROM Diaper",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewDiaper {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    type_id: row.get("DescID")?,
                })
            },
            |r| diapers.insert(r).map(|_| ()),
        ),
    );

    let weights = WeightRepository::new(pool.clone());
    record(
        "weights",
        migrate_table(
            &conn,
            "weights",
            "SELECT ID, BabyID, Time, Note, HasPicture, Weight FROM Weight",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewWeight {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    grams: row.get::<_, f64>("Weight")?,
                })
            },
            |r| weights.insert(r).map(|_| ()),
        ),
    );

    let heights = HeightRepository::new(pool.clone());
    record(
        "heights",
        migrate_table(
            &conn,
            "heights",
            "SELECT ID, BabyID, Time, Note, HasPicture, Height FROM Height",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewHeight {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    centimeters: row.get::<_, f64>("Height")?,
                })
            },
            |r| heights.insert(r).map(|_| ()),
        ),
    );

    let heads = HeadSizeRepository::new(pool.clone());
    record(
        "head sizes",
        migrate_table(
            &conn,
            "head sizes",
            "SELECT ID, BabyID, Time, Note, HasPicture, Head FROM Head",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewHeadSize {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    centimeters: row.get::<_, f64>("Head")?,
                })
            },
            |r| heads.insert(r).map(|_| ()),
        ),
    );

    let temperatures = TemperatureRepository::new(pool.clone());
    record(
        "temperatures",
        migrate_table(
            &conn,
            "temperatures",
            "SELECT ID, BabyID, Time, Note, HasPicture, Temperature, Location FROM Temperature",
            |row| {
                let base = legacy_event(row)?;
                Ok(health::NewTemperature {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    celsius: row.get::<_, f64>("Temperature")?,
                    location: row.get("Location")?,
                })
            },
            |r| temperatures.insert(r).map(|_| ()),
        ),
    );

    let playtimes = PlaytimeRepository::new(pool.clone());
    record(
        "playtimes",
        migrate_table(
            &conn,
            "playtimes",
            "SELECT ID, BabyID, Time, Note, HasPicture, Duration, PlayType FROM Playtime",
            |row| {
                let base = legacy_event(row)?;
                Ok(activity::NewPlaytime {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    minutes: row.get::<_, Option<i64>>("Duration")?.unwrap_or(0) as i32,
                    play_kind: row.get("PlayType")?,
                })
            },
            |r| playtimes.insert(r).map(|_| ()),
        ),
    );

    let baths = BathRepository::new(pool.clone());
    record(
        "baths",
        migrate_table(
            &conn,
            "baths",
            "SELECT ID, BabyID, Time, Note, HasPicture, Duration, WaterTemperature FROM Bath",
            |row| {
                let base = legacy_event(row)?;
                Ok(activity::NewBath {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    minutes: row.get::<_, Option<i64>>("Duration")?.unwrap_or(0) as i32,
                    water_celsius: row.get("WaterTemperature")?,
                })
            },
            |r| baths.insert(r).map(|_| ()),
        ),
    );

    // Media rows go straight through the repository; the files they point at
    // may no longer exist on this machine.
    let photos = PhotoRepository::new(pool.clone());
    record(
        "photos",
        migrate_table(
            &conn,
            "photos",
            "SELECT ID, BabyID, Time, Note, HasPicture, FilePath, Description FROM Photo",
            |row| {
                let base = legacy_event(row)?;
                Ok(activity::NewPhoto {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    file_path: row.get("FilePath")?,
                    caption: row.get("Description")?,
                })
            },
            |r| photos.insert(r).map(|_| ()),
        ),
    );

    let videos = VideoRepository::new(pool);
    record(
        "videos",
        migrate_table(
            &conn,
            "videos",
            "SELECT ID, BabyID, Time, Note, HasPicture, FilePath, Duration, Description FROM Video",
            |row| {
                let base = legacy_event(row)?;
                Ok(activity::NewVideo {
                    id: Some(base.id),
                    baby_id: base.baby_id,
                    event_time: base.time,
                    note: base.note,
                    has_picture: base.has_picture,
                    file_path: row.get("FilePath")?,
                    seconds: row.get::<_, Option<i64>>("Duration")?.unwrap_or(0) as i32,
                    caption: row.get("Description")?,
                })
            },
            |r| videos.insert(r).map(|_| ()),
        ),
    );

    Ok(report)
}
