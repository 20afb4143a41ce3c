use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

use nestling_core::babies::{Baby, Gender, NewBaby};
use nestling_storage_sqlite::db::{self, DbPool};

/// Fresh migrated database in a temp directory. Keep the `TempDir` alive for
/// the duration of the test; the files vanish when it drops.
pub fn test_pool() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let data_dir = dir.path().to_str().expect("temp path is not utf-8").to_string() + "/";
    let db_path = db::init(&data_dir).expect("failed to initialize database");
    let pool = db::create_pool(&db_path).expect("failed to create pool");
    db::run_migrations(&pool).expect("failed to run migrations");
    (dir, pool)
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn new_baby(name: &str, age_days: i64) -> NewBaby {
    NewBaby {
        id: None,
        name: name.to_string(),
        birthday: Utc::now() - Duration::days(age_days),
        gender: Gender::Female,
        due_date: None,
        picture: None,
    }
}

pub fn seed_baby(pool: &Arc<DbPool>, name: &str, age_days: i64) -> Baby {
    use nestling_core::babies::BabyRepositoryTrait;
    use nestling_storage_sqlite::babies::BabyRepository;

    let repo = BabyRepository::new(pool.clone());
    repo.create(new_baby(name, age_days)).expect("failed to create baby")
}
