//! Shared wiring for every subcommand: pool, repositories, and services.

use std::sync::Arc;

use nestling_core::activity::ActivityService;
use nestling_core::analytics::AnalyticsService;
use nestling_core::babies::BabyService;
use nestling_core::export::ExportService;
use nestling_core::feeding::FeedingService;
use nestling_core::health::HealthService;

use nestling_storage_sqlite::activity::{
    BathRepository, PhotoRepository, PlaytimeRepository, VideoRepository,
};
use nestling_storage_sqlite::babies::BabyRepository;
use nestling_storage_sqlite::db::{self, DbPool};
use nestling_storage_sqlite::feeding::{
    FormulaRepository, NursingRepository, PumpingRepository, SolidsRepository,
};
use nestling_storage_sqlite::health::{
    DiaperRepository, HeadSizeRepository, HeightRepository, SleepRepository,
    TemperatureRepository, WeightRepository,
};
use nestling_storage_sqlite::lookup::LookupRepository;

pub struct AppContext {
    pub pool: Arc<DbPool>,
    pub babies: Arc<BabyService>,
    pub feeding: Arc<FeedingService>,
    pub health: Arc<HealthService>,
    pub activity: Arc<ActivityService>,
    pub analytics: Arc<AnalyticsService>,
    pub export: Arc<ExportService>,
    pub lookups: Arc<LookupRepository>,
}

/// Data directory the database lives in. `NESTLING_DATA_DIR` overrides the
/// default `./data/`.
pub fn default_data_dir() -> String {
    std::env::var("NESTLING_DATA_DIR").unwrap_or_else(|_| "./data/".to_string())
}

/// Initializes the database under `data_dir`, runs pending migrations, and
/// wires every service onto one shared pool.
pub fn build_context(data_dir: &str) -> anyhow::Result<AppContext> {
    let db_path = db::init(data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let baby_repo = Arc::new(BabyRepository::new(pool.clone()));
    let nursing_repo = Arc::new(NursingRepository::new(pool.clone()));
    let formula_repo = Arc::new(FormulaRepository::new(pool.clone()));
    let pumping_repo = Arc::new(PumpingRepository::new(pool.clone()));
    let solids_repo = Arc::new(SolidsRepository::new(pool.clone()));
    let sleep_repo = Arc::new(SleepRepository::new(pool.clone()));
    let diaper_repo = Arc::new(DiaperRepository::new(pool.clone()));
    let weight_repo = Arc::new(WeightRepository::new(pool.clone()));
    let height_repo = Arc::new(HeightRepository::new(pool.clone()));
    let head_repo = Arc::new(HeadSizeRepository::new(pool.clone()));
    let temperature_repo = Arc::new(TemperatureRepository::new(pool.clone()));
    let playtime_repo = Arc::new(PlaytimeRepository::new(pool.clone()));
    let bath_repo = Arc::new(BathRepository::new(pool.clone()));
    let photo_repo = Arc::new(PhotoRepository::new(pool.clone()));
    let video_repo = Arc::new(VideoRepository::new(pool.clone()));
    let lookups = Arc::new(LookupRepository::new(pool.clone()));

    let babies = Arc::new(BabyService::new(
        baby_repo.clone(),
        nursing_repo.clone(),
        formula_repo.clone(),
    ));
    let feeding = Arc::new(FeedingService::new(
        nursing_repo.clone(),
        formula_repo.clone(),
        pumping_repo,
        solids_repo,
    ));
    let health = Arc::new(HealthService::new(
        sleep_repo.clone(),
        diaper_repo.clone(),
        weight_repo.clone(),
        height_repo.clone(),
        head_repo,
        temperature_repo.clone(),
    ));
    let activity = Arc::new(ActivityService::new(
        playtime_repo,
        bath_repo,
        photo_repo.clone(),
        video_repo.clone(),
    ));
    let analytics = Arc::new(AnalyticsService::new(
        nursing_repo.clone(),
        formula_repo.clone(),
        weight_repo.clone(),
        height_repo.clone(),
        temperature_repo.clone(),
    ));
    let export = Arc::new(ExportService::new(
        baby_repo,
        nursing_repo,
        formula_repo,
        sleep_repo,
        diaper_repo,
        weight_repo,
        height_repo,
        temperature_repo,
        photo_repo,
        video_repo,
    ));

    Ok(AppContext {
        pool,
        babies,
        feeding,
        health,
        activity,
        analytics,
        export,
        lookups,
    })
}
