mod context;
mod demo;
mod migrate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use nestling_core::export::{ExportFormat, ExportRequest};
use nestling_core::utils::TimeWindow;
use nestling_storage_sqlite::db;

use context::{build_context, default_data_dir};

#[derive(Parser)]
#[command(name = "nestling", about = "Baby activity tracker", version)]
struct Cli {
    /// Directory the database lives in (defaults to NESTLING_DATA_DIR or ./data/)
    #[arg(long, global = true)]
    db_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, run migrations, and seed the lookup tables
    Init {
        /// Delete any existing database file first
        #[arg(long)]
        reset: bool,
        /// Leave the lookup tables empty
        #[arg(long)]
        skip_lookups: bool,
    },
    /// Seed a demonstration baby with a few days of events
    Demo,
    /// Import records from a legacy baby-tracker database
    Migrate {
        /// Path to the old SQLite file
        #[arg(long)]
        source: PathBuf,
    },
    /// Export one baby's records to xlsx, csv, or pdf
    Export {
        /// Baby id
        #[arg(long)]
        baby: String,
        /// Output format: xlsx, csv, or pdf
        #[arg(long)]
        format: String,
        /// How many days back to include
        #[arg(long, default_value_t = 30)]
        days: i64,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// File name without extension
        #[arg(long)]
        stem: Option<String>,
        #[arg(long)]
        no_feeding: bool,
        #[arg(long)]
        no_sleep: bool,
        #[arg(long)]
        no_diaper: bool,
        #[arg(long)]
        no_growth: bool,
        #[arg(long)]
        no_temperature: bool,
        #[arg(long)]
        no_media: bool,
    },
    /// Print the feeding analysis and growth summary for one baby
    Stats {
        /// Baby id
        #[arg(long)]
        baby: String,
        /// How many days back to analyze
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.db_path.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::Init { reset, skip_lookups } => {
            if reset {
                let db_file = db::get_db_path(&data_dir);
                for path in [
                    db_file.clone(),
                    format!("{db_file}-wal"),
                    format!("{db_file}-shm"),
                ] {
                    if std::path::Path::new(&path).exists() {
                        std::fs::remove_file(&path)?;
                        tracing::info!("Removed {}", path);
                    }
                }
            }
            let ctx = build_context(&data_dir)?;
            if !skip_lookups {
                nestling_storage_sqlite::lookup::seed_lookups(&ctx.lookups)?;
            }
            println!("Database ready at {}", db::get_db_path(&data_dir));
        }
        Commands::Demo => {
            let ctx = build_context(&data_dir)?;
            nestling_storage_sqlite::lookup::seed_lookups(&ctx.lookups)?;
            let baby_id = demo::run(&ctx)?;
            println!("Seeded demo baby {baby_id}");
        }
        Commands::Migrate { source } => {
            let ctx = build_context(&data_dir)?;
            let report = migrate::run(&source, ctx.pool.clone())?;
            for (label, counts) in &report.categories {
                println!(
                    "{label}: {} migrated, {} failed, {} total",
                    counts.migrated, counts.failed, counts.total
                );
            }
            println!(
                "Done: {} rows migrated, {} failed",
                report.migrated(),
                report.failed()
            );
        }
        Commands::Export {
            baby,
            format,
            days,
            out,
            stem,
            no_feeding,
            no_sleep,
            no_diaper,
            no_growth,
            no_temperature,
            no_media,
        } => {
            let format: ExportFormat = format.parse()?;
            let ctx = build_context(&data_dir)?;
            let mut request =
                ExportRequest::all_categories(&baby, TimeWindow::last_days(days), format, out);
            request.file_stem = stem;
            request.include_feeding = !no_feeding;
            request.include_sleep = !no_sleep;
            request.include_diaper = !no_diaper;
            request.include_growth = !no_growth;
            request.include_temperature = !no_temperature;
            request.include_media = !no_media;

            let summary = ctx.export.export(&request)?;
            println!(
                "Exported {} records ({} bytes) into:",
                summary.record_count, summary.total_bytes
            );
            for file in &summary.files {
                println!("  {}", file.display());
            }
        }
        Commands::Stats { baby, days } => {
            let ctx = build_context(&data_dir)?;
            let window = TimeWindow::last_days(days);

            let analysis = ctx.analytics.feeding_analysis(&baby, &window)?;
            println!("Feeding over the last {days} day(s):");
            println!(
                "  {} sessions ({} nursing, {} formula), {:.1}/day",
                analysis.total_sessions,
                analysis.nursing_sessions,
                analysis.formula_sessions,
                analysis.daily_average_sessions
            );
            println!(
                "  nursing {:.0}%, formula {:.0}%",
                analysis.nursing_percentage, analysis.formula_percentage
            );
            if !analysis.peak_feeding_hours.is_empty() {
                let peaks: Vec<String> = analysis
                    .peak_feeding_hours
                    .iter()
                    .map(|p| format!("{:02}:00 ({})", p.hour, p.sessions))
                    .collect();
                println!("  peak hours: {}", peaks.join(", "));
            }

            let growth = ctx.health.growth_summary(&baby)?;
            println!("Growth:");
            match growth.latest_weight_grams {
                Some(grams) => println!(
                    "  weight {:.0} g, trend {}",
                    grams,
                    growth.weight_trend.label()
                ),
                None => println!("  no weight records"),
            }
            match growth.latest_height_cm {
                Some(cm) => println!(
                    "  height {:.1} cm, trend {}",
                    cm,
                    growth.height_trend.label()
                ),
                None => println!("  no height records"),
            }
            if let Some(cm) = growth.latest_head_cm {
                println!("  head {:.1} cm", cm);
            }
        }
    }

    Ok(())
}
