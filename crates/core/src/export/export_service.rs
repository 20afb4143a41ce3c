//! Assembles category tables for a baby and hands them to a format writer.

use std::fs;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use log::info;

use crate::activity::{NewPhoto, NewVideo, Photo, Video};
use crate::babies::{BabyProfile, BabyRepositoryTrait};
use crate::errors::{DatabaseError, ExportError, Result};
use crate::events::EventRepositoryTrait;
use crate::export::export_model::{CategoryTable, ExportFormat, ExportRequest, ExportSummary};
use crate::export::writers;
use crate::feeding::{Formula, NewFormula, NewNursing, Nursing};
use crate::health::{
    Diaper, Height, NewDiaper, NewHeight, NewSleep, NewTemperature, NewWeight, Sleep, Temperature,
    Weight,
};
use crate::utils::time_utils::local_date;

pub struct ExportService {
    babies: Arc<dyn BabyRepositoryTrait>,
    nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
    formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
    sleep: Arc<dyn EventRepositoryTrait<Sleep, NewSleep>>,
    diapers: Arc<dyn EventRepositoryTrait<Diaper, NewDiaper>>,
    weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
    heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
    temperatures: Arc<dyn EventRepositoryTrait<Temperature, NewTemperature>>,
    photos: Arc<dyn EventRepositoryTrait<Photo, NewPhoto>>,
    videos: Arc<dyn EventRepositoryTrait<Video, NewVideo>>,
}

impl ExportService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        babies: Arc<dyn BabyRepositoryTrait>,
        nursing: Arc<dyn EventRepositoryTrait<Nursing, NewNursing>>,
        formula: Arc<dyn EventRepositoryTrait<Formula, NewFormula>>,
        sleep: Arc<dyn EventRepositoryTrait<Sleep, NewSleep>>,
        diapers: Arc<dyn EventRepositoryTrait<Diaper, NewDiaper>>,
        weights: Arc<dyn EventRepositoryTrait<Weight, NewWeight>>,
        heights: Arc<dyn EventRepositoryTrait<Height, NewHeight>>,
        temperatures: Arc<dyn EventRepositoryTrait<Temperature, NewTemperature>>,
        photos: Arc<dyn EventRepositoryTrait<Photo, NewPhoto>>,
        videos: Arc<dyn EventRepositoryTrait<Video, NewVideo>>,
    ) -> Self {
        Self {
            babies,
            nursing,
            formula,
            sleep,
            diapers,
            weights,
            heights,
            temperatures,
            photos,
            videos,
        }
    }

    /// Runs an export end to end.
    ///
    /// The baby is resolved before any file is created, so a missing baby
    /// leaves the output directory untouched.
    pub fn export(&self, request: &ExportRequest) -> Result<ExportSummary> {
        let baby = self
            .babies
            .get(&request.baby_id)?
            .ok_or_else(|| DatabaseError::NotFound(format!("baby {}", request.baby_id)))?;
        let profile = BabyProfile::from(&baby);

        let tables = self.collect_tables(request)?;
        let record_count: usize = tables.iter().map(|t| t.rows.len()).sum();

        fs::create_dir_all(&request.out_dir).map_err(ExportError::from)?;
        let stem = request
            .file_stem
            .clone()
            .unwrap_or_else(|| default_stem(&baby.name, request.window.end));

        let files = match request.format {
            ExportFormat::Xlsx => {
                let path = request.out_dir.join(format!("{stem}.xlsx"));
                writers::write_workbook(&path, &profile, &tables)?;
                vec![path]
            }
            ExportFormat::Csv => {
                writers::write_csv_files(&request.out_dir, &stem, &profile, &tables)?
            }
            ExportFormat::Pdf => {
                let path = request.out_dir.join(format!("{stem}.pdf"));
                writers::write_pdf(&path, &profile, &tables)?;
                vec![path]
            }
        };

        let mut total_bytes = 0u64;
        for file in &files {
            total_bytes += fs::metadata(file).map_err(ExportError::from)?.len();
        }

        info!(
            "Exported {} records for '{}' into {} file(s)",
            record_count,
            baby.name,
            files.len()
        );

        Ok(ExportSummary {
            files,
            total_bytes,
            record_count,
        })
    }

    /// Builds the selected category tables, newest rows first.
    /// Categories with no records in the window are omitted.
    pub fn collect_tables(&self, request: &ExportRequest) -> Result<Vec<CategoryTable>> {
        let baby_id = &request.baby_id;
        let window = &request.window;
        let mut tables = Vec::new();

        if request.include_feeding {
            let mut rows: Vec<(DateTime<Utc>, Vec<String>)> = Vec::new();
            for record in self.nursing.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        time_cell(record.event_time),
                        "Nursing".to_string(),
                        format!(
                            "{} min, finished {}",
                            record.total_minutes(),
                            record.finish_side.label()
                        ),
                        note_cell(&record.note),
                    ],
                ));
            }
            for record in self.formula.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        time_cell(record.event_time),
                        "Formula".to_string(),
                        format!("{:.0} ml", record.amount_ml),
                        note_cell(&record.note),
                    ],
                ));
            }
            push_table(
                &mut tables,
                "Feeding",
                vec!["Date", "Time", "Kind", "Detail", "Note"],
                rows,
            );
        }

        if request.include_sleep {
            let rows = self
                .sleep
                .list_in_window(baby_id, window)?
                .into_iter()
                .map(|record| {
                    (
                        record.event_time,
                        vec![
                            date_cell(record.event_time),
                            time_cell(record.event_time),
                            record.minutes.to_string(),
                            note_cell(&record.note),
                        ],
                    )
                })
                .collect();
            push_table(
                &mut tables,
                "Sleep",
                vec!["Date", "Time", "Minutes", "Note"],
                rows,
            );
        }

        if request.include_diaper {
            let rows = self
                .diapers
                .list_in_window(baby_id, window)?
                .into_iter()
                .map(|record| {
                    (
                        record.event_time,
                        vec![
                            date_cell(record.event_time),
                            time_cell(record.event_time),
                            record.type_id.clone().unwrap_or_else(|| "unknown".to_string()),
                            note_cell(&record.note),
                        ],
                    )
                })
                .collect();
            push_table(
                &mut tables,
                "Diapers",
                vec!["Date", "Time", "Type", "Note"],
                rows,
            );
        }

        if request.include_growth {
            let mut rows: Vec<(DateTime<Utc>, Vec<String>)> = Vec::new();
            for record in self.weights.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        "Weight".to_string(),
                        format!("{:.0} g", record.grams),
                        note_cell(&record.note),
                    ],
                ));
            }
            for record in self.heights.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        "Height".to_string(),
                        format!("{:.1} cm", record.centimeters),
                        note_cell(&record.note),
                    ],
                ));
            }
            push_table(
                &mut tables,
                "Growth",
                vec!["Date", "Measurement", "Value", "Note"],
                rows,
            );
        }

        if request.include_temperature {
            let rows = self
                .temperatures
                .list_in_window(baby_id, window)?
                .into_iter()
                .map(|record| {
                    (
                        record.event_time,
                        vec![
                            date_cell(record.event_time),
                            time_cell(record.event_time),
                            format!("{:.1}", record.celsius),
                            record.location.clone().unwrap_or_default(),
                            if record.is_fever() { "yes" } else { "no" }.to_string(),
                            note_cell(&record.note),
                        ],
                    )
                })
                .collect();
            push_table(
                &mut tables,
                "Temperature",
                vec!["Date", "Time", "Celsius", "Location", "Fever", "Note"],
                rows,
            );
        }

        if request.include_media {
            let mut rows: Vec<(DateTime<Utc>, Vec<String>)> = Vec::new();
            for record in self.photos.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        "Photo".to_string(),
                        record.file_path.clone(),
                        String::new(),
                        record.caption.clone().unwrap_or_default(),
                        note_cell(&record.note),
                    ],
                ));
            }
            for record in self.videos.list_in_window(baby_id, window)? {
                rows.push((
                    record.event_time,
                    vec![
                        date_cell(record.event_time),
                        "Video".to_string(),
                        record.file_path.clone(),
                        record.seconds.to_string(),
                        record.caption.clone().unwrap_or_default(),
                        note_cell(&record.note),
                    ],
                ));
            }
            push_table(
                &mut tables,
                "Media",
                vec!["Date", "Kind", "File", "Seconds", "Caption", "Note"],
                rows,
            );
        }

        Ok(tables)
    }
}

fn push_table(
    tables: &mut Vec<CategoryTable>,
    title: &str,
    headers: Vec<&'static str>,
    mut rows: Vec<(DateTime<Utc>, Vec<String>)>,
) {
    if rows.is_empty() {
        return;
    }
    rows.sort_by_key(|(time, _)| std::cmp::Reverse(*time));
    tables.push(CategoryTable {
        title: title.to_string(),
        headers,
        rows: rows.into_iter().map(|(_, row)| row).collect(),
    });
}

fn date_cell(time: DateTime<Utc>) -> String {
    local_date(time).format("%Y-%m-%d").to_string()
}

fn time_cell(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}

fn note_cell(note: &Option<String>) -> String {
    note.clone().unwrap_or_default()
}

fn default_stem(baby_name: &str, window_end: DateTime<Utc>) -> String {
    let slug: String = baby_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}", slug, local_date(window_end).format("%Y%m%d"))
}
