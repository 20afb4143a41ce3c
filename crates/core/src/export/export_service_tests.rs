use std::fs;

use chrono::{Duration, Utc};
use tempfile::TempDir;

use super::export_model::{ExportFormat, ExportRequest};
use super::export_service::ExportService;
use crate::testing::{
    make_baby, make_diaper, make_formula, make_nursing, make_sleep, make_temperature,
    make_weight, MockBabyRepo, MockDiaperRepo, MockFormulaRepo, MockHeightRepo, MockNursingRepo,
    MockPhotoRepo, MockSleepRepo, MockTemperatureRepo, MockVideoRepo, MockWeightRepo,
};
use crate::utils::time_utils::TimeWindow;

fn seeded_service() -> ExportService {
    let now = Utc::now();
    let baby = make_baby("b1", "Nora", now - Duration::days(120));
    ExportService::new(
        MockBabyRepo::new(vec![baby]),
        MockNursingRepo::new(vec![
            make_nursing("n1", "b1", now - Duration::hours(20), 15),
            make_nursing("n2", "b1", now - Duration::hours(4), 10),
        ]),
        MockFormulaRepo::new(vec![make_formula("f1", "b1", now - Duration::hours(8), 90.0)]),
        MockSleepRepo::new(vec![make_sleep("s1", "b1", now - Duration::hours(10), 95)]),
        MockDiaperRepo::new(vec![make_diaper("d1", "b1", now - Duration::hours(6), "1")]),
        MockWeightRepo::new(vec![make_weight("w1", "b1", now - Duration::days(2), 5400.0)]),
        MockHeightRepo::empty(),
        MockTemperatureRepo::new(vec![make_temperature(
            "t1",
            "b1",
            now - Duration::hours(12),
            38.1,
        )]),
        MockPhotoRepo::empty(),
        MockVideoRepo::empty(),
    )
}

fn empty_service() -> ExportService {
    ExportService::new(
        MockBabyRepo::empty(),
        MockNursingRepo::empty(),
        MockFormulaRepo::empty(),
        MockSleepRepo::empty(),
        MockDiaperRepo::empty(),
        MockWeightRepo::empty(),
        MockHeightRepo::empty(),
        MockTemperatureRepo::empty(),
        MockPhotoRepo::empty(),
        MockVideoRepo::empty(),
    )
}

#[test]
fn collect_tables_omits_empty_categories() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Csv,
        dir.path().to_path_buf(),
    );

    let tables = service.collect_tables(&request).unwrap();
    let titles: Vec<&str> = tables.iter().map(|t| t.title.as_str()).collect();
    // No photos or videos were recorded, so no media table.
    assert_eq!(
        titles,
        vec!["Feeding", "Sleep", "Diapers", "Growth", "Temperature"]
    );

    let feeding = &tables[0];
    assert_eq!(feeding.rows.len(), 3);
    // Newest first.
    assert_eq!(feeding.rows[0][2], "Nursing");
    assert_eq!(feeding.rows[1][2], "Formula");
}

#[test]
fn deselected_categories_are_not_rendered() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let mut request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Csv,
        dir.path().to_path_buf(),
    );
    request.include_feeding = false;

    let tables = service.collect_tables(&request).unwrap();
    assert!(tables.iter().all(|t| t.title != "Feeding"));
}

#[test]
fn csv_export_writes_one_file_per_category() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let mut request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Csv,
        dir.path().to_path_buf(),
    );
    request.file_stem = Some("report".to_string());

    let summary = service.export(&request).unwrap();
    // Profile file plus the five non-empty categories.
    assert_eq!(summary.files.len(), 6);
    assert_eq!(summary.record_count, 7);
    assert!(summary.total_bytes > 0);
    assert!(dir.path().join("report-profile.csv").exists());
    assert!(dir.path().join("report-feeding.csv").exists());
    assert!(dir.path().join("report-sleep.csv").exists());

    let feeding = fs::read_to_string(dir.path().join("report-feeding.csv")).unwrap();
    assert!(feeding.starts_with("Date,Time,Kind,Detail,Note"));
    assert!(feeding.contains("Nursing"));
    assert!(feeding.contains("90 ml"));
}

#[test]
fn workbook_export_produces_a_single_file() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let mut request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Xlsx,
        dir.path().to_path_buf(),
    );
    request.file_stem = Some("report".to_string());

    let summary = service.export(&request).unwrap();
    assert_eq!(summary.files, vec![dir.path().join("report.xlsx")]);
    assert!(summary.total_bytes > 0);
    assert_eq!(summary.record_count, 7);
}

#[test]
fn pdf_export_produces_a_single_file() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let mut request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Pdf,
        dir.path().to_path_buf(),
    );
    request.file_stem = Some("report".to_string());

    let summary = service.export(&request).unwrap();
    assert_eq!(summary.files, vec![dir.path().join("report.pdf")]);
    assert!(summary.total_bytes > 0);
}

#[test]
fn export_of_missing_baby_writes_nothing() {
    let service = empty_service();
    let dir = TempDir::new().unwrap();
    let request = ExportRequest::all_categories(
        "ghost",
        TimeWindow::last_days(7),
        ExportFormat::Csv,
        dir.path().to_path_buf(),
    );

    assert!(service.export(&request).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn default_stem_derives_from_the_baby_name() {
    let service = seeded_service();
    let dir = TempDir::new().unwrap();
    let request = ExportRequest::all_categories(
        "b1",
        TimeWindow::last_days(7),
        ExportFormat::Xlsx,
        dir.path().to_path_buf(),
    );

    let summary = service.export(&request).unwrap();
    let name = summary.files[0].file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("nora-"));
    assert!(name.ends_with(".xlsx"));
}
