//! Export request and result models.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ExportError;
use crate::utils::time_utils::TimeWindow;

/// Output format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "xlsx" | "excel" | "workbook" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// What to export, for which baby, over which window.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub baby_id: String,
    pub window: TimeWindow,
    pub format: ExportFormat,
    pub include_feeding: bool,
    pub include_sleep: bool,
    pub include_diaper: bool,
    pub include_growth: bool,
    pub include_temperature: bool,
    pub include_media: bool,
    /// File name without extension; derived from the baby name when absent.
    pub file_stem: Option<String>,
    pub out_dir: PathBuf,
}

impl ExportRequest {
    pub fn all_categories(
        baby_id: &str,
        window: TimeWindow,
        format: ExportFormat,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            baby_id: baby_id.to_string(),
            window,
            format,
            include_feeding: true,
            include_sleep: true,
            include_diaper: true,
            include_growth: true,
            include_temperature: true,
            include_media: true,
            file_stem: None,
            out_dir,
        }
    }
}

/// One rendered category: a title, a header row, and data rows.
///
/// Categories with no records in the window are not rendered at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// What an export produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub total_bytes: u64,
    /// Event rows written, across all categories.
    pub record_count: usize,
}
