//! Format-specific writers for export tables.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use rust_xlsxwriter::{Format, Workbook};

use crate::babies::BabyProfile;
use crate::errors::ExportError;
use crate::export::export_model::CategoryTable;

/// Writes one workbook: a profile sheet plus one sheet per category.
pub fn write_workbook(
    path: &Path,
    profile: &BabyProfile,
    tables: &[CategoryTable],
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Profile")?;
    let profile_rows = profile_lines(profile);
    for (row, (field, value)) in profile_rows.iter().enumerate() {
        sheet.write_string_with_format(row as u32, 0, *field, &bold)?;
        sheet.write_string(row as u32, 1, value)?;
    }

    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&table.title)?;
        for (col, header) in table.headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }
        for (row, cells) in table.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet.write_string(row as u32 + 1, col as u16, cell)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Writes a profile file plus one CSV file per category, named
/// `<stem>-<category>.csv`.
///
/// If any file fails, the files written so far are removed so a failed
/// export leaves nothing behind.
pub fn write_csv_files(
    dir: &Path,
    stem: &str,
    profile: &BabyProfile,
    tables: &[CategoryTable],
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written: Vec<PathBuf> = Vec::new();

    let profile_table = CategoryTable {
        title: "Profile".to_string(),
        headers: vec!["Field", "Value"],
        rows: profile_lines(profile)
            .into_iter()
            .map(|(field, value)| vec![field.to_string(), value])
            .collect(),
    };
    let profile_path = dir.join(format!("{}-profile.csv", stem));
    if let Err(err) = write_csv_table(&profile_path, &profile_table) {
        fs::remove_file(&profile_path).ok();
        return Err(err);
    }
    written.push(profile_path);

    for table in tables {
        let path = dir.join(format!("{}-{}.csv", stem, table.title.to_lowercase()));
        if let Err(err) = write_csv_table(&path, table) {
            fs::remove_file(&path).ok();
            for earlier in &written {
                fs::remove_file(earlier).ok();
            }
            return Err(err);
        }
        written.push(path);
    }
    Ok(written)
}

fn write_csv_table(path: &Path, table: &CategoryTable) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LEFT_X: f32 = 15.0;
const TOP_Y: f32 = 282.0;
const BOTTOM_Y: f32 = 18.0;
const LINE_STEP: f32 = 5.0;

struct PdfCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PdfCursor<'_> {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < BOTTOM_Y {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "report");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
        self.layer.use_text(text, size, Mm(LEFT_X), Mm(self.y), font);
        self.y -= LINE_STEP;
    }

    fn gap(&mut self) {
        self.y -= LINE_STEP;
    }
}

/// Writes a single paginated A4 report.
pub fn write_pdf(
    path: &Path,
    profile: &BabyProfile,
    tables: &[CategoryTable],
) -> Result<(), ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("{} report", profile.name),
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "report",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    {
        let mut cursor = PdfCursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: TOP_Y,
        };

        cursor.line(&format!("{} report", profile.name), 16.0, &bold);
        cursor.gap();
        for (field, value) in profile_lines(profile) {
            cursor.line(&format!("{}: {}", field, value), 10.0, &font);
        }

        for table in tables {
            cursor.gap();
            cursor.line(&table.title, 12.0, &bold);
            cursor.line(&table.headers.join("  |  "), 9.0, &bold);
            for row in &table.rows {
                cursor.line(&row.join("  |  "), 9.0, &font);
            }
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;
    Ok(())
}

fn pdf_err(err: printpdf::Error) -> ExportError {
    ExportError::Writer(err.to_string())
}

fn profile_lines(profile: &BabyProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Name", profile.name.clone()),
        ("Gender", profile.gender_label.clone()),
        ("Birth date", profile.birth_date.to_string()),
        ("Age (days)", profile.age_days.to_string()),
        ("Age (weeks)", profile.age_weeks.to_string()),
        ("Age (months)", profile.age_months.to_string()),
    ]
}
