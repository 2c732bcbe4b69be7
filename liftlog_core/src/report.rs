//! CSV export of per-day totals.
//!
//! One row per training day, in log order, so parsed totals can feed
//! spreadsheets or other tooling without re-parsing the log text.

use crate::parse::DATE_FORMAT;
use crate::types::TrainingDay;
use crate::Result;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    calisthenics: bool,
    total: f64,
}

impl From<&TrainingDay> for CsvRow {
    fn from(day: &TrainingDay) -> Self {
        CsvRow {
            date: day.date.format(DATE_FORMAT).to_string(),
            calisthenics: day.calisthenics,
            total: day.total(),
        }
    }
}

/// Write one CSV row per training day to the given path
///
/// The parent directory is created if needed. Headers are written from
/// the row field names.
pub fn write_day_totals(days: &[TrainingDay], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for day in days {
        writer.serialize(CsvRow::from(day))?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} day totals to {:?}", days.len(), path);
    Ok(())
}
