//! Exception list import from spreadsheet exports.
//!
//! Accepts a two-column file whose first line is a header: the date as
//! `D/M/YYYY` and the label. Tab-separated files are the default; the file
//! is read as comma-separated when its first data line contains a comma and
//! no tab.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::ExceptionDate;

/// Picks the field delimiter from the first data line.
fn detect_delimiter(text: &str) -> u8 {
    match text.split('\n').nth(1).map(str::trim) {
        Some(line) if line.contains(',') && !line.contains('\t') => b',',
        _ => b'\t',
    }
}

/// Parses a `D/M/YYYY` date. Day and month may omit the leading zero.
fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/').map(str::trim);
    let day = parts.next()?.parse::<u32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses an exception list from CSV or TSV text.
///
/// The first line is always treated as a header. Text with fewer than two
/// lines yields an empty list. Blank lines and lines with fewer than two
/// fields are skipped, as are lines whose date cannot be read (with a
/// warning). Columns past the second are ignored. Quote characters carry no
/// meaning: every line is one record.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCsv`] when the text cannot be tokenized.
///
/// # Example
///
/// ```
/// use attendance_engine::import::parse_exception_csv;
/// use chrono::NaiveDate;
///
/// let text = "Fecha,Tipo\n18/11/2024,Día festivo\n1/1/2025,Vacaciones\n";
/// let exceptions = parse_exception_csv(text).unwrap();
///
/// assert_eq!(exceptions.len(), 2);
/// assert_eq!(exceptions[0].date, NaiveDate::from_ymd_opt(2024, 11, 18).unwrap());
/// assert_eq!(exceptions[1].label, "Vacaciones");
/// ```
pub fn parse_exception_csv(text: &str) -> EngineResult<Vec<ExceptionDate>> {
    if text.split('\n').count() < 2 {
        return Ok(Vec::new());
    }

    let delimiter = detect_delimiter(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut exceptions = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| EngineError::InvalidCsv {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let (Some(raw_date), Some(label)) = (record.get(0), record.get(1)) else {
            continue;
        };
        if raw_date.is_empty() && label.is_empty() {
            continue;
        }

        match parse_day_month_year(raw_date) {
            Some(date) => exceptions.push(ExceptionDate::new(date, label)),
            None => warn!(line, value = raw_date, "Skipping exception with unreadable date"),
        }
    }

    debug!(
        delimiter = %char::from(delimiter).escape_default(),
        count = exceptions.len(),
        "Parsed exception list"
    );

    Ok(exceptions)
}
