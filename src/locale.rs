//! Spanish date formatting for report labels.
//!
//! Report templates print dates in Spanish: long dates such as
//! `"04 de noviembre de 2024"`, split `DD`/`MM`/`YY` fields and a capitalized
//! month name. Only Spanish is supported.

use chrono::{Datelike, NaiveDate};

/// Lowercase Spanish month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Returns the lowercase Spanish name of the date's month.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Returns the Spanish month name with its first letter uppercased.
///
/// # Example
///
/// ```
/// use attendance_engine::locale::month_name_capitalized;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
/// assert_eq!(month_name_capitalized(date), "Noviembre");
/// ```
pub fn month_name_capitalized(date: NaiveDate) -> String {
    let name = month_name(date);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a date as `DD de <mes> de YYYY`.
///
/// # Example
///
/// ```
/// use attendance_engine::locale::format_long_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
/// assert_eq!(format_long_date(date), "04 de noviembre de 2024");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{:02} de {} de {}", date.day(), month_name(date), date.year())
}

/// A date split into the two-digit fields printed in report boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortDateParts {
    /// Two-digit day.
    pub day: String,
    /// Two-digit month.
    pub month: String,
    /// Two-digit year.
    pub year: String,
}

/// Splits a date into `DD`, `MM` and `YY` text.
pub fn short_date_parts(date: NaiveDate) -> ShortDateParts {
    ShortDateParts {
        day: date.format("%d").to_string(),
        month: date.format("%m").to_string(),
        year: date.format("%y").to_string(),
    }
}

/// Formats a date as `DD/MM/YY`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Formats a date as `DD/MM/YYYY`, as printed in attendance rows.
pub fn format_numeric_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
