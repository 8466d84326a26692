//! Exception date model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date marked as non-working (holiday, vacation, leave).
///
/// The label replaces the entrance and exit times on the attendance sheet.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ExceptionDate;
/// use chrono::NaiveDate;
///
/// let holiday = ExceptionDate::new(
///     NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
///     "Día festivo",
/// );
/// assert_eq!(holiday.label, "Día festivo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionDate {
    /// The non-working date.
    pub date: NaiveDate,
    /// Free text shown instead of the attendance times.
    pub label: String,
}

impl ExceptionDate {
    /// Creates an exception for a date.
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

/// Finds the exception registered for a date, if any.
///
/// When a list holds the same date twice the first entry wins.
pub fn find_exception(exceptions: &[ExceptionDate], date: NaiveDate) -> Option<&ExceptionDate> {
    exceptions.iter().find(|exception| exception.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_find_exception_matches_date() {
        let exceptions = vec![
            ExceptionDate::new(make_date("2024-11-11"), "Día festivo"),
            ExceptionDate::new(make_date("2024-11-20"), "Vacaciones"),
        ];

        let found = find_exception(&exceptions, make_date("2024-11-20")).unwrap();
        assert_eq!(found.label, "Vacaciones");
        assert!(find_exception(&exceptions, make_date("2024-11-12")).is_none());
    }

    #[test]
    fn test_find_exception_first_entry_wins() {
        let exceptions = vec![
            ExceptionDate::new(make_date("2024-11-11"), "Primero"),
            ExceptionDate::new(make_date("2024-11-11"), "Segundo"),
        ];

        let found = find_exception(&exceptions, make_date("2024-11-11")).unwrap();
        assert_eq!(found.label, "Primero");
    }

    #[test]
    fn test_exception_serialization() {
        let exception = ExceptionDate::new(make_date("2024-12-25"), "Navidad");
        let json = serde_json::to_string(&exception).unwrap();
        assert_eq!(json, r#"{"date":"2024-12-25","label":"Navidad"}"#);
    }
}
