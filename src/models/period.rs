//! Reporting period model.
//!
//! This module contains the [`Period`] type produced by the partitioner and
//! consumed read-only by the attendance synthesizer and report assembler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One contiguous sub-range of the service date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period {
///     index: 1,
///     start_date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The 1-based position of the period (1..7).
    pub index: u8,
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl Period {
    /// Creates a period.
    pub fn new(index: u8, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            index,
            start_date,
            end_date,
        }
    }

    /// Checks if a date falls within the period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days covered by the period.
    pub fn calendar_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
