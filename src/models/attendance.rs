//! Attendance day model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExceptionDate, TimeSlot};

/// One business day on an attendance sheet.
///
/// A worked day carries the schedule's entrance/exit text and the computed
/// duration. An exception day carries the exception label in both time
/// fields and zero hours. `is_exception` is the discriminator every
/// downstream consumer (hour totals, signature rows, document rendering)
/// must use; a worked day can also have zero hours when its times do not
/// parse or the exit precedes the entrance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The entrance time, or the exception label.
    pub entrance: String,
    /// The exit time, or the exception label.
    pub exit: String,
    /// Hours worked that day (always zero on exception days).
    pub hours_worked: Decimal,
    /// True when the date matched an exception.
    pub is_exception: bool,
}

impl AttendanceDay {
    /// Creates a worked day from a schedule slot and its computed duration.
    pub fn worked(date: NaiveDate, slot: &TimeSlot, hours_worked: Decimal) -> Self {
        Self {
            date,
            entrance: slot.entrance.clone(),
            exit: slot.exit.clone(),
            hours_worked,
            is_exception: false,
        }
    }

    /// Creates an exception day.
    pub fn exception(exception: &ExceptionDate) -> Self {
        Self {
            date: exception.date,
            entrance: exception.label.clone(),
            exit: exception.label.clone(),
            hours_worked: Decimal::ZERO,
            is_exception: true,
        }
    }

    /// Hours worked as display text, e.g. `"4"`, `"3.5"`, `"0"`.
    pub fn hours_display(&self) -> String {
        self.hours_worked.normalize().to_string()
    }
}
