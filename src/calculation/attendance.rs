//! Attendance synthesis.
//!
//! Expands a [`Period`] into one [`AttendanceDay`] per business day, taking
//! times from the weekday schedule or the label of a matching exception.

use crate::models::{AttendanceDay, ExceptionDate, Period, WeekdaySchedule, find_exception};

use super::calendar::{business_days_in_range, duration_hours};

/// Builds the attendance list for a period.
///
/// Days are ascending and there is exactly one entry per business day in
/// `[period.start_date, period.end_date]`. Exceptions falling on weekends
/// never add a row.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::synthesize_attendance;
/// use attendance_engine::models::{ExceptionDate, Period, WeekdaySchedule};
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     1,
///     NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
/// );
/// let holiday = ExceptionDate::new(NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(), "Día festivo");
///
/// let days = synthesize_attendance(&period, &WeekdaySchedule::default(), &[holiday]);
/// assert_eq!(days.len(), 19);
/// assert_eq!(days.iter().filter(|d| d.is_exception).count(), 1);
/// ```
pub fn synthesize_attendance(
    period: &Period,
    schedule: &WeekdaySchedule,
    exceptions: &[ExceptionDate],
) -> Vec<AttendanceDay> {
    business_days_in_range(period.start_date, period.end_date)
        .map(|date| match find_exception(exceptions, date) {
            Some(exception) => AttendanceDay::exception(exception),
            None => {
                let slot = schedule.slot_for_date(date);
                AttendanceDay::worked(date, slot, duration_hours(&slot.entrance, &slot.exit))
            }
        })
        .collect()
}
