//! Report assembly.
//!
//! This module composes the partitioner, the attendance synthesizer and the
//! locale formatting into the [`Report`] records handed to document
//! generation. The whole collection is rebuilt from a [`CoreInput`]
//! snapshot every time; there is no partial regeneration.

use crate::config::PartitionRules;
use crate::locale::{format_long_date, month_name_capitalized, short_date_parts};
use crate::models::{
    CoreInput, ExceptionDate, IdentitySnapshot, Period, PeriodLabels, Report, WeekdaySchedule,
};

use super::attendance::synthesize_attendance;
use super::partition::partition_input;

/// Returns the exceptions whose date lies within the period, weekends
/// included, in input order.
pub fn exceptions_in_period(period: &Period, exceptions: &[ExceptionDate]) -> Vec<ExceptionDate> {
    exceptions
        .iter()
        .filter(|exception| period.contains_date(exception.date))
        .cloned()
        .collect()
}

/// Formats the period bounds for the report templates.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::period_labels;
/// use attendance_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     2,
///     NaiveDate::from_ymd_opt(2024, 12, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
/// );
/// let labels = period_labels(&period);
///
/// assert_eq!(labels.start_long, "16 de diciembre de 2024");
/// assert_eq!(labels.end_year, "25");
/// assert_eq!(labels.month_name, "Diciembre");
/// ```
pub fn period_labels(period: &Period) -> PeriodLabels {
    let start = short_date_parts(period.start_date);
    let end = short_date_parts(period.end_date);

    PeriodLabels {
        start_long: format_long_date(period.start_date),
        end_long: format_long_date(period.end_date),
        start_day: start.day,
        start_month: start.month,
        start_year: start.year,
        end_day: end.day,
        end_month: end.month,
        end_year: end.year,
        month_name: month_name_capitalized(period.start_date),
    }
}

/// Assembles the report for a single period.
pub fn assemble_report(
    period: &Period,
    schedule: &WeekdaySchedule,
    exceptions: &[ExceptionDate],
    identity: &IdentitySnapshot,
) -> Report {
    Report {
        id: Report::id_for(period.index),
        period: *period,
        labels: period_labels(period),
        identity: identity.clone(),
        attendance: synthesize_attendance(period, schedule, exceptions),
        exceptions_in_period: exceptions_in_period(period, exceptions),
        delivery_date_long: identity.delivery_date.map(format_long_date),
    }
}

/// Builds one report per period of the input's service range.
///
/// Missing or inverted service dates yield an empty collection.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::assemble_reports;
/// use attendance_engine::config::PartitionRules;
/// use attendance_engine::models::{CoreInput, IdentitySnapshot};
/// use chrono::NaiveDate;
///
/// let input = CoreInput {
///     service_start: NaiveDate::from_ymd_opt(2024, 11, 15),
///     service_end: NaiveDate::from_ymd_opt(2025, 6, 15),
///     ..CoreInput::default()
/// };
/// let reports = assemble_reports(&input, &IdentitySnapshot::default(), &PartitionRules::default());
///
/// assert_eq!(reports.len(), 7);
/// assert_eq!(reports[0].id, "report-1");
/// ```
pub fn assemble_reports(
    input: &CoreInput,
    identity: &IdentitySnapshot,
    rules: &PartitionRules,
) -> Vec<Report> {
    partition_input(input, rules)
        .iter()
        .map(|period| {
            assemble_report(period, &input.weekday_schedule, &input.exceptions, identity)
        })
        .collect()
}
