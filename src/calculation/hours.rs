//! Worked-hour totals.
//!
//! Totals are derived from report attendance on demand and never stored on
//! the report itself.

use rust_decimal::Decimal;

use crate::models::Report;

/// Sums the hours worked over a report's non-exception days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{assemble_reports, period_hours};
/// use attendance_engine::config::PartitionRules;
/// use attendance_engine::models::{CoreInput, IdentitySnapshot};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CoreInput {
///     service_start: NaiveDate::from_ymd_opt(2024, 11, 4),
///     service_end: NaiveDate::from_ymd_opt(2024, 11, 30),
///     ..CoreInput::default()
/// };
/// let reports = assemble_reports(&input, &IdentitySnapshot::default(), &PartitionRules::default());
///
/// assert_eq!(period_hours(&reports[0]), Decimal::new(76, 0));
/// ```
pub fn period_hours(report: &Report) -> Decimal {
    report
        .worked_days()
        .map(|day| day.hours_worked)
        .sum::<Decimal>()
        .normalize()
}

/// Sums [`period_hours`] over the reports indexed `1..=upto`.
///
/// Reports are looked up by period index, not by position; an index with
/// no report contributes nothing.
pub fn cumulative_hours(reports: &[Report], upto: u8) -> Decimal {
    (1..=upto)
        .filter_map(|index| reports.iter().find(|report| report.period.index == index))
        .map(period_hours)
        .sum::<Decimal>()
        .normalize()
}

/// Sums [`period_hours`] over every report.
pub fn total_hours(reports: &[Report]) -> Decimal {
    reports.iter().map(period_hours).sum::<Decimal>().normalize()
}
