//! Period partitioning logic.
//!
//! This module splits a service date range into at most `max_periods`
//! reporting periods. The start day-of-month selects one of two regimes:
//!
//! - [`Regime::EarlyStart`]: periods follow calendar months.
//! - [`Regime::MidMonthStart`]: periods run from the day after the mid-month
//!   boundary to the boundary day of the following month.
//!
//! In both regimes each period end is clamped to the service end, and the
//! last allowed period always absorbs whatever remains of the range.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PartitionRules;
use crate::models::{CoreInput, Period};

use super::calendar::{add_one_month, first_day_of_month, last_day_of_month, with_day_clamped};

/// The partitioning scheme chosen from the service start day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Start day at or before the cutoff: calendar-month periods.
    EarlyStart,
    /// Start day after the cutoff: mid-month to mid-month periods.
    MidMonthStart,
}

impl Regime {
    /// Selects the regime for a service start date.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::Regime;
    /// use attendance_engine::config::PartitionRules;
    /// use chrono::NaiveDate;
    ///
    /// let rules = PartitionRules::default();
    /// let early = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();
    /// let mid = NaiveDate::from_ymd_opt(2024, 11, 11).unwrap();
    ///
    /// assert_eq!(Regime::for_start(early, &rules), Regime::EarlyStart);
    /// assert_eq!(Regime::for_start(mid, &rules), Regime::MidMonthStart);
    /// ```
    pub fn for_start(start: NaiveDate, rules: &PartitionRules) -> Self {
        if start.day() <= rules.early_start_cutoff_day {
            Regime::EarlyStart
        } else {
            Regime::MidMonthStart
        }
    }
}

/// Computes the natural bounds of period `index` before clamping.
fn natural_bounds(
    regime: Regime,
    index: u8,
    start: NaiveDate,
    cursor: NaiveDate,
    rules: &PartitionRules,
) -> (NaiveDate, NaiveDate) {
    let boundary = rules.mid_month_boundary_day;
    match (regime, index) {
        (Regime::EarlyStart, 1) => (start, last_day_of_month(start)),
        (Regime::EarlyStart, _) => (first_day_of_month(cursor), last_day_of_month(cursor)),
        (Regime::MidMonthStart, 1) => (start, with_day_clamped(add_one_month(start), boundary)),
        (Regime::MidMonthStart, _) => (
            with_day_clamped(cursor, boundary + 1),
            with_day_clamped(add_one_month(cursor), boundary),
        ),
    }
}

/// Moves the cursor to the month of the next period.
fn advance_cursor(regime: Regime, next_index: u8, start: NaiveDate, cursor: NaiveDate) -> NaiveDate {
    match regime {
        Regime::EarlyStart => add_one_month(first_day_of_month(cursor)),
        // Period 2 is anchored on the start date, later ones on the cursor.
        Regime::MidMonthStart if next_index == 2 => add_one_month(start),
        Regime::MidMonthStart => add_one_month(cursor),
    }
}

/// Splits `[start, end]` into reporting periods.
///
/// Returns an empty list when `start > end`. Otherwise the periods are
/// contiguous, ascending, indexed from 1, never more than
/// `rules.max_periods`, and together cover exactly `[start, end]`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::partition_periods;
/// use attendance_engine::config::PartitionRules;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let periods = partition_periods(start, end, &PartitionRules::default());
///
/// assert_eq!(periods.len(), 7);
/// assert_eq!(periods[0].end_date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
/// assert_eq!(periods[1].start_date, NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
/// assert_eq!(periods[6].end_date, end);
/// ```
pub fn partition_periods(start: NaiveDate, end: NaiveDate, rules: &PartitionRules) -> Vec<Period> {
    if start > end || rules.max_periods == 0 {
        return Vec::new();
    }

    let regime = Regime::for_start(start, rules);
    let mut periods: Vec<Period> = Vec::with_capacity(rules.max_periods as usize);
    let mut cursor = start;
    let mut index: u8 = 1;

    while cursor <= end {
        let (period_start, natural_end) = natural_bounds(regime, index, start, cursor, rules);

        // A cursor can sit before the end while the period it opens starts after it.
        if period_start > end {
            break;
        }

        let period_end = if index == rules.max_periods {
            end
        } else {
            natural_end.min(end)
        };

        periods.push(Period::new(index, period_start, period_end));

        if index >= rules.max_periods {
            break;
        }

        index += 1;
        cursor = advance_cursor(regime, index, start, cursor);
    }

    // Close any gap the month arithmetic left before the service end.
    if let Some(last) = periods.last().copied() {
        if last.end_date < end && (periods.len() as u8) < rules.max_periods {
            if let Some(tail_start) = last.end_date.succ_opt() {
                periods.push(Period::new(last.index + 1, tail_start, end));
            }
        }
    }

    debug!(
        start = %start,
        end = %end,
        regime = ?regime,
        period_count = periods.len(),
        "Partitioned service range"
    );

    periods
}

/// Partitions the service range of an input snapshot.
///
/// Missing service dates yield no periods.
pub fn partition_input(input: &CoreInput, rules: &PartitionRules) -> Vec<Period> {
    match input.service_range() {
        Some((start, end)) => partition_periods(start, end, rules),
        None => Vec::new(),
    }
}
