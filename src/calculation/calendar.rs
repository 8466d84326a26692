//! Calendar utilities.
//!
//! This module provides the date primitives the partitioner and the
//! attendance synthesizer are built on: business-day classification, a lazy
//! business-day iterator, wall-clock durations and month arithmetic.

use chrono::{Datelike, Months, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;

/// Seconds in one hour, used to turn a time difference into hours.
const SECONDS_PER_HOUR: i64 = 3600;

/// Accepted wall-clock formats, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Checks whether a date falls on Monday through Friday.
///
/// Weekends are never business days, even when listed as exceptions.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_business_day;
/// use chrono::NaiveDate;
///
/// // 2024-11-08 is a Friday, 2024-11-09 a Saturday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2024, 11, 8).unwrap()));
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2024, 11, 9).unwrap()));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A lazy, ascending iterator over the business days of a date range.
///
/// A clone copies the current position, so a clone taken before iteration
/// replays the whole range.
#[derive(Debug, Clone)]
pub struct BusinessDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for BusinessDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.next {
            if current > self.end {
                self.next = None;
                return None;
            }
            self.next = current.succ_opt();
            if is_business_day(current) {
                return Some(current);
            }
        }
        None
    }
}

/// Returns the business days in `[start, end]`, in ascending order.
///
/// The range is empty when `start > end`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::business_days_in_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
/// assert_eq!(business_days_in_range(start, end).count(), 19);
/// ```
pub fn business_days_in_range(start: NaiveDate, end: NaiveDate) -> BusinessDays {
    BusinessDays {
        next: Some(start),
        end,
    }
}

/// Parses a wall-clock time such as `"7:00"`, `"07:00"` or `"07:00:30"`.
fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Computes the hours between an entrance and an exit time.
///
/// Blank or unparseable times yield zero. An exit before the entrance (an
/// overnight span) also yields zero; days never wrap past midnight.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::duration_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(duration_hours("07:00", "11:00"), Decimal::new(4, 0));
/// assert_eq!(duration_hours("07:30", "11:00"), Decimal::new(35, 1));
/// assert_eq!(duration_hours("22:00", "02:00"), Decimal::ZERO);
/// assert_eq!(duration_hours("", "11:00"), Decimal::ZERO);
/// ```
pub fn duration_hours(entrance: &str, exit: &str) -> Decimal {
    let (Some(entrance), Some(exit)) = (parse_time(entrance), parse_time(exit)) else {
        return Decimal::ZERO;
    };

    let seconds = (exit - entrance).num_seconds();
    if seconds <= 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)).normalize()
}

/// Returns the first day of the date's month.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the date's month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::last_day_of_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(last_day_of_month(date), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    add_one_month(first_day_of_month(date))
        .pred_opt()
        .unwrap_or(date)
}

/// Adds one calendar month, clamping to the end of a shorter month.
///
/// `2025-01-31` becomes `2025-02-28`. Saturates at [`NaiveDate::MAX`].
pub fn add_one_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Moves a date to another day of the same month.
///
/// A day past the end of the month clamps to the month's last day; day 0
/// clamps to the first.
pub fn with_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let last = last_day_of_month(date);
    let day = day.clamp(1, last.day());
    date.with_day(day).unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Business day classification
    // ==========================================================================

    #[test]
    fn test_weekdays_are_business_days() {
        // 2024-11-04 (Mon) through 2024-11-08 (Fri)
        for day in 4..=8 {
            let date = NaiveDate::from_ymd_opt(2024, 11, day).unwrap();
            assert!(is_business_day(date), "{} should be a business day", date);
        }
    }

    #[test]
    fn test_weekends_are_not_business_days() {
        assert!(!is_business_day(make_date("2024-11-09")));
        assert!(!is_business_day(make_date("2024-11-10")));
    }

    // ==========================================================================
    // Business day iteration
    // ==========================================================================

    #[test]
    fn test_november_2024_has_19_business_days_from_the_4th() {
        let days: Vec<NaiveDate> =
            business_days_in_range(make_date("2024-11-04"), make_date("2024-11-30")).collect();

        assert_eq!(days.len(), 19);
        assert_eq!(days.first(), Some(&make_date("2024-11-04")));
        assert_eq!(days.last(), Some(&make_date("2024-11-29")));
    }

    #[test]
    fn test_range_is_ascending_and_skips_weekends() {
        let days: Vec<NaiveDate> =
            business_days_in_range(make_date("2024-11-08"), make_date("2024-11-12")).collect();

        assert_eq!(
            days,
            vec![
                make_date("2024-11-08"),
                make_date("2024-11-11"),
                make_date("2024-11-12"),
            ]
        );
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut days = business_days_in_range(make_date("2024-11-30"), make_date("2024-11-04"));
        assert_eq!(days.next(), None);
    }

    #[test]
    fn test_weekend_only_range_is_empty() {
        let days = business_days_in_range(make_date("2024-11-09"), make_date("2024-11-10"));
        assert_eq!(days.count(), 0);
    }

    #[test]
    fn test_single_day_range() {
        let days: Vec<NaiveDate> =
            business_days_in_range(make_date("2024-11-06"), make_date("2024-11-06")).collect();
        assert_eq!(days, vec![make_date("2024-11-06")]);
    }

    #[test]
    fn test_iterator_clone_replays_range() {
        let days = business_days_in_range(make_date("2024-11-04"), make_date("2024-11-15"));
        let replay = days.clone();

        assert_eq!(days.count(), 10);
        assert_eq!(replay.count(), 10);
    }

    #[test]
    fn test_range_ending_at_max_date_terminates() {
        let days = business_days_in_range(NaiveDate::MAX, NaiveDate::MAX);
        assert!(days.count() <= 1);
    }

    // ==========================================================================
    // Duration
    // ==========================================================================

    #[test]
    fn test_duration_whole_hours() {
        assert_eq!(duration_hours("07:00", "11:00"), dec("4"));
        assert_eq!(duration_hours("16:00", "20:00"), dec("4"));
    }

    #[test]
    fn test_duration_fractional_hours() {
        assert_eq!(duration_hours("07:30", "11:00"), dec("3.5"));
        assert_eq!(duration_hours("08:00", "08:15"), dec("0.25"));
    }

    #[test]
    fn test_duration_accepts_single_digit_hour_and_seconds() {
        assert_eq!(duration_hours("7:00", "11:00"), dec("4"));
        assert_eq!(duration_hours("07:00:00", "07:30:00"), dec("0.5"));
    }

    #[test]
    fn test_duration_blank_or_invalid_is_zero() {
        assert_eq!(duration_hours("", "11:00"), Decimal::ZERO);
        assert_eq!(duration_hours("07:00", "   "), Decimal::ZERO);
        assert_eq!(duration_hours("abc", "11:00"), Decimal::ZERO);
        assert_eq!(duration_hours("25:00", "26:00"), Decimal::ZERO);
        assert_eq!(duration_hours("8", "12:00"), Decimal::ZERO);
        assert_eq!(duration_hours("08:00 am", "12:00"), Decimal::ZERO);
    }

    #[test]
    fn test_duration_overnight_clamps_to_zero() {
        assert_eq!(duration_hours("22:00", "02:00"), Decimal::ZERO);
        assert_eq!(duration_hours("11:00", "11:00"), Decimal::ZERO);
    }

    // ==========================================================================
    // Month arithmetic
    // ==========================================================================

    #[test]
    fn test_first_and_last_day_of_month() {
        assert_eq!(first_day_of_month(make_date("2024-11-15")), make_date("2024-11-01"));
        assert_eq!(last_day_of_month(make_date("2024-11-15")), make_date("2024-11-30"));
        assert_eq!(last_day_of_month(make_date("2024-12-01")), make_date("2024-12-31"));
        assert_eq!(last_day_of_month(make_date("2025-02-14")), make_date("2025-02-28"));
    }

    #[test]
    fn test_add_one_month_clamps_to_month_end() {
        assert_eq!(add_one_month(make_date("2025-01-31")), make_date("2025-02-28"));
        assert_eq!(add_one_month(make_date("2024-01-31")), make_date("2024-02-29"));
        assert_eq!(add_one_month(make_date("2024-12-20")), make_date("2025-01-20"));
    }

    #[test]
    fn test_with_day_clamped() {
        assert_eq!(with_day_clamped(make_date("2024-11-20"), 15), make_date("2024-11-15"));
        assert_eq!(with_day_clamped(make_date("2025-02-10"), 31), make_date("2025-02-28"));
        assert_eq!(with_day_clamped(make_date("2025-02-10"), 0), make_date("2025-02-01"));
    }
}
