//! Engine input snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ExceptionDate, WeekdaySchedule};

/// Everything the engine needs to derive periods, attendance and reports.
///
/// Each computation reads a fresh snapshot; nothing is cached between runs.
/// Missing service dates yield no periods rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreInput {
    /// First day of service.
    #[serde(default)]
    pub service_start: Option<NaiveDate>,
    /// Last day of service.
    #[serde(default)]
    pub service_end: Option<NaiveDate>,
    /// Attendance times per weekday.
    #[serde(default)]
    pub weekday_schedule: WeekdaySchedule,
    /// Non-working dates with their labels.
    #[serde(default)]
    pub exceptions: Vec<ExceptionDate>,
}

impl CoreInput {
    /// Returns both service dates when present.
    pub fn service_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.service_start?, self.service_end?))
    }
}
