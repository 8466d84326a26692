//! Report models.
//!
//! This module contains the [`Report`] type handed to document generators,
//! along with the identity snapshot and formatted period labels it carries.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::{AttendanceDay, ExceptionDate, Period};

/// Student (service provider) details printed on each report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    /// Full name.
    pub name: String,
    /// School enrollment number ("boleta").
    pub enrollment_id: String,
    /// Degree program.
    pub career: String,
    /// Contact email.
    pub email: String,
}

/// The person directly responsible for the student at the host organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPersonnel {
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
}

/// Identity fields captured at generation time.
///
/// Reports keep the snapshot they were built with; later edits to the
/// identity form do not reach already generated reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySnapshot {
    /// Student details.
    pub student: StudentInfo,
    /// Lead personnel details.
    pub lead_personnel: LeadPersonnel,
    /// Date the reports are handed in.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
}

/// Period bounds pre-formatted for the report templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabels {
    /// Long Spanish start date, e.g. `"04 de noviembre de 2024"`.
    pub start_long: String,
    /// Long Spanish end date.
    pub end_long: String,
    /// Two-digit start day.
    pub start_day: String,
    /// Two-digit start month.
    pub start_month: String,
    /// Two-digit start year.
    pub start_year: String,
    /// Two-digit end day.
    pub end_day: String,
    /// Two-digit end month.
    pub end_month: String,
    /// Two-digit end year.
    pub end_year: String,
    /// Capitalized Spanish name of the start month, e.g. `"Noviembre"`.
    pub month_name: String,
}

/// The per-period bundle handed to the document generator.
///
/// Totals are not stored here; see [`crate::calculation::period_hours`] and
/// [`crate::calculation::cumulative_hours`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Stable identifier, `report-<index>`.
    pub id: String,
    /// The reporting period.
    pub period: Period,
    /// Pre-formatted period bounds.
    pub labels: PeriodLabels,
    /// Identity captured when the report was generated.
    pub identity: IdentitySnapshot,
    /// One entry per business day, ascending.
    pub attendance: Vec<AttendanceDay>,
    /// Exceptions whose date falls within the period.
    pub exceptions_in_period: Vec<ExceptionDate>,
    /// Long Spanish delivery date, when one was given.
    pub delivery_date_long: Option<String>,
}

impl Report {
    /// The report id for a period index.
    pub fn id_for(index: u8) -> String {
        format!("report-{}", index)
    }

    /// Iterates over days that were worked (not exceptions).
    pub fn worked_days(&self) -> impl Iterator<Item = &AttendanceDay> {
        self.attendance.iter().filter(|day| !day.is_exception)
    }

    /// Number of attendance days replaced by an exception.
    pub fn exception_day_count(&self) -> usize {
        self.attendance.iter().filter(|day| day.is_exception).count()
    }
}
