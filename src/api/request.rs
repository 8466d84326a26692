//! Request types for the Attendance Engine API.
//!
//! Dates arrive as text so that a blank field can mean "not provided"
//! instead of failing deserialization. Conversion into engine types
//! rejects dates that are present but malformed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CoreInput, ExceptionDate, IdentitySnapshot, LeadPersonnel, StudentInfo, WeekdaySchedule,
};

/// Parses an ISO `YYYY-MM-DD` date; blank text is `None`.
fn parse_optional_date(field: &str, value: &str) -> EngineResult<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| EngineError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Request body for the `/periods` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodsRequest {
    /// First day of service, `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub service_start: String,
    /// Last day of service, `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub service_end: String,
}

impl TryFrom<PeriodsRequest> for CoreInput {
    type Error = EngineError;

    fn try_from(request: PeriodsRequest) -> EngineResult<Self> {
        Ok(CoreInput {
            service_start: parse_optional_date("service_start", &request.service_start)?,
            service_end: parse_optional_date("service_end", &request.service_end)?,
            ..CoreInput::default()
        })
    }
}

/// An exception date in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionRequest {
    /// The non-working date, `YYYY-MM-DD`.
    pub date: String,
    /// The label printed instead of the times.
    pub label: String,
}

/// Identity fields in a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityRequest {
    /// Student details.
    #[serde(default)]
    pub student: StudentInfo,
    /// Lead personnel details.
    #[serde(default)]
    pub lead_personnel: LeadPersonnel,
    /// Delivery date, `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub delivery_date: String,
}

impl TryFrom<IdentityRequest> for IdentitySnapshot {
    type Error = EngineError;

    fn try_from(request: IdentityRequest) -> EngineResult<Self> {
        Ok(IdentitySnapshot {
            student: request.student,
            lead_personnel: request.lead_personnel,
            delivery_date: parse_optional_date("identity.delivery_date", &request.delivery_date)?,
        })
    }
}

/// Request body for the `/reports` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportsRequest {
    /// First day of service, `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub service_start: String,
    /// Last day of service, `YYYY-MM-DD` or blank.
    #[serde(default)]
    pub service_end: String,
    /// Weekday schedule; the configured default applies when omitted.
    #[serde(default)]
    pub weekday_schedule: Option<WeekdaySchedule>,
    /// Non-working dates.
    #[serde(default)]
    pub exceptions: Vec<ExceptionRequest>,
    /// Identity printed on every report.
    #[serde(default)]
    pub identity: IdentityRequest,
}

impl ReportsRequest {
    /// Converts the request into engine inputs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for any malformed date, naming
    /// the offending field.
    pub fn into_parts(
        self,
        default_schedule: &WeekdaySchedule,
    ) -> EngineResult<(CoreInput, IdentitySnapshot)> {
        let exceptions = self
            .exceptions
            .into_iter()
            .enumerate()
            .map(|(i, exception)| {
                let field = format!("exceptions[{}].date", i);
                match parse_optional_date(&field, &exception.date)? {
                    Some(date) => Ok(ExceptionDate::new(date, exception.label)),
                    None => Err(EngineError::InvalidDate {
                        field,
                        value: exception.date,
                    }),
                }
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let input = CoreInput {
            service_start: parse_optional_date("service_start", &self.service_start)?,
            service_end: parse_optional_date("service_end", &self.service_end)?,
            weekday_schedule: self
                .weekday_schedule
                .unwrap_or_else(|| default_schedule.clone()),
            exceptions,
        };

        Ok((input, self.identity.try_into()?))
    }
}
