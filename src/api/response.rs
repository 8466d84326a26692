//! Response types for the Attendance Engine API.
//!
//! This module defines the success bodies of each endpoint and the error
//! response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ExceptionDate, Period, Report};

/// Response body for the `/periods` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodsResponse {
    /// The reporting periods, in order.
    pub periods: Vec<Period>,
}

/// A report together with its derived hour totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportWithTotals {
    /// The report itself.
    #[serde(flatten)]
    pub report: Report,
    /// Hours worked in this period.
    pub total_hours: Decimal,
    /// Hours worked in this and every earlier period.
    pub cumulative_hours: Decimal,
}

/// Response body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsResponse {
    /// One entry per period.
    pub reports: Vec<ReportWithTotals>,
    /// Hours worked over the whole service range.
    pub total_hours: Decimal,
}

/// Response body for the `/exceptions/csv` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionsResponse {
    /// The parsed exceptions, in file order.
    pub exceptions: Vec<ExceptionDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidDate { field, .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE",
                message,
                format!("Field '{}' must be a YYYY-MM-DD date or blank", field),
            )),
            EngineError::DuplicateExceptionDate { .. } => {
                Self::bad_request(ApiError::new("DUPLICATE_EXCEPTION", message))
            }
            EngineError::DateAlreadyInAttendance { .. } => {
                Self::bad_request(ApiError::new("DATE_IN_ATTENDANCE", message))
            }
            EngineError::InvalidCsv { .. } => {
                Self::bad_request(ApiError::new("INVALID_CSV", message))
            }
            EngineError::StepIncomplete { .. } => {
                Self::bad_request(ApiError::validation_error(message))
            }
            EngineError::NothingSelected => {
                Self::bad_request(ApiError::new("NOTHING_SELECTED", message))
            }
            EngineError::ReportNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("REPORT_NOT_FOUND", message),
            },
        }
    }
}
