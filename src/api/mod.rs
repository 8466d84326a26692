//! HTTP API module for the Attendance Engine.
//!
//! This module exposes the period, report and exception-import operations
//! as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExceptionRequest, IdentityRequest, PeriodsRequest, ReportsRequest};
pub use response::{
    ApiError, ApiErrorResponse, ExceptionsResponse, PeriodsResponse, ReportWithTotals,
    ReportsResponse,
};
pub use state::AppState;
