//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{assemble_reports, cumulative_hours, partition_input, period_hours, total_hours};
use crate::error::EngineError;
use crate::import::parse_exception_csv;
use crate::models::CoreInput;

use super::request::{PeriodsRequest, ReportsRequest};
use super::response::{
    ApiError, ApiErrorResponse, ExceptionsResponse, PeriodsResponse, ReportWithTotals,
    ReportsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", post(periods_handler))
        .route("/reports", post(reports_handler))
        .route("/exceptions/csv", post(exceptions_csv_handler))
        .with_state(state)
}

/// Wraps a body in a 200 JSON response.
fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns an engine error into a JSON error response.
fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /periods.
///
/// Partitions the service range into reporting periods.
async fn periods_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing periods request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let input = match CoreInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error(correlation_id, err),
    };

    let periods = partition_input(&input, state.config().rules());
    info!(
        correlation_id = %correlation_id,
        period_count = periods.len(),
        "Periods computed"
    );

    json_ok(PeriodsResponse { periods })
}

/// Handler for POST /reports.
///
/// Assembles every report with its period and cumulative hour totals.
async fn reports_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reports request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let config = state.config();
    let (input, identity) = match request.into_parts(config.default_schedule()) {
        Ok(parts) => parts,
        Err(err) => return engine_error(correlation_id, err),
    };

    let start_time = Instant::now();
    let reports = assemble_reports(&input, &identity, config.rules());
    let total = total_hours(&reports);

    let reports_with_totals: Vec<ReportWithTotals> = reports
        .iter()
        .map(|report| ReportWithTotals {
            total_hours: period_hours(report),
            cumulative_hours: cumulative_hours(&reports, report.period.index),
            report: report.clone(),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        report_count = reports_with_totals.len(),
        total_hours = %total,
        duration_us = start_time.elapsed().as_micros(),
        "Reports assembled successfully"
    );

    json_ok(ReportsResponse {
        reports: reports_with_totals,
        total_hours: total,
    })
}

/// Handler for POST /exceptions/csv.
///
/// Parses a CSV or TSV exception list sent as the raw request body.
async fn exceptions_csv_handler(body: String) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing exception import");

    match parse_exception_csv(&body) {
        Ok(exceptions) => {
            info!(
                correlation_id = %correlation_id,
                exception_count = exceptions.len(),
                "Exceptions imported"
            );
            json_ok(ExceptionsResponse { exceptions })
        }
        Err(err) => engine_error(correlation_id, err),
    }
}
