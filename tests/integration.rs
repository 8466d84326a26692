//! Integration tests for the Attendance Engine.
//!
//! This test suite drives the HTTP router end to end and covers:
//! - Period partitioning under both regimes
//! - Report assembly with the default and custom schedules
//! - Exception days and hour totals
//! - Exception list import
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

async fn send(router: Router, uri: &str, content_type: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(create_router_for_test(), uri, "application/json", body.to_string()).await
}

fn period_bounds(body: &Value) -> Vec<(String, String)> {
    body["periods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["start_date"].as_str().unwrap().to_string(),
                p["end_date"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn create_identity() -> Value {
    json!({
        "student": {
            "name": "Ana María López",
            "enrollment_id": "2021630001",
            "career": "Ingeniería en Sistemas Computacionales",
            "email": "ana@example.com"
        },
        "lead_personnel": {
            "name": "Luis Pérez",
            "position": "Jefe de área"
        },
        "delivery_date": "2025-06-20"
    })
}

// =============================================================================
// Periods
// =============================================================================

#[tokio::test]
async fn test_periods_single_month_early_start() {
    let (status, body) = post_json(
        "/periods",
        json!({"service_start": "2024-11-04", "service_end": "2024-11-30"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        period_bounds(&body),
        vec![("2024-11-04".to_string(), "2024-11-30".to_string())]
    );
    assert_eq!(body["periods"][0]["index"], 1);
}

#[tokio::test]
async fn test_periods_mid_month_start_produces_seven() {
    let (status, body) = post_json(
        "/periods",
        json!({"service_start": "2024-11-15", "service_end": "2025-06-15"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let bounds = period_bounds(&body);
    assert_eq!(bounds.len(), 7);
    assert_eq!(bounds[0], ("2024-11-15".to_string(), "2024-12-15".to_string()));
    assert_eq!(bounds[1], ("2024-12-16".to_string(), "2025-01-15".to_string()));
    assert_eq!(bounds[6], ("2025-05-16".to_string(), "2025-06-15".to_string()));
}

#[tokio::test]
async fn test_periods_never_exceed_seven() {
    let (_, body) = post_json(
        "/periods",
        json!({"service_start": "2024-01-02", "service_end": "2025-12-31"}),
    )
    .await;

    let bounds = period_bounds(&body);
    assert_eq!(bounds.len(), 7);
    assert_eq!(bounds[6], ("2024-07-01".to_string(), "2025-12-31".to_string()));
}

#[tokio::test]
async fn test_periods_inverted_range_is_empty() {
    let (status, body) = post_json(
        "/periods",
        json!({"service_start": "2025-01-10", "service_end": "2024-11-04"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(period_bounds(&body).is_empty());
}

#[tokio::test]
async fn test_periods_missing_fields_are_blank() {
    let (status, body) = post_json("/periods", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(period_bounds(&body).is_empty());
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_reports_default_schedule_full_month() {
    let (status, body) = post_json(
        "/reports",
        json!({
            "service_start": "2024-11-04",
            "service_end": "2024-11-30",
            "identity": create_identity()
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["reports"][0];
    assert_eq!(report["attendance"].as_array().unwrap().len(), 19);
    assert_eq!(decimal(&report["total_hours"]), Decimal::new(76, 0));
    assert_eq!(decimal(&body["total_hours"]), Decimal::new(76, 0));
    assert_eq!(report["identity"]["student"]["name"], "Ana María López");
    assert_eq!(report["labels"]["start_long"], "04 de noviembre de 2024");
    assert_eq!(report["labels"]["month_name"], "Noviembre");
    assert_eq!(report["delivery_date_long"], "20 de junio de 2025");
}

#[tokio::test]
async fn test_reports_holiday_replaces_times() {
    let (status, body) = post_json(
        "/reports",
        json!({
            "service_start": "2024-11-04",
            "service_end": "2024-11-30",
            "exceptions": [{"date": "2024-11-11", "label": "Día festivo"}],
            "identity": create_identity()
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["reports"][0];
    let holiday = report["attendance"]
        .as_array()
        .unwrap()
        .iter()
        .find(|day| day["date"] == "2024-11-11")
        .unwrap();

    assert_eq!(holiday["entrance"], "Día festivo");
    assert_eq!(holiday["exit"], "Día festivo");
    assert_eq!(decimal(&holiday["hours_worked"]), Decimal::ZERO);
    assert_eq!(holiday["is_exception"], true);
    assert_eq!(decimal(&report["total_hours"]), Decimal::new(72, 0));
    assert_eq!(report["exceptions_in_period"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reports_custom_schedule() {
    let slot = json!({"entrance": "08:00", "exit": "12:30"});
    let (status, body) = post_json(
        "/reports",
        json!({
            "service_start": "2024-11-04",
            "service_end": "2024-11-30",
            "weekday_schedule": {
                "monday": slot, "tuesday": slot, "wednesday": slot,
                "thursday": slot, "friday": slot
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 19 days at 4.5 hours
    assert_eq!(decimal(&body["total_hours"]), Decimal::from_str("85.5").unwrap());
}

#[tokio::test]
async fn test_reports_cumulative_hours_accumulate() {
    let (status, body) = post_json(
        "/reports",
        json!({"service_start": "2024-11-15", "service_end": "2025-06-15"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 7);

    let mut running = Decimal::ZERO;
    for report in reports {
        running += decimal(&report["total_hours"]);
        assert_eq!(decimal(&report["cumulative_hours"]), running);
    }
    assert_eq!(decimal(&body["total_hours"]), running);
}

#[tokio::test]
async fn test_reports_blank_dates_yield_no_reports() {
    let (status, body) = post_json(
        "/reports",
        json!({"service_start": "", "service_end": "2024-11-30"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["reports"].as_array().unwrap().is_empty());
    assert_eq!(decimal(&body["total_hours"]), Decimal::ZERO);
}

// =============================================================================
// Exception import
// =============================================================================

#[tokio::test]
async fn test_exception_csv_import() {
    let csv = "Fecha,Tipo\n18/11/2024,Día festivo\n25/12/2024,Navidad\n".to_string();
    let (status, body) = send(create_router_for_test(), "/exceptions/csv", "text/csv", csv).await;

    assert_eq!(status, StatusCode::OK);
    let exceptions = body["exceptions"].as_array().unwrap();
    assert_eq!(exceptions.len(), 2);
    assert_eq!(exceptions[0]["date"], "2024-11-18");
    assert_eq!(exceptions[1]["label"], "Navidad");
}

#[tokio::test]
async fn test_exception_tsv_import() {
    let tsv = "Fecha\tTipo\n1/1/2025\tAño nuevo\n".to_string();
    let (status, body) = send(
        create_router_for_test(),
        "/exceptions/csv",
        "text/tab-separated-values",
        tsv,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exceptions"][0]["date"], "2025-01-01");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, body) = send(
        create_router_for_test(),
        "/periods",
        "application/json",
        "{invalid json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_invalid_exception_date_returns_400() {
    let (status, body) = post_json(
        "/reports",
        json!({
            "service_start": "2024-11-04",
            "service_end": "2024-11-30",
            "exceptions": [{"date": "11/11/2024", "label": "Día festivo"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
    assert!(body["details"].as_str().unwrap().contains("exceptions[0].date"));
}

#[tokio::test]
async fn test_invalid_schedule_shape_returns_400() {
    let (status, body) = post_json(
        "/reports",
        json!({
            "service_start": "2024-11-04",
            "service_end": "2024-11-30",
            "weekday_schedule": {"monday": {"entrance": "08:00", "exit": "12:00"}}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let (status, body) = send(
        create_router_for_test(),
        "/reports",
        "text/plain",
        "{}".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}
