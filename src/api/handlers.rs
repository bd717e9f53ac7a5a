//! HTTP request handlers for the attendance payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_monthly_report, build_range_report, daily_presence, daily_trend, month_calendar,
};
use crate::error::PayrollError;
use crate::models::PayrollMonth;

use super::request::{
    DailyAttendanceRequest, MonthlyPayrollRequest, RangePayrollRequest, TrendRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/monthly", post(monthly_payroll_handler))
        .route("/payroll/range", post(range_payroll_handler))
        .route("/attendance/daily", post(daily_attendance_handler))
        .route("/attendance/trend", post(trend_handler))
        .route("/working-days/:year/:month", get(working_days_handler))
        .with_state(state)
}

/// Handler for POST /payroll/monthly.
///
/// Returns the payroll report of every active employee for the month.
async fn monthly_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let period = match PayrollMonth::new(request.year, request.month) {
        Ok(period) => period,
        Err(err) => return error_response(err, correlation_id),
    };

    let config = state.config();
    let calendar = config.calendar_for(request.holidays);
    let start_time = Instant::now();

    match build_monthly_report(
        period,
        &request.employees,
        &request.attendance,
        &calendar,
        &config.deduction_rules(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                period = %period,
                employees = report.employees.len(),
                records = request.attendance.len(),
                working_days = report.calendar.working_days,
                total_net_salary = %report.totals.total_net_salary,
                warnings = report.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly payroll completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /payroll/range.
///
/// Returns the payroll report of every active employee over an inclusive
/// date range.
async fn range_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<RangePayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing range payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let calendar = config.calendar_for(request.holidays);
    let start_time = Instant::now();

    match build_range_report(
        request.start_date,
        request.end_date,
        &request.employees,
        &request.attendance,
        &calendar,
        &config.deduction_rules(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %report.start_date,
                end_date = %report.end_date,
                employees = report.employees.len(),
                working_days = report.working_days,
                total_net_salary = %report.totals.total_net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Range payroll completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /attendance/daily.
///
/// Returns who is present on the given date.
async fn daily_attendance_handler(
    payload: Result<Json<DailyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let presence = daily_presence(&request.employees, &request.attendance, request.date);
    info!(
        correlation_id = %correlation_id,
        date = %presence.date,
        present = presence.present_count,
        total = presence.total_employees,
        "Daily attendance completed successfully"
    );
    json_response(StatusCode::OK, &presence)
}

/// Handler for POST /attendance/trend.
///
/// Returns per-date status counts, excluding `today`.
async fn trend_handler(payload: Result<Json<TrendRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance trend request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let trend = daily_trend(&request.attendance, request.today);
    info!(
        correlation_id = %correlation_id,
        records = request.attendance.len(),
        points = trend.len(),
        "Attendance trend completed successfully"
    );
    json_response(StatusCode::OK, &trend)
}

/// Handler for GET /working-days/:year/:month.
///
/// Returns the working-day breakdown of the month using the configured
/// holiday calendar.
async fn working_days_handler(
    State(state): State<AppState>,
    params: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month) = match params {
        Ok(Path(params)) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid path parameters"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                &ApiError::invalid_path(rejection.body_text()),
            );
        }
    };

    match PayrollMonth::new(year, month) {
        Ok(period) => {
            let calendar = month_calendar(period, state.config().holidays());
            info!(
                correlation_id = %correlation_id,
                period = %period,
                working_days = calendar.working_days,
                "Working days computed"
            );
            json_response(StatusCode::OK, &calendar)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: PayrollError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message lives in the body text
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
    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{
        AttendanceRecord, AttendanceStatus, Employee, MonthCalendar, PayrollReport, Role,
    };
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> MonthlyPayrollRequest {
        let attendance = (1..=3)
            .map(|day| AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date: make_date(&format!("2024-07-0{}", day)),
                status: Some(AttendanceStatus::Late),
                in_time: None,
                out_time: None,
                total_minutes: None,
            })
            .collect();

        MonthlyPayrollRequest {
            month: 7,
            year: 2024,
            employees: vec![Employee {
                id: "emp_001".to_string(),
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                employee_code: "E001".to_string(),
                role: Role::Agent,
                segment: None,
                monthly_salary: Some(Decimal::from(27000)),
                is_active: true,
            }],
            attendance,
            holidays: None,
        }
    }

    async fn post_json(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_monthly_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = post_json("/payroll/monthly", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let report: PayrollReport = read_body(response).await;
        assert_eq!(report.calendar.working_days, 27);
        assert_eq!(report.employees.len(), 1);
        // three late days deduct a day that was never present
        assert_eq!(report.employees[0].salary.late_deduction_units, 1);
        assert_eq!(report.employees[0].salary.net_salary, Decimal::ZERO);
        assert_eq!(
            report.employees[0].salary.deduction_amount,
            Decimal::from_str("1000").unwrap()
        );
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_json("/payroll/monthly", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_validation_error() {
        let body = r#"{"year": 2024, "employees": []}"#.to_string();
        let response = post_json("/payroll/monthly", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_invalid_month_returns_400() {
        let mut request = create_valid_request();
        request.month = 13;
        let response =
            post_json("/payroll/monthly", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "INVALID_MONTH");
    }

    #[tokio::test]
    async fn test_api_005_working_days_endpoint() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/working-days/2024/10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let calendar: MonthCalendar = read_body(response).await;
        // Gandhi Jayanti and Dussehra from the configured calendar
        assert_eq!(calendar.working_days, 25);
        assert_eq!(calendar.holidays.len(), 2);
    }

    #[tokio::test]
    async fn test_api_006_non_numeric_path_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/working-days/2024/july")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "INVALID_PATH");
    }

    #[tokio::test]
    async fn test_api_007_missing_content_type_returns_400() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll/monthly")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }
}
