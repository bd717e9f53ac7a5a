//! Performance benchmarks for the attendance payroll engine.
//!
//! Covers the monthly report pipeline called directly and through the HTTP
//! layer, for workforces of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use attendance_payroll::api::{AppState, MonthlyPayrollRequest, create_router};
use attendance_payroll::calculation::build_monthly_report;
use attendance_payroll::config::ConfigLoader;
use attendance_payroll::models::{
    AttendanceRecord, AttendanceStatus, Employee, PayrollMonth, Role,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee {
            id: format!("emp_{:04}", i),
            first_name: "Bench".to_string(),
            last_name: format!("{}", i),
            employee_code: format!("E{:04}", i),
            role: Role::Agent,
            segment: None,
            monthly_salary: Some(Decimal::from(20_000 + (i as i64 % 10) * 1_000)),
            is_active: true,
        })
        .collect()
}

/// One row per employee for every non-Sunday of July 2024, with a mix of statuses.
fn create_july_attendance(employees: &[Employee]) -> Vec<AttendanceRecord> {
    let days: Vec<NaiveDate> = NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .iter_days()
        .take_while(|d| d.month() == 7)
        .filter(|d| d.weekday() != Weekday::Sun)
        .collect();

    employees
        .iter()
        .enumerate()
        .flat_map(|(i, employee)| {
            days.iter().enumerate().map(move |(j, &date)| AttendanceRecord {
                employee_id: employee.id.clone(),
                date,
                status: match (i + j) % 9 {
                    0 => Some(AttendanceStatus::Late),
                    1 => Some(AttendanceStatus::HalfDay),
                    2 => Some(AttendanceStatus::Absent),
                    3 => None,
                    _ => Some(AttendanceStatus::Present),
                },
                in_time: None,
                out_time: None,
                total_minutes: None,
            })
        })
        .collect()
}

/// Benchmark: monthly report built directly, without HTTP.
fn bench_monthly_report(c: &mut Criterion) {
    let state = create_test_state();
    let config = state.config();
    let period = PayrollMonth::new(2024, 7).unwrap();

    let mut group = c.benchmark_group("monthly_report");

    for employee_count in [10, 100, 1000] {
        let employees = create_employees(employee_count);
        let attendance = create_july_attendance(&employees);

        group.throughput(Throughput::Elements(employee_count as u64));
        if employee_count >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &employee_count,
            |b, _| {
                b.iter(|| {
                    let report = build_monthly_report(
                        period,
                        black_box(&employees),
                        black_box(&attendance),
                        config.holidays(),
                        &config.deduction_rules(),
                    )
                    .unwrap();
                    black_box(report)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: monthly report through the router, including JSON handling.
fn bench_monthly_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let mut group = c.benchmark_group("monthly_endpoint");

    for employee_count in [10, 100] {
        let employees = create_employees(employee_count);
        let attendance = create_july_attendance(&employees);
        let request = MonthlyPayrollRequest {
            month: 7,
            year: 2024,
            employees,
            attendance,
            holidays: None,
        };
        let body = serde_json::to_string(&request).unwrap();

        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            &employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/payroll/monthly")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_monthly_report, bench_monthly_endpoint);
criterion_main!(benches);
