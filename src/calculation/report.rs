//! Payroll report assembly.
//!
//! Runs the full pipeline for a set of employees: working days, attendance
//! aggregation, salary derivation and totals. Each decision is recorded in
//! the report's [`AuditTrace`].

use std::collections::HashSet;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::config::DeductionRules;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, Employee, EmployeePayroll,
    HolidayCalendar, MonthlyStatusCounts, PayrollMonth, PayrollReport, PayrollTotals, RangeReport,
};

use super::aggregation::aggregate_matching;
use super::{derive_salary, month_calendar, payroll_totals, working_days_between};

/// Collects audit steps and warnings while a report is built.
struct TraceRecorder {
    started: Instant,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl TraceRecorder {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn finish(self) -> AuditTrace {
        AuditTrace {
            steps: self.steps,
            warnings: self.warnings,
            duration_us: self.started.elapsed().as_micros() as u64,
        }
    }
}

/// Builds the payroll report of every active employee for one month.
///
/// Rows outside the month are ignored, as are rows for employees that are
/// inactive or unknown (the latter raise an `UNMATCHED_RECORDS` warning).
///
/// # Errors
///
/// Returns [`PayrollError::DivisionUndefined`] if the month has no working
/// days and at least one active employee.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::build_monthly_report;
/// use attendance_payroll::config::DeductionRules;
/// use attendance_payroll::models::{HolidayCalendar, PayrollMonth};
///
/// let period = PayrollMonth::new(2024, 7).unwrap();
/// let report = build_monthly_report(
///     period,
///     &[],
///     &[],
///     &HolidayCalendar::default(),
///     &DeductionRules::default(),
/// )
/// .unwrap();
/// assert_eq!(report.calendar.working_days, 27);
/// assert!(report.employees.is_empty());
/// ```
pub fn build_monthly_report(
    period: PayrollMonth,
    employees: &[Employee],
    records: &[AttendanceRecord],
    calendar: &HolidayCalendar,
    rules: &DeductionRules,
) -> PayrollResult<PayrollReport> {
    let mut trace = TraceRecorder::start();

    let month = month_calendar(period, calendar);
    trace.step(
        "working_days",
        "Working Days",
        json!({
            "period": period,
            "holidays_in_calendar": calendar.len(),
        }),
        json!({
            "days_in_month": month.days_in_month,
            "sundays": month.sundays,
            "holidays": month.holidays.len(),
            "working_days": month.working_days,
        }),
        format!(
            "{}: {} days - {} Sundays - {} weekday holidays = {} working days",
            period,
            month.days_in_month,
            month.sundays,
            month.holidays.len(),
            month.working_days
        ),
    );

    let lines = payroll_lines(
        employees,
        records,
        |r| period.contains_date(r.date),
        month.working_days,
        rules,
        &mut trace,
    )?;
    let totals = payroll_totals(&lines, month.working_days)?;
    record_totals(&mut trace, &totals);

    let audit_trace = trace.finish();
    debug!(
        period = %period,
        employees = lines.len(),
        working_days = month.working_days,
        total_net_salary = %totals.total_net_salary,
        duration_us = audit_trace.duration_us,
        "Built monthly payroll report"
    );

    Ok(PayrollReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        calendar: month,
        employees: lines,
        totals,
        audit_trace,
    })
}

/// Builds the payroll report of every active employee over an inclusive
/// date range.
///
/// The monthly salary is prorated over the working days of the range, so a
/// range shorter than a month yields a proportionally larger daily salary.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidDateRange`] when `end` precedes `start`,
/// and [`PayrollError::DivisionUndefined`] if the range has no working days
/// and at least one active employee.
pub fn build_range_report(
    start: NaiveDate,
    end: NaiveDate,
    employees: &[Employee],
    records: &[AttendanceRecord],
    calendar: &HolidayCalendar,
    rules: &DeductionRules,
) -> PayrollResult<RangeReport> {
    if end < start {
        return Err(PayrollError::InvalidDateRange { start, end });
    }

    let mut trace = TraceRecorder::start();

    let total_days = (end - start).num_days() as u32 + 1;
    let working_days = working_days_between(start, end, calendar);
    let holidays = calendar.holidays_between(start, end).len();
    trace.step(
        "working_days_between",
        "Working Days In Range",
        json!({
            "start_date": start,
            "end_date": end,
            "holidays_in_range": holidays,
        }),
        json!({
            "total_days": total_days,
            "working_days": working_days,
        }),
        format!(
            "{} to {}: {} calendar days, {} working days after Sundays and holidays",
            start, end, total_days, working_days
        ),
    );

    let lines = payroll_lines(
        employees,
        records,
        |r| r.date >= start && r.date <= end,
        working_days,
        rules,
        &mut trace,
    )?;
    let totals = payroll_totals(&lines, working_days)?;
    record_totals(&mut trace, &totals);

    let audit_trace = trace.finish();
    debug!(
        start = %start,
        end = %end,
        employees = lines.len(),
        working_days,
        duration_us = audit_trace.duration_us,
        "Built range payroll report"
    );

    Ok(RangeReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        start_date: start,
        end_date: end,
        total_days,
        working_days,
        employees: lines,
        totals,
        audit_trace,
    })
}

/// Aggregates and derives one line per active employee.
fn payroll_lines<F>(
    employees: &[Employee],
    records: &[AttendanceRecord],
    in_window: F,
    working_days: u32,
    rules: &DeductionRules,
    trace: &mut TraceRecorder,
) -> PayrollResult<Vec<EmployeePayroll>>
where
    F: Fn(&AttendanceRecord) -> bool,
{
    let mut known: HashSet<&str> = HashSet::new();
    let mut active: Vec<&Employee> = Vec::new();
    let mut duplicates = 0;
    for employee in employees.iter().filter(|e| e.is_active) {
        if known.insert(employee.id.as_str()) {
            active.push(employee);
        } else {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        trace.warn(
            "DUPLICATE_EMPLOYEES",
            format!(
                "{} repeated employee ids were dropped; the first entry for each id is used",
                duplicates
            ),
            "medium",
        );
    }

    let ids: Vec<&str> = active.iter().map(|e| e.id.as_str()).collect();
    let unmatched = records
        .iter()
        .filter(|&r| in_window(r) && !known.contains(r.employee_id.as_str()))
        .count();
    if unmatched > 0 {
        trace.warn(
            "UNMATCHED_RECORDS",
            format!(
                "{} attendance rows belong to no active employee and were ignored",
                unmatched
            ),
            "medium",
        );
    }

    let counts = aggregate_matching(records, &ids, &in_window);

    active
        .into_iter()
        .zip(counts)
        .map(|(employee, counts)| payroll_line(employee, counts, working_days, rules, trace))
        .collect()
}

fn payroll_line(
    employee: &Employee,
    counts: MonthlyStatusCounts,
    working_days: u32,
    rules: &DeductionRules,
    trace: &mut TraceRecorder,
) -> PayrollResult<EmployeePayroll> {
    if employee.monthly_salary.is_none() {
        trace.warn(
            "MISSING_SALARY",
            format!(
                "Employee '{}' has no monthly salary; treated as zero",
                employee.id
            ),
            "low",
        );
    }

    let monthly_salary = employee.salary();
    let salary = derive_salary(&counts, monthly_salary, working_days, rules)?;

    trace.step(
        "attendance_deductions",
        "Attendance Deductions",
        json!({
            "employee_id": employee.id,
            "counts": counts,
            "monthly_salary": monthly_salary,
            "rules": rules,
        }),
        json!(salary),
        format!(
            "{} late / {} = {} units, {} half days / {} = {} units; \
             {} present - {} = {} actual days at {} per day",
            counts.late_days,
            rules.late_to_absent,
            salary.late_deduction_units,
            counts.half_days,
            rules.half_day_to_absent,
            salary.half_day_deduction_units,
            counts.present_days,
            salary.deduction_units(),
            salary.actual_present_days,
            salary.daily_salary
        ),
    );

    Ok(EmployeePayroll {
        employee_id: employee.id.clone(),
        employee_code: employee.employee_code.clone(),
        full_name: employee.full_name(),
        segment: employee.segment,
        monthly_salary,
        counts,
        salary,
    })
}

fn record_totals(trace: &mut TraceRecorder, totals: &PayrollTotals) {
    trace.step(
        "payroll_totals",
        "Payroll Totals",
        json!({
            "employee_count": totals.employee_count,
            "working_days": totals.working_days,
        }),
        json!(totals),
        format!(
            "{} employees: net payout {} against a salary budget of {}",
            totals.employee_count, totals.total_net_salary, totals.total_monthly_salary
        ),
    );
}
