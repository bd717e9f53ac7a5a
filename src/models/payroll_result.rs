//! Payroll result models for the attendance payroll engine.
//!
//! This module contains the per-employee derived figures
//! ([`MonthlyStatusCounts`], [`SalaryDerivation`]), the report types that
//! bundle them with totals, and the audit trace recorded along the way.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MonthCalendar, PayrollMonth, Segment};

/// Status counts for one employee over a month or date range.
///
/// Derived on every request and never persisted.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::MonthlyStatusCounts;
///
/// let counts = MonthlyStatusCounts {
///     employee_id: "emp_001".to_string(),
///     present_days: 20,
///     late_days: 3,
///     half_days: 0,
///     absent_days: 1,
///     clocked_in_days: 0,
///     total_records: 24,
/// };
/// assert_eq!(counts.days_attended(), 23);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatusCounts {
    /// The employee the counts belong to.
    pub employee_id: String,
    /// Rows recorded exactly as Present.
    pub present_days: u32,
    /// Rows recorded exactly as Late.
    pub late_days: u32,
    /// Rows recorded exactly as Half Day.
    pub half_days: u32,
    /// Rows that are neither counted nor clocked in.
    pub absent_days: u32,
    /// Rows with no status but a clock-in.
    pub clocked_in_days: u32,
    /// All rows seen for the employee.
    pub total_records: u32,
}

impl MonthlyStatusCounts {
    /// Creates an all-zero count for an employee.
    pub fn empty(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            ..Self::default()
        }
    }

    /// Days the employee showed up in any capacity.
    pub fn days_attended(&self) -> u32 {
        self.present_days + self.late_days + self.half_days + self.clocked_in_days
    }
}

/// Salary figures derived from status counts, salary and working days.
///
/// No rounding is applied; formatting is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDerivation {
    /// Working days the salary is prorated over.
    pub working_days: u32,
    /// Days deducted for late arrivals.
    pub late_deduction_units: u32,
    /// Days deducted for half days.
    pub half_day_deduction_units: u32,
    /// Present days after deductions.
    pub actual_present_days: u32,
    /// Monthly salary divided by working days.
    pub daily_salary: Decimal,
    /// Pay for the actual present days.
    pub net_salary: Decimal,
    /// Pay withheld for deduction units.
    pub deduction_amount: Decimal,
    /// Raw present days as a percentage of working days.
    pub attendance_rate_percent: Decimal,
}

impl SalaryDerivation {
    /// Total deduction units applied.
    pub fn deduction_units(&self) -> u32 {
        self.late_deduction_units + self.half_day_deduction_units
    }
}

/// One employee's line in a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayroll {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's code.
    pub employee_code: String,
    /// The employee's full name.
    pub full_name: String,
    /// The employee's segment, if any.
    pub segment: Option<Segment>,
    /// The monthly salary used (zero when missing).
    pub monthly_salary: Decimal,
    /// The attendance counts.
    pub counts: MonthlyStatusCounts,
    /// The derived salary figures.
    pub salary: SalaryDerivation,
}

/// Aggregated totals across all employees in a report.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::PayrollTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals {
///     employee_count: 0,
///     working_days: 27,
///     total_present_days: 0,
///     total_monthly_salary: Decimal::ZERO,
///     total_net_salary: Decimal::ZERO,
///     total_deductions: Decimal::ZERO,
///     average_salary: Decimal::ZERO,
///     overall_attendance_rate_percent: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of employees folded.
    pub employee_count: u32,
    /// Working days of the period.
    pub working_days: u32,
    /// Sum of raw present days.
    pub total_present_days: u32,
    /// Sum of monthly salaries (the salary budget).
    pub total_monthly_salary: Decimal,
    /// Sum of net salaries (the payout).
    pub total_net_salary: Decimal,
    /// Sum of deduction amounts.
    pub total_deductions: Decimal,
    /// Mean monthly salary.
    pub average_salary: Decimal,
    /// Present days over employee-working-days, as a percentage.
    pub overall_attendance_rate_percent: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data worth a second look without stopping the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The payroll of every active employee for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The month the report covers.
    pub period: PayrollMonth,
    /// The working-day breakdown of the month.
    pub calendar: MonthCalendar,
    /// One line per active employee.
    pub employees: Vec<EmployeePayroll>,
    /// Totals across all lines.
    pub totals: PayrollTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The payroll of every active employee over an arbitrary date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Inclusive start of the range.
    pub start_date: NaiveDate,
    /// Inclusive end of the range.
    pub end_date: NaiveDate,
    /// Calendar days in the range.
    pub total_days: u32,
    /// Working days in the range.
    pub working_days: u32,
    /// One line per active employee.
    pub employees: Vec<EmployeePayroll>,
    /// Totals across all lines.
    pub totals: PayrollTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_derivation() -> SalaryDerivation {
        SalaryDerivation {
            working_days: 27,
            late_deduction_units: 1,
            half_day_deduction_units: 2,
            actual_present_days: 17,
            daily_salary: dec("1000"),
            net_salary: dec("17000"),
            deduction_amount: dec("3000"),
            attendance_rate_percent: dec("74.07"),
        }
    }

    #[test]
    fn test_empty_counts_are_zero() {
        let counts = MonthlyStatusCounts::empty("emp_009");
        assert_eq!(counts.employee_id, "emp_009");
        assert_eq!(counts.total_records, 0);
        assert_eq!(counts.days_attended(), 0);
    }

    #[test]
    fn test_deduction_units_sum() {
        assert_eq!(create_sample_derivation().deduction_units(), 3);
    }

    #[test]
    fn test_salary_derivation_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&create_sample_derivation()).unwrap();
        assert!(json.contains("\"daily_salary\":\"1000\""));
        assert!(json.contains("\"net_salary\":\"17000\""));
        assert!(json.contains("\"working_days\":27"));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "working_days".to_string(),
                rule_name: "Working Days".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "Test reasoning".to_string(),
            }],
            warnings: vec![AuditWarning {
                code: "MISSING_SALARY".to_string(),
                message: "Test warning".to_string(),
                severity: "low".to_string(),
            }],
            duration_us: 1234,
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"duration_us\":1234"));
        assert!(json.contains("\"rule_id\":\"working_days\""));
        assert!(json.contains("\"code\":\"MISSING_SALARY\""));
    }

    #[test]
    fn test_payroll_report_serialization() {
        let report = PayrollReport {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2024-08-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            period: PayrollMonth::new(2024, 7).unwrap(),
            calendar: MonthCalendar {
                year: 2024,
                month: 7,
                days_in_month: 31,
                sundays: 4,
                holidays: vec![],
                working_days: 27,
            },
            employees: vec![],
            totals: PayrollTotals {
                employee_count: 0,
                working_days: 27,
                total_present_days: 0,
                total_monthly_salary: Decimal::ZERO,
                total_net_salary: Decimal::ZERO,
                total_deductions: Decimal::ZERO,
                average_salary: Decimal::ZERO,
                overall_attendance_rate_percent: Decimal::ZERO,
            },
            audit_trace: AuditTrace::default(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"period\":{\"year\":2024,\"month\":7}"));
        assert!(json.contains("\"calendar\":{"));
        assert!(json.contains("\"totals\":{"));

        let back: PayrollReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
