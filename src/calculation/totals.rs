//! Payroll totals across employees.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeePayroll, PayrollTotals};

/// Folds per-employee payroll lines into report totals.
///
/// The average salary and overall attendance rate are zero when there are
/// no lines (or no working days), rather than undefined.
///
/// # Errors
///
/// Returns [`PayrollError::CalculationError`] if a sum overflows.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::payroll_totals;
/// use rust_decimal::Decimal;
///
/// let totals = payroll_totals(&[], 27).unwrap();
/// assert_eq!(totals.employee_count, 0);
/// assert_eq!(totals.average_salary, Decimal::ZERO);
/// ```
pub fn payroll_totals(
    rows: &[EmployeePayroll],
    working_days: u32,
) -> PayrollResult<PayrollTotals> {
    let employee_count = rows.len() as u32;

    let total_present_days: u32 = rows.iter().map(|r| r.counts.present_days).sum();
    let total_monthly_salary = checked_sum(rows, "monthly salary", |r| r.monthly_salary)?;
    let total_net_salary = checked_sum(rows, "net salary", |r| r.salary.net_salary)?;
    let total_deductions = checked_sum(rows, "deductions", |r| r.salary.deduction_amount)?;

    let average_salary = if employee_count == 0 {
        Decimal::ZERO
    } else {
        total_monthly_salary / Decimal::from(employee_count)
    };

    let employee_days = u64::from(employee_count) * u64::from(working_days);
    let overall_attendance_rate_percent = if employee_days == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(total_present_days) * Decimal::ONE_HUNDRED / Decimal::from(employee_days)
    };

    Ok(PayrollTotals {
        employee_count,
        working_days,
        total_present_days,
        total_monthly_salary,
        total_net_salary,
        total_deductions,
        average_salary,
        overall_attendance_rate_percent,
    })
}

fn checked_sum<F>(rows: &[EmployeePayroll], what: &str, amount: F) -> PayrollResult<Decimal>
where
    F: Fn(&EmployeePayroll) -> Decimal,
{
    rows.iter().try_fold(Decimal::ZERO, |total, row| {
        total
            .checked_add(amount(row))
            .ok_or_else(|| PayrollError::CalculationError {
                message: format!("total {} overflowed", what),
            })
    })
}
