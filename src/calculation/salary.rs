//! Salary derivation.
//!
//! Converts a month's status counts into deducted days and prorates the
//! monthly salary over the working days of the period. Late arrivals and
//! half days accumulate into whole deducted days according to
//! [`DeductionRules`]; partial accumulations carry no penalty.

use rust_decimal::Decimal;

use crate::config::DeductionRules;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{MonthlyStatusCounts, SalaryDerivation};

/// Whole deducted days for `count` occurrences at `threshold` per day.
///
/// A zero threshold never deducts; configuration loading rejects it anyway.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::deduction_units;
///
/// assert_eq!(deduction_units(5, 2), 2);
/// assert_eq!(deduction_units(2, 3), 0);
/// ```
pub fn deduction_units(count: u32, threshold: u32) -> u32 {
    count.checked_div(threshold).unwrap_or(0)
}

/// Present days left after late and half-day deductions, floored at zero.
pub fn actual_present_days(counts: &MonthlyStatusCounts, rules: &DeductionRules) -> u32 {
    let late_units = deduction_units(counts.late_days, rules.late_to_absent);
    let half_units = deduction_units(counts.half_days, rules.half_day_to_absent);
    counts.present_days.saturating_sub(late_units + half_units)
}

/// Derives the salary figures for one employee.
///
/// The attendance rate uses raw present days while pay uses the deducted
/// figure. No rounding is applied.
///
/// # Errors
///
/// Returns [`PayrollError::DivisionUndefined`] when `working_days` is zero,
/// and [`PayrollError::CalculationError`] if the salary arithmetic overflows.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::derive_salary;
/// use attendance_payroll::config::DeductionRules;
/// use attendance_payroll::models::MonthlyStatusCounts;
/// use rust_decimal::Decimal;
///
/// let counts = MonthlyStatusCounts {
///     present_days: 20,
///     late_days: 3,
///     ..MonthlyStatusCounts::empty("emp_001")
/// };
///
/// let rules = DeductionRules::default();
/// let salary = derive_salary(&counts, Decimal::from(27000), 27, &rules).unwrap();
/// assert_eq!(salary.daily_salary, Decimal::from(1000));
/// assert_eq!(salary.actual_present_days, 19);
/// assert_eq!(salary.net_salary, Decimal::from(19000));
/// assert_eq!(salary.deduction_amount, Decimal::from(1000));
/// ```
pub fn derive_salary(
    counts: &MonthlyStatusCounts,
    monthly_salary: Decimal,
    working_days: u32,
    rules: &DeductionRules,
) -> PayrollResult<SalaryDerivation> {
    if working_days == 0 {
        return Err(PayrollError::DivisionUndefined {
            operation: format!("daily salary for employee '{}'", counts.employee_id),
        });
    }

    let late_deduction_units = deduction_units(counts.late_days, rules.late_to_absent);
    let half_day_deduction_units = deduction_units(counts.half_days, rules.half_day_to_absent);
    let actual_present_days = actual_present_days(counts, rules);

    let days = Decimal::from(working_days);
    let daily_salary = monthly_salary
        .checked_div(days)
        .ok_or_else(|| overflow("daily salary", counts))?;

    let net_salary = daily_salary
        .checked_mul(Decimal::from(actual_present_days))
        .ok_or_else(|| overflow("net salary", counts))?
        .max(Decimal::ZERO);

    let deduction_amount = daily_salary
        .checked_mul(Decimal::from(late_deduction_units + half_day_deduction_units))
        .ok_or_else(|| overflow("deduction amount", counts))?;

    let attendance_rate_percent = Decimal::from(counts.present_days) * Decimal::ONE_HUNDRED / days;

    Ok(SalaryDerivation {
        working_days,
        late_deduction_units,
        half_day_deduction_units,
        actual_present_days,
        daily_salary,
        net_salary,
        deduction_amount,
        attendance_rate_percent,
    })
}

fn overflow(what: &str, counts: &MonthlyStatusCounts) -> PayrollError {
    PayrollError::CalculationError {
        message: format!("{} overflowed for employee '{}'", what, counts.employee_id),
    }
}
