//! Attendance aggregation.
//!
//! Counts each employee's rows by normalised status. Present, Late and Half
//! Day are counted by exact recorded status; a clocked-in row with no status
//! is tracked separately so that it is shown as present but never feeds the
//! deduction rules. Everything else is absent.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, EffectiveStatus, Employee, MonthlyStatusCounts};

use super::normalize_status;

fn tally(counts: &mut MonthlyStatusCounts, record: &AttendanceRecord) {
    counts.total_records += 1;
    match normalize_status(record) {
        EffectiveStatus::Present => counts.present_days += 1,
        EffectiveStatus::Late => counts.late_days += 1,
        EffectiveStatus::HalfDay => counts.half_days += 1,
        EffectiveStatus::ClockedIn => counts.clocked_in_days += 1,
        EffectiveStatus::Absent | EffectiveStatus::Unknown => counts.absent_days += 1,
    }
}

/// Counts one employee's attendance rows by status.
///
/// Rows belonging to other employees are ignored. The caller decides the
/// date window by the rows it passes in; see [`aggregate_in_range`] to
/// restrict it here instead.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::aggregate;
/// use attendance_payroll::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let row = |day, status| AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
///     status: Some(status),
///     in_time: None,
///     out_time: None,
///     total_minutes: None,
/// };
/// let records = vec![
///     row(1, AttendanceStatus::Present),
///     row(2, AttendanceStatus::Late),
///     row(3, AttendanceStatus::Absent),
/// ];
///
/// let counts = aggregate(&records, "emp_001");
/// assert_eq!(counts.present_days, 1);
/// assert_eq!(counts.late_days, 1);
/// assert_eq!(counts.absent_days, 1);
/// ```
pub fn aggregate(records: &[AttendanceRecord], employee_id: &str) -> MonthlyStatusCounts {
    let mut counts = MonthlyStatusCounts::empty(employee_id);
    records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .for_each(|r| tally(&mut counts, r));
    counts
}

/// Counts one employee's rows dated within an inclusive range.
pub fn aggregate_in_range(
    records: &[AttendanceRecord],
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> MonthlyStatusCounts {
    let mut counts = MonthlyStatusCounts::empty(employee_id);
    records
        .iter()
        .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
        .for_each(|r| tally(&mut counts, r));
    counts
}

/// Counts rows for every employee in a single pass.
///
/// Returns one entry per employee, in the order given. Employees without
/// rows get zero counts; rows for employees not in the list are dropped.
/// A repeated employee id gets the same counts at each position.
pub fn aggregate_all(
    records: &[AttendanceRecord],
    employees: &[Employee],
) -> Vec<MonthlyStatusCounts> {
    let ids: Vec<&str> = employees.iter().map(|e| e.id.as_str()).collect();
    aggregate_matching(records, &ids, |_| true)
}

/// Single-pass aggregation over the rows accepted by `keep`.
pub(crate) fn aggregate_matching<F>(
    records: &[AttendanceRecord],
    employee_ids: &[&str],
    keep: F,
) -> Vec<MonthlyStatusCounts>
where
    F: Fn(&AttendanceRecord) -> bool,
{
    let mut by_employee: HashMap<&str, MonthlyStatusCounts> = employee_ids
        .iter()
        .map(|&id| (id, MonthlyStatusCounts::empty(id)))
        .collect();

    for record in records.iter().filter(|&r| keep(r)) {
        if let Some(counts) = by_employee.get_mut(record.employee_id.as_str()) {
            tally(counts, record);
        }
    }

    employee_ids
        .iter()
        .map(|&id| {
            by_employee
                .get(id)
                .cloned()
                .unwrap_or_else(|| MonthlyStatusCounts::empty(id))
        })
        .collect()
}
