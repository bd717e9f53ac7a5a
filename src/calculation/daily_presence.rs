//! Presence snapshot for a single day.
//!
//! Powers the "present today" view: every active employee gets an entry,
//! whether or not a row exists for them.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, EffectiveStatus, Employee};

use super::normalize_status;

/// One employee's attendance on the snapshot date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendanceEntry {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's code.
    pub employee_code: String,
    /// The employee's full name.
    pub full_name: String,
    /// Normalised status; `absent` when no row exists.
    pub status: EffectiveStatus,
    /// Label shown to dashboard users.
    pub status_label: String,
    /// Whether the employee counts as present.
    pub is_present: bool,
    /// Clock-in timestamp, if any.
    pub in_time: Option<DateTime<Utc>>,
    /// Clock-out timestamp, if any.
    pub out_time: Option<DateTime<Utc>>,
    /// Minutes worked, if known.
    pub worked_minutes: Option<u32>,
}

/// Attendance of all active employees on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPresence {
    /// The snapshot date.
    pub date: NaiveDate,
    /// Active employees considered.
    pub total_employees: u32,
    /// Entries that count as present.
    pub present_count: u32,
    /// Present entries as a percentage of active employees.
    pub attendance_rate_percent: Decimal,
    /// One entry per active employee, in input order.
    pub entries: Vec<DailyAttendanceEntry>,
}

/// Builds the presence snapshot for `date`.
///
/// Inactive employees are skipped. Rows for other dates are ignored; if an
/// employee has more than one row for the date, the first wins.
pub fn daily_presence(
    employees: &[Employee],
    records: &[AttendanceRecord],
    date: NaiveDate,
) -> DailyPresence {
    let mut by_employee: HashMap<&str, &AttendanceRecord> = HashMap::new();
    for record in records.iter().filter(|r| r.date == date) {
        by_employee.entry(record.employee_id.as_str()).or_insert(record);
    }

    let entries: Vec<DailyAttendanceEntry> = employees
        .iter()
        .filter(|e| e.is_active)
        .map(|employee| {
            let record = by_employee.get(employee.id.as_str()).copied();
            let status = record.map_or(EffectiveStatus::Absent, normalize_status);

            DailyAttendanceEntry {
                employee_id: employee.id.clone(),
                employee_code: employee.employee_code.clone(),
                full_name: employee.full_name(),
                status,
                status_label: status.display_label().to_string(),
                is_present: status.is_present(),
                in_time: record.and_then(|r| r.in_time),
                out_time: record.and_then(|r| r.out_time),
                worked_minutes: record.and_then(|r| r.worked_minutes()),
            }
        })
        .collect();

    let total_employees = entries.len() as u32;
    let present_count = entries.iter().filter(|e| e.is_present).count() as u32;
    let attendance_rate_percent = if total_employees == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(present_count) * Decimal::ONE_HUNDRED / Decimal::from(total_employees)
    };

    DailyPresence {
        date,
        total_employees,
        present_count,
        attendance_rate_percent,
        entries,
    }
}
