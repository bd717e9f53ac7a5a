//! Daily attendance trend.
//!
//! Buckets recorded statuses per date for charting. Unlike the monthly
//! roll-up, only explicit statuses are counted and the current day is left
//! out because its statuses are not final yet.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Status counts for a single date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    /// The date the counts belong to.
    pub date: NaiveDate,
    /// Rows recorded as Present.
    pub present: u32,
    /// Rows recorded as Absent.
    pub absent: u32,
    /// Rows recorded as Late.
    pub late: u32,
    /// Rows recorded as Half Day.
    pub half_day: u32,
}

impl DailyTrendPoint {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// All rows with a recorded status on this date.
    pub fn total(&self) -> u32 {
        self.present + self.absent + self.late + self.half_day
    }
}

/// Builds the per-date trend, ascending by date.
///
/// Rows dated `today` are skipped. A row without a status still creates its
/// date's point but adds to no count.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::daily_trend;
/// use attendance_payroll::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let row = |day, status| AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
///     status,
///     in_time: None,
///     out_time: None,
///     total_minutes: None,
/// };
/// let records = vec![
///     row(1, Some(AttendanceStatus::Present)),
///     row(2, Some(AttendanceStatus::Late)),
///     row(3, Some(AttendanceStatus::Present)),
/// ];
///
/// let trend = daily_trend(&records, NaiveDate::from_ymd_opt(2024, 7, 3).unwrap());
/// assert_eq!(trend.len(), 2);
/// assert_eq!(trend[1].late, 1);
/// ```
pub fn daily_trend(records: &[AttendanceRecord], today: NaiveDate) -> Vec<DailyTrendPoint> {
    let mut points: BTreeMap<NaiveDate, DailyTrendPoint> = BTreeMap::new();

    for record in records.iter().filter(|r| r.date != today) {
        let point = points
            .entry(record.date)
            .or_insert_with(|| DailyTrendPoint::new(record.date));

        match record.status {
            Some(AttendanceStatus::Present) => point.present += 1,
            Some(AttendanceStatus::Absent) => point.absent += 1,
            Some(AttendanceStatus::Late) => point.late += 1,
            Some(AttendanceStatus::HalfDay) => point.half_day += 1,
            None => {}
        }
    }

    points.into_values().collect()
}
