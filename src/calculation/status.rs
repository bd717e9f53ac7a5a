//! Attendance status normalisation.
//!
//! Every record passes through [`normalize_status`] exactly once; the rest
//! of the engine works with the resulting [`EffectiveStatus`].

use crate::models::{AttendanceRecord, EffectiveStatus};

/// Normalises a record's status.
///
/// - A recorded status always wins, even when it contradicts the clock-in.
/// - No status but a clock-in yields [`EffectiveStatus::ClockedIn`].
/// - No status and no clock-in yields [`EffectiveStatus::Unknown`].
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::normalize_status;
/// use attendance_payroll::models::{AttendanceRecord, EffectiveStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     status: None,
///     in_time: Some("2024-07-01T09:02:00Z".parse().unwrap()),
///     out_time: None,
///     total_minutes: None,
/// };
/// assert_eq!(normalize_status(&record), EffectiveStatus::ClockedIn);
/// ```
pub fn normalize_status(record: &AttendanceRecord) -> EffectiveStatus {
    match record.status {
        Some(status) => status.into(),
        None if record.has_clock_in() => EffectiveStatus::ClockedIn,
        None => EffectiveStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;

    fn make_record(status: Option<AttendanceStatus>, clocked_in: bool) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            status,
            in_time: clocked_in.then(|| "2024-07-01T09:00:00Z".parse().unwrap()),
            out_time: None,
            total_minutes: None,
        }
    }

    #[test]
    fn test_recorded_status_maps_directly() {
        let cases = [
            (AttendanceStatus::Present, EffectiveStatus::Present),
            (AttendanceStatus::Absent, EffectiveStatus::Absent),
            (AttendanceStatus::Late, EffectiveStatus::Late),
            (AttendanceStatus::HalfDay, EffectiveStatus::HalfDay),
        ];
        for (recorded, expected) in cases {
            assert_eq!(normalize_status(&make_record(Some(recorded), false)), expected);
        }
    }

    #[test]
    fn test_recorded_absent_wins_over_clock_in() {
        let record = make_record(Some(AttendanceStatus::Absent), true);
        assert_eq!(normalize_status(&record), EffectiveStatus::Absent);
        assert!(!normalize_status(&record).is_present());
    }

    #[test]
    fn test_missing_status_with_clock_in_is_clocked_in() {
        let record = make_record(None, true);
        assert_eq!(normalize_status(&record), EffectiveStatus::ClockedIn);
        assert!(normalize_status(&record).is_present());
    }

    #[test]
    fn test_missing_status_without_clock_in_is_unknown() {
        let record = make_record(None, false);
        assert_eq!(normalize_status(&record), EffectiveStatus::Unknown);
    }
}
