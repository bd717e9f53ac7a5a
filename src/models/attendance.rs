//! Attendance record model and status types.
//!
//! This module contains the raw [`AttendanceRecord`] row as it arrives from
//! the attendance store, the recorded [`AttendanceStatus`], and the
//! [`EffectiveStatus`] every record is normalised to before aggregation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The status recorded against an attendance row.
///
/// Wire strings match the attendance store exactly, including the space in
/// `"Half Day"`. Snake case spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Present and on time.
    #[serde(rename = "Present", alias = "present")]
    Present,
    /// Absent for the day.
    #[serde(rename = "Absent", alias = "absent")]
    Absent,
    /// Arrived late.
    #[serde(rename = "Late", alias = "late")]
    Late,
    /// Worked half a day.
    #[serde(rename = "Half Day", alias = "half_day", alias = "HalfDay")]
    HalfDay,
}

impl AttendanceStatus {
    /// Parses a status string as written by the attendance store.
    ///
    /// Returns `None` for anything outside the four known statuses.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Present" | "present" => Some(AttendanceStatus::Present),
            "Absent" | "absent" => Some(AttendanceStatus::Absent),
            "Late" | "late" => Some(AttendanceStatus::Late),
            "Half Day" | "half_day" | "HalfDay" => Some(AttendanceStatus::HalfDay),
            _ => None,
        }
    }
}

/// Reads a row status, mapping unrecognised strings to no status.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<AttendanceStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(AttendanceStatus::from_label))
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Late => write!(f, "Late"),
            AttendanceStatus::HalfDay => write!(f, "Half Day"),
        }
    }
}

/// A single day's attendance row for one employee.
///
/// Rows are immutable once fetched and owned by the caller for the duration
/// of one aggregation pass.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     status: Some(AttendanceStatus::Late),
///     in_time: None,
///     out_time: None,
///     total_minutes: Some(470),
/// };
/// assert_eq!(record.worked_minutes(), Some(470));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The local calendar date of the row.
    #[serde(alias = "attendance_date")]
    pub date: NaiveDate,
    /// The recorded status, if one has been set. Strings outside the known
    /// statuses read as no status.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<AttendanceStatus>,
    /// Clock-in timestamp.
    #[serde(default)]
    pub in_time: Option<DateTime<Utc>>,
    /// Clock-out timestamp.
    #[serde(default)]
    pub out_time: Option<DateTime<Utc>>,
    /// Minutes worked as reported by the store.
    #[serde(default)]
    pub total_minutes: Option<u32>,
}

impl AttendanceRecord {
    /// Returns the minutes worked on this day.
    ///
    /// Prefers the stored `total_minutes`; otherwise derives whole minutes
    /// from the clock-in and clock-out pair. Returns `None` when neither is
    /// available or the clock-out precedes the clock-in.
    pub fn worked_minutes(&self) -> Option<u32> {
        if let Some(minutes) = self.total_minutes {
            return Some(minutes);
        }

        let (in_time, out_time) = (self.in_time?, self.out_time?);
        let minutes = (out_time - in_time).num_minutes();
        u32::try_from(minutes).ok()
    }

    /// Returns true if the employee clocked in on this day.
    pub fn has_clock_in(&self) -> bool {
        self.in_time.is_some()
    }
}

/// The normalised status of an attendance row.
///
/// Produced once per row so that downstream aggregation never re-derives
/// presence from raw timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    /// Recorded as present.
    Present,
    /// Recorded as absent.
    Absent,
    /// Recorded as late.
    Late,
    /// Recorded as half day.
    HalfDay,
    /// No status yet, but the employee clocked in.
    ClockedIn,
    /// No status and no clock-in.
    Unknown,
}

impl EffectiveStatus {
    /// Returns true if the employee counts as present for display purposes.
    ///
    /// Late and half-day rows are present; a clocked-in row without a
    /// status is present as well.
    pub fn is_present(&self) -> bool {
        matches!(
            self,
            EffectiveStatus::Present
                | EffectiveStatus::Late
                | EffectiveStatus::HalfDay
                | EffectiveStatus::ClockedIn
        )
    }

    /// Returns the label shown to dashboard users.
    pub fn display_label(&self) -> &'static str {
        match self {
            EffectiveStatus::Present | EffectiveStatus::ClockedIn => "Present",
            EffectiveStatus::Absent => "Absent",
            EffectiveStatus::Late => "Late",
            EffectiveStatus::HalfDay => "Half Day",
            EffectiveStatus::Unknown => "No Status",
        }
    }
}

impl From<AttendanceStatus> for EffectiveStatus {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => EffectiveStatus::Present,
            AttendanceStatus::Absent => EffectiveStatus::Absent,
            AttendanceStatus::Late => EffectiveStatus::Late,
            AttendanceStatus::HalfDay => EffectiveStatus::HalfDay,
        }
    }
}
