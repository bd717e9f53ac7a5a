//! Request types for the attendance payroll API.
//!
//! Employees and attendance rows are accepted in the same shape the
//! attendance store returns them, so the domain models double as request
//! payload types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Employee, Holiday};

/// Request body for `POST /payroll/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPayrollRequest {
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Employees to include; inactive ones are skipped.
    pub employees: Vec<Employee>,
    /// Attendance rows for the month.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Holidays replacing the configured calendar for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<Holiday>>,
}

/// Request body for `POST /payroll/range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangePayrollRequest {
    /// Inclusive start of the range.
    pub start_date: NaiveDate,
    /// Inclusive end of the range.
    pub end_date: NaiveDate,
    /// Employees to include; inactive ones are skipped.
    pub employees: Vec<Employee>,
    /// Attendance rows for the range.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Holidays replacing the configured calendar for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<Holiday>>,
}

/// Request body for `POST /attendance/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAttendanceRequest {
    /// The snapshot date.
    pub date: NaiveDate,
    /// Employees to include; inactive ones are skipped.
    pub employees: Vec<Employee>,
    /// Attendance rows; rows for other dates are ignored.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// Request body for `POST /attendance/trend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRequest {
    /// The current date; its rows are left out of the trend.
    pub today: NaiveDate,
    /// Attendance rows to bucket by date.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_request_with_store_field_names() {
        let json = r#"{
            "month": 7,
            "year": 2024,
            "employees": [{
                "id": "emp_001",
                "first_name": "Asha",
                "emp_code": "E001",
                "role": "agent",
                "salary_current": "27000"
            }],
            "attendance": [{
                "employee_id": "emp_001",
                "attendance_date": "2024-07-01",
                "status": "Present"
            }]
        }"#;

        let request: MonthlyPayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.month, 7);
        assert_eq!(request.employees[0].employee_code, "E001");
        assert_eq!(request.attendance.len(), 1);
        assert!(request.holidays.is_none());
    }

    #[test]
    fn test_attendance_defaults_to_empty() {
        let json = r#"{"today": "2024-07-15"}"#;
        let request: TrendRequest = serde_json::from_str(json).unwrap();
        assert!(request.attendance.is_empty());
    }

    #[test]
    fn test_range_request_requires_dates() {
        let json = r#"{"start_date": "2024-07-01", "employees": []}"#;
        let err = serde_json::from_str::<RangePayrollRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `end_date`"));
    }
}
