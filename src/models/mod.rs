//! Core data models for the attendance payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar;
mod employee;
mod payroll_result;

pub use attendance::{AttendanceRecord, AttendanceStatus, EffectiveStatus};
pub use calendar::{Holiday, HolidayCalendar, MonthCalendar, PayrollMonth};
pub use employee::{Employee, Role, Segment};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, EmployeePayroll, MonthlyStatusCounts, PayrollReport,
    PayrollTotals, RangeReport, SalaryDerivation,
};
