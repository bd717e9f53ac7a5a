//! Calculation logic for the attendance payroll engine.
//!
//! This module contains the working-day calculator, status normalisation,
//! attendance aggregation (monthly counts, daily trend and daily presence),
//! salary derivation with late and half-day deductions, payroll totals, and
//! the report builders that chain them together with an audit trace.

mod aggregation;
mod daily_presence;
mod report;
mod salary;
mod status;
mod totals;
mod trend;
mod working_days;

pub use aggregation::{aggregate, aggregate_all, aggregate_in_range};
pub use daily_presence::{DailyAttendanceEntry, DailyPresence, daily_presence};
pub use report::{build_monthly_report, build_range_report};
pub use salary::{actual_present_days, deduction_units, derive_salary};
pub use status::normalize_status;
pub use totals::payroll_totals;
pub use trend::{DailyTrendPoint, daily_trend};
pub use working_days::{
    days_in_month, is_working_day, month_calendar, sundays_in_month, working_days,
    working_days_between,
};
