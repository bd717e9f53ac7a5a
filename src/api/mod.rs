//! HTTP API module for the attendance payroll engine.
//!
//! This module provides the REST endpoints for monthly and date-range
//! payroll reports, daily presence, the attendance trend, and the
//! working-day calendar of a month.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DailyAttendanceRequest, MonthlyPayrollRequest, RangePayrollRequest, TrendRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
