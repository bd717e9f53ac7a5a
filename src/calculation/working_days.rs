//! Working-day calculation.
//!
//! A working day is a calendar day that is neither a Sunday nor a holiday in
//! the supplied [`HolidayCalendar`]. The calendar is always passed in, so the
//! functions here are pure in `(period, calendar)`.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{HolidayCalendar, MonthCalendar, PayrollMonth};

/// Returns true if the date is neither a Sunday nor a holiday.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::is_working_day;
/// use attendance_payroll::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
/// // 2024-07-07 is a Sunday
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2024, 7, 7).unwrap(), &calendar));
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2024, 7, 6).unwrap(), &calendar));
/// ```
pub fn is_working_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    date.weekday() != Weekday::Sun && !calendar.is_holiday(date)
}

/// Number of days in the month, accounting for leap years.
pub fn days_in_month(period: PayrollMonth) -> u32 {
    period.days().count() as u32
}

/// Number of Sundays in the month.
pub fn sundays_in_month(period: PayrollMonth) -> u32 {
    period
        .days()
        .filter(|date| date.weekday() == Weekday::Sun)
        .count() as u32
}

/// Counts the working days in a month.
///
/// Every date of the month is enumerated; Sundays and holiday dates are
/// excluded. A holiday that falls on a Sunday removes only one day.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::working_days;
/// use attendance_payroll::models::{HolidayCalendar, PayrollMonth};
///
/// // July 2024: 31 days, 4 Sundays, no holidays
/// let july = PayrollMonth::new(2024, 7).unwrap();
/// assert_eq!(working_days(july, &HolidayCalendar::default()), 27);
/// ```
pub fn working_days(period: PayrollMonth, calendar: &HolidayCalendar) -> u32 {
    period
        .days()
        .filter(|&date| is_working_day(date, calendar))
        .count() as u32
}

/// Counts the working days in an inclusive date range.
///
/// Returns 0 when `end` precedes `start`.
pub fn working_days_between(start: NaiveDate, end: NaiveDate, calendar: &HolidayCalendar) -> u32 {
    if end < start {
        return 0;
    }
    start
        .iter_days()
        .take_while(|&date| date <= end)
        .filter(|&date| is_working_day(date, calendar))
        .count() as u32
}

/// Builds the working-day breakdown of a month.
///
/// Only holidays that removed a working day are listed, so
/// `days_in_month - sundays - holidays.len() == working_days` always holds.
pub fn month_calendar(period: PayrollMonth, calendar: &HolidayCalendar) -> MonthCalendar {
    let holidays = calendar
        .holidays_in_month(period)
        .into_iter()
        .filter(|h| h.date.weekday() != Weekday::Sun)
        .cloned()
        .collect();

    MonthCalendar {
        year: period.year(),
        month: period.month(),
        days_in_month: days_in_month(period),
        sundays: sundays_in_month(period),
        holidays,
        working_days: working_days(period, calendar),
    }
}
