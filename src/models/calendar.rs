//! Payroll month, holiday and holiday calendar models.
//!
//! This module contains the [`PayrollMonth`], [`Holiday`] and
//! [`HolidayCalendar`] types that define the calendar context for working-day
//! and salary calculations.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A validated calendar month that payroll is computed for.
///
/// Construction rejects months outside `1..=12`, so every calculation that
/// takes a `PayrollMonth` can enumerate its days without failing.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::PayrollMonth;
///
/// let july = PayrollMonth::new(2024, 7).unwrap();
/// assert_eq!(july.days().count(), 31);
/// assert!(PayrollMonth::new(2024, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "MonthParts", into = "MonthParts")]
pub struct PayrollMonth {
    first_day: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<MonthParts> for PayrollMonth {
    type Error = PayrollError;

    fn try_from(parts: MonthParts) -> PayrollResult<Self> {
        PayrollMonth::new(parts.year, parts.month)
    }
}

impl From<PayrollMonth> for MonthParts {
    fn from(period: PayrollMonth) -> Self {
        MonthParts {
            year: period.year(),
            month: period.month(),
        }
    }
}

impl PayrollMonth {
    /// Creates a payroll month, failing with `InvalidMonth` when the pair
    /// does not name a real month.
    pub fn new(year: i32, month: u32) -> PayrollResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(PayrollError::InvalidMonth { year, month })
    }

    /// Returns the month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first_day)
    }

    /// Iterates over every date of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.month();
        self.first_day
            .iter_days()
            .take_while(move |date| date.month() == month)
    }

    /// Checks if a date falls inside this month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl std::fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// A named non-working day.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

/// The set of holidays the working-day calculator excludes.
///
/// Holidays are keyed by date; adding a second holiday on the same date
/// replaces the first.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{Holiday, HolidayCalendar, PayrollMonth};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
///     name: "Independence Day".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()));
/// let august = PayrollMonth::new(2024, 8).unwrap();
/// assert_eq!(calendar.holidays_in_month(august).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut calendar = Self::default();
        calendar.extend(holidays);
        calendar
    }

    /// Adds holidays to the calendar.
    pub fn extend(&mut self, holidays: impl IntoIterator<Item = Holiday>) {
        self.holidays
            .extend(holidays.into_iter().map(|h| (h.date, h)));
    }

    /// Checks if a given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holiday on a given date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Returns the holidays dated within the given month, in date order.
    pub fn holidays_in_month(&self, period: PayrollMonth) -> Vec<&Holiday> {
        self.holidays_between(period.first_day(), period.last_day())
    }

    /// Returns the holidays dated within an inclusive range, in date order.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday> {
        if end < start {
            return Vec::new();
        }
        self.holidays.range(start..=end).map(|(_, h)| h).collect()
    }

    /// Iterates over all holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// The working-day breakdown of one month.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::MonthCalendar;
///
/// let calendar = MonthCalendar {
///     year: 2024,
///     month: 7,
///     days_in_month: 31,
///     sundays: 4,
///     holidays: vec![],
///     working_days: 27,
/// };
/// assert_eq!(calendar.non_working_days(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The calendar year.
    pub year: i32,
    /// The month number.
    pub month: u32,
    /// Total days in the month.
    pub days_in_month: u32,
    /// Sundays in the month.
    pub sundays: u32,
    /// Holidays that removed a working day (holidays on a Sunday are not listed).
    pub holidays: Vec<Holiday>,
    /// Days left after removing Sundays and holidays.
    pub working_days: u32,
}

impl MonthCalendar {
    /// Days that are either a Sunday or a holiday.
    pub fn non_working_days(&self) -> u32 {
        self.days_in_month - self.working_days
    }
}
