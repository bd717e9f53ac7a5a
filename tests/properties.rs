//! Property tests for the calendar, aggregation and salary rules.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use attendance_payroll::calculation::{
    actual_present_days, aggregate, daily_trend, days_in_month, derive_salary, month_calendar,
    sundays_in_month, working_days,
};
use attendance_payroll::config::DeductionRules;
use attendance_payroll::models::{
    AttendanceRecord, AttendanceStatus, Holiday, HolidayCalendar, MonthlyStatusCounts,
    PayrollMonth,
};

fn counts(present: u32, late: u32, half: u32) -> MonthlyStatusCounts {
    MonthlyStatusCounts {
        present_days: present,
        late_days: late,
        half_days: half,
        total_records: present + late + half,
        ..MonthlyStatusCounts::empty("emp_001")
    }
}

fn status_strategy() -> impl Strategy<Value = Option<AttendanceStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(AttendanceStatus::Present)),
        Just(Some(AttendanceStatus::Absent)),
        Just(Some(AttendanceStatus::Late)),
        Just(Some(AttendanceStatus::HalfDay)),
    ]
}

fn record_strategy() -> impl Strategy<Value = AttendanceRecord> {
    (1u32..=31, status_strategy(), any::<bool>()).prop_map(|(day, status, clocked_in)| {
        let date = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date,
            status,
            in_time: clocked_in.then(|| date.and_hms_opt(9, 0, 0).unwrap().and_utc()),
            out_time: None,
            total_minutes: None,
        }
    })
}

proptest! {
    #[test]
    fn working_days_is_days_minus_sundays_minus_weekday_holidays(
        year in 1990i32..2100,
        month in 1u32..=12,
        holiday_days in proptest::collection::btree_set(1u32..=28, 0..6),
    ) {
        let period = PayrollMonth::new(year, month).unwrap();
        let calendar = HolidayCalendar::new(holiday_days.iter().map(|&d| Holiday {
            date: NaiveDate::from_ymd_opt(year, month, d).unwrap(),
            name: format!("Holiday {}", d),
        }));

        let weekday_holidays = holiday_days
            .iter()
            .filter(|&&d| {
                NaiveDate::from_ymd_opt(year, month, d).unwrap().weekday() != Weekday::Sun
            })
            .count() as u32;

        prop_assert_eq!(
            working_days(period, &calendar),
            days_in_month(period) - sundays_in_month(period) - weekday_holidays
        );
        prop_assert_eq!(
            month_calendar(period, &calendar).holidays.len() as u32,
            weekday_holidays
        );
    }

    #[test]
    fn actual_present_days_never_exceeds_present(
        present in 0u32..40,
        late in 0u32..40,
        half in 0u32..40,
    ) {
        let c = counts(present, late, half);
        prop_assert!(actual_present_days(&c, &DeductionRules::default()) <= present);
    }

    #[test]
    fn three_more_late_days_cost_one_day_until_zero(
        present in 0u32..40,
        late in 0u32..40,
        half in 0u32..40,
    ) {
        let rules = DeductionRules::default();
        let before = actual_present_days(&counts(present, late, half), &rules);
        let after = actual_present_days(&counts(present, late + 3, half), &rules);
        prop_assert_eq!(after, before.saturating_sub(1));
    }

    #[test]
    fn net_salary_scales_linearly_with_salary(
        present in 0u32..31,
        late in 0u32..10,
        half in 0u32..10,
        working_days in 1u32..31,
        daily in 0i64..100_000,
        factor in 1i64..10,
    ) {
        let rules = DeductionRules::default();
        let c = counts(present, late, half);
        // a salary divisible by the working days keeps the division exact
        let salary = Decimal::from(daily) * Decimal::from(working_days);

        let base = derive_salary(&c, salary, working_days, &rules).unwrap();
        let scaled =
            derive_salary(&c, salary * Decimal::from(factor), working_days, &rules).unwrap();

        prop_assert_eq!(scaled.net_salary, base.net_salary * Decimal::from(factor));
        prop_assert!(base.net_salary >= Decimal::ZERO);
    }

    #[test]
    fn aggregate_partitions_every_record(
        records in proptest::collection::vec(record_strategy(), 0..60),
    ) {
        let c = aggregate(&records, "emp_001");
        prop_assert_eq!(c.total_records as usize, records.len());
        prop_assert_eq!(c.days_attended() + c.absent_days, c.total_records);
    }

    #[test]
    fn trend_is_sorted_and_excludes_today(
        records in proptest::collection::vec(record_strategy(), 0..60),
        today in 1u32..=31,
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 7, today).unwrap();
        let trend = daily_trend(&records, today);

        prop_assert!(trend.iter().all(|p| p.date != today));
        prop_assert!(trend.windows(2).all(|w| w[0].date < w[1].date));

        let counted: u32 = trend.iter().map(|p| p.total()).sum();
        let expected = records
            .iter()
            .filter(|r| r.date != today && r.status.is_some())
            .count() as u32;
        prop_assert_eq!(counted, expected);
    }
}
