//! Tests for the period calendar
//!
//! These tests verify:
//! - Periods map to dates a whole number of months after the start
//! - Dates map back to the number of whole months elapsed
//! - Month-end clamping round-trips through both directions

use jiff::civil::date;

use crate::calendar::PeriodCalendar;

#[test]
fn test_date_of_adds_months() {
    let calendar = PeriodCalendar::new(date(2025, 1, 15));
    assert_eq!(calendar.date_of(0), date(2025, 1, 15));
    assert_eq!(calendar.date_of(1), date(2025, 2, 15));
    assert_eq!(calendar.date_of(12), date(2026, 1, 15));
    assert_eq!(calendar.date_of(360), date(2055, 1, 15));
}

#[test]
fn test_period_of_counts_whole_months() {
    let calendar = PeriodCalendar::new(date(2025, 1, 15));
    assert_eq!(calendar.period_of(date(2024, 12, 31)), None);
    assert_eq!(calendar.period_of(date(2025, 1, 15)), Some(0));
    assert_eq!(calendar.period_of(date(2025, 2, 14)), Some(0));
    assert_eq!(calendar.period_of(date(2025, 2, 15)), Some(1));
    assert_eq!(calendar.period_of(date(2027, 3, 1)), Some(25));
}

#[test]
fn test_month_end_clamping_round_trips() {
    let calendar = PeriodCalendar::new(date(2025, 1, 31));
    let february = calendar.date_of(1);
    assert_eq!(february, date(2025, 2, 28));
    assert_eq!(calendar.period_of(february), Some(1));

    for period in 0..48 {
        assert_eq!(calendar.period_of(calendar.date_of(period)), Some(period));
    }
}
