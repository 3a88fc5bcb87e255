//! Integration tests for week-number -> date-range lookup.

use chrono::NaiveDate;
use kairos_calendar::{DayOfWeek, WeekTable, date_for_day, format_week_range};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn starts() -> Vec<NaiveDate> {
    (0..17_u64)
        .map(|i| date(2024, 9, 1) + chrono::Days::new(7 * i))
        .collect()
}

#[test]
fn round_trip_every_week() {
    let starts = starts();
    let table = WeekTable::new(starts.clone()).unwrap();
    for number in 1..=starts.len() as u32 {
        let week = table.week(number);
        assert_eq!(week.start, starts[number as usize - 1]);
        assert_eq!(week.end, week.start + chrono::Days::new(5));
    }
}

#[test]
fn clamps_past_the_table() {
    let table = WeekTable::new(starts()).unwrap();
    let last = table.week(17);
    for number in 18..=25_u32 {
        let week = table.week(number);
        assert_eq!(week.number, number);
        assert_eq!(week.start, last.start, "week {number} repeats final dates");
        assert_eq!(week.end, last.end);
    }
}

#[test]
fn day_dates_within_a_week() {
    let table = WeekTable::new(starts()).unwrap();
    let week = table.week(5);
    assert_eq!(week.start, date(2024, 9, 29));
    assert_eq!(date_for_day(week.start, DayOfWeek::Monday), date(2024, 9, 29));
    assert_eq!(date_for_day(week.start, DayOfWeek::Tuesday), date(2024, 9, 30));
    // Month rollover inside the week.
    assert_eq!(date_for_day(week.start, DayOfWeek::Wednesday), date(2024, 10, 1));
    assert_eq!(date_for_day(week.start, DayOfWeek::Saturday), date(2024, 10, 4));
}

#[test]
fn header_format() {
    let table = WeekTable::new(starts()).unwrap();
    let week = table.week(1);
    assert_eq!(format_week_range(week.start, week.end), "01.09 - 06.09");
    let week = table.week(5);
    assert_eq!(format_week_range(week.start, week.end), "29.09 - 04.10");
}
