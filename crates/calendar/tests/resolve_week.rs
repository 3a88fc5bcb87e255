//! Integration tests for date -> week resolution over realistic tables.

use chrono::NaiveDate;
use kairos_calendar::{Parity, WeekTable};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The 2024 autumn semester reference table: 17 weeks starting Sep 1,
/// one start every 7 days.
fn autumn_2024() -> WeekTable {
    let starts = (0..17_u64)
        .map(|i| date(2024, 9, 1) + chrono::Days::new(7 * i))
        .collect();
    WeekTable::new(starts).unwrap()
}

#[test]
fn boundary_inclusivity() {
    // A compact table where week 2 starts the day after week 1's span
    // ends: every day of week 1 resolves to week 1, the next day to week 2.
    let table = WeekTable::new(vec![date(2024, 9, 1), date(2024, 9, 7)]).unwrap();

    for offset in 0..=5_u64 {
        let day = date(2024, 9, 1) + chrono::Days::new(offset);
        let week = table.resolve(day);
        assert_eq!(week.number, 1, "day {day} should be week 1");
        assert_eq!(week.parity, Parity::Odd);
    }

    let week = table.resolve(date(2024, 9, 7));
    assert_eq!(week.number, 2);
    assert_eq!(week.parity, Parity::Even);
}

#[test]
fn fallback_before_first_week() {
    let table = autumn_2024();
    let week = table.resolve(date(2024, 1, 1));
    assert_eq!(week.number, 1);
    assert_eq!(week.parity, Parity::Odd);
    assert_eq!(week.start, date(2024, 9, 1));
    assert_eq!(week.end, date(2024, 9, 6));
}

#[test]
fn fallback_after_last_week() {
    let table = autumn_2024();
    // Last configured week starts Dec 22 and ends Dec 27.
    let week = table.resolve(date(2025, 2, 1));
    assert_eq!(week.number, 1);
    assert_eq!(week.parity, Parity::Odd);
}

#[test]
fn gap_day_between_spans_falls_back() {
    // With 7-day-spaced starts each span covers six days, leaving one
    // uncovered day per week; those days take the week-1 fallback.
    let table = autumn_2024();
    let week = table.resolve(date(2024, 9, 7));
    assert_eq!(week.number, 1);
    assert_eq!(week.parity, Parity::Odd);
}

#[test]
fn every_span_day_resolves_to_its_week() {
    let table = autumn_2024();
    for number in 1..=17_u32 {
        let expected = table.week(number);
        for offset in 0..=5_u64 {
            let day = expected.start + chrono::Days::new(offset);
            let got = table.resolve(day);
            assert_eq!(got.number, number, "day {day}");
            assert_eq!(got.parity, Parity::of_week(number));
        }
    }
}

#[test]
fn parity_alternates_down_the_table() {
    let table = autumn_2024();
    assert_eq!(table.week(1).parity, Parity::Odd);
    assert_eq!(table.week(2).parity, Parity::Even);
    assert_eq!(table.week(16).parity, Parity::Even);
    assert_eq!(table.week(17).parity, Parity::Odd);
}
