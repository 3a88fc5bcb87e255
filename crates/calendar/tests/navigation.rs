//! Integration tests for week navigation and the pinned-week mode.

use chrono::NaiveDate;
use kairos_calendar::{Parity, WeekTable, next_week, prev_week};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn table() -> WeekTable {
    WeekTable::new(vec![
        date(2024, 9, 1),
        date(2024, 9, 8),
        date(2024, 9, 15),
        date(2024, 9, 22),
    ])
    .unwrap()
}

#[test]
fn walk_forward_and_back() {
    let mut number = 1;
    for _ in 0..3 {
        number = next_week(number);
    }
    assert_eq!(number, 4);
    for _ in 0..3 {
        number = prev_week(number);
    }
    assert_eq!(number, 1);
}

#[test]
fn backward_stops_at_week_one() {
    let mut number = 2;
    for _ in 0..5 {
        number = prev_week(number);
    }
    assert_eq!(number, 1);
}

#[test]
fn forward_past_table_yields_clamped_dates() {
    let table = table();
    let mut number = 3;
    number = next_week(number);
    number = next_week(number);
    assert_eq!(number, 5);
    let week = table.week(number);
    assert_eq!(week.number, 5);
    assert_eq!(week.parity, Parity::Odd);
    // Dates repeat the final configured week.
    assert_eq!(week.start, date(2024, 9, 22));
}

#[test]
fn pinned_week_overrides_date_resolution() {
    let table = table();
    let today = date(2024, 9, 16); // naturally week 3
    assert_eq!(table.current(today, None).number, 3);

    let pinned = table.current(today, Some(1));
    assert_eq!(pinned.number, 1);
    assert_eq!(pinned.parity, Parity::Odd);
    assert_eq!(pinned.start, date(2024, 9, 1));
}

#[test]
fn pinned_week_parity_still_derived() {
    let table = table();
    let today = date(2024, 9, 2);
    assert_eq!(table.current(today, Some(4)).parity, Parity::Even);
    assert_eq!(table.current(today, Some(9)).parity, Parity::Odd);
}
