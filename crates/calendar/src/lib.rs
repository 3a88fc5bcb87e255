//! # kairos-calendar
//!
//! Academic week arithmetic for the biweekly (odd/even) timetable cycle.
//!
//! An academic year is configured as an ordered table of week-start dates,
//! one per week, each spanning six days (Monday..Saturday). This crate maps
//! calendar dates to week numbers and parity, week numbers back to date
//! ranges, and teaching days to concrete dates. Resolution never fails:
//! out-of-range inputs degrade to documented defaults (week 1 / odd for
//! unmapped dates, index clamping for out-of-range week numbers).
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use kairos_calendar::{DayOfWeek, WeekTable};
//!
//! let table = WeekTable::new(vec![
//!     NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 9, 8).unwrap(),
//! ])?;
//!
//! let week = table.resolve(NaiveDate::from_ymd_opt(2024, 9, 10).unwrap());
//! assert_eq!(week.number, 2);
//!
//! let wednesday = week.date_of(DayOfWeek::Wednesday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `parity` | Odd/even week classification |
//! | `day` | Teaching days Monday..Saturday |
//! | `week` | The academic week value and week-number navigation |
//! | `table` | The week table and date resolution |
//! | `fmt` | Date-range display helpers |
//! | `error` | Error types |

mod day;
mod error;
mod fmt;
mod parity;
mod table;
mod week;

pub use day::{DayOfWeek, TEACHING_DAYS};
pub use error::CalendarError;
pub use fmt::format_week_range;
pub use parity::Parity;
pub use table::WeekTable;
pub use week::{AcademicWeek, WEEK_SPAN_DAYS, date_for_day, next_week, prev_week};
