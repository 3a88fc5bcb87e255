//! # kairos-resolve
//!
//! Slot resolution for the academic timetable: given a group, a date, and
//! a time slot, which session (if any) effectively occupies it.
//!
//! Three override tiers apply, first match wins and tiers never combine:
//!
//! ```text
//!  ┌────────────────┐     ┌────────────────┐     ┌────────────────┐
//!  │ Faculty plan   │────▶│  Replacement   │────▶│ Base schedule  │──▶ Empty
//!  │ day (per date) │     │ (exact date)   │     │ (day + parity) │
//!  └────────────────┘     └────────────────┘     └────────────────┘
//! ```
//!
//! Resolution is pure computation over a borrowed read-only snapshot: no
//! I/O, no clock, no errors. An unmatched query resolves to
//! [`Occupant::Empty`], never a failure.
//!
//! ## Quick start
//!
//! ```ignore
//! use kairos_resolve::{Occupant, Resolver, SlotQuery, Slots};
//!
//! let resolver = Resolver::new(&base, &replacements, &cancellations, &plan_days);
//! let occupant = resolver.resolve(&SlotQuery {
//!     group: &group,
//!     faculty_id: "1",
//!     date,
//!     day,
//!     parity: week.parity,
//!     time_slot_id: "slot-1",
//! });
//! match occupant {
//!     Occupant::PlanDay(plan) => println!("{}", plan.description),
//!     Occupant::Replacement(r) => println!("{}", r.subject_id),
//!     Occupant::Base(b) => println!("{}", b.subject_id),
//!     Occupant::Empty => {}
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | Snapshot entities: base entries, replacements, cancellations, plan days |
//! | `slots` | The validated daily time-slot sequence |
//! | `occupant` | The closed resolution result sum type |
//! | `resolver` | Three-tier priority resolution |
//! | `error` | Error types |

mod error;
mod model;
mod occupant;
mod resolver;
mod slots;

pub use error::SlotsError;
pub use model::{
    BaseEntry, Cancellation, PlanDay, ReplacementEntry, Subject, SubjectKind, Teacher,
};
pub use occupant::Occupant;
pub use resolver::{Resolver, SlotQuery};
pub use slots::{Slots, TimeSlot};
