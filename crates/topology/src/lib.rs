//! # kairos-topology
//!
//! Faculty/course topology: which streams and groups exist for a given
//! faculty and course year, and the composite group key that joins
//! selection state to schedule entries.
//!
//! Stream and group counts come from course-configuration records with a
//! layered override (administrator edits win over the static defaults);
//! a key with no record at all falls back to 1 stream of 5 groups, so
//! enumeration always yields a non-empty `1..=N` sequence.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_topology::{CourseConfig, GroupId, Topology};
//!
//! let topo = Topology::new(vec![CourseConfig::new("1", 1, 2, 3)])
//!     .with_overrides(overrides);
//!
//! assert_eq!(topo.streams_for("1", 1), vec![1, 2]);
//! let key: GroupId = "1-1-2-3".parse()?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `group_id` | The composite `faculty-course-stream-group` key |
//! | `course` | Faculty and course-configuration records |
//! | `topology` | Layered stream/group enumeration |
//! | `error` | Error types |

mod course;
mod error;
mod group_id;
mod topology;

pub use course::{CourseConfig, Faculty};
pub use error::TopologyError;
pub use group_id::GroupId;
pub use topology::Topology;
