//! Construction scheduling domain models.
//!
//! Provides the core data types on both sides of the engine: the work
//! breakdown structure fed in (template → phases → work packages →
//! activities) and the computed schedule coming out.
//!
//! # WBS Hierarchy
//!
//! | Level | Type | Example |
//! |-------|------|---------|
//! | 1 | Phase | Superstructure |
//! | 2 | Work package | Frame & roof |
//! | 3 | Activity | Roof covering, 2 weeks |

mod activity;
mod phase;
mod schedule;
mod template;
mod work_package;

pub use activity::Activity;
pub use phase::Phase;
pub use schedule::{ComputedSchedule, ScheduledActivity};
pub use template::{ProjectType, ScheduleTemplate};
pub use work_package::WorkPackage;
