//! Multi-term course planning by constraint-directed backtracking.
//!
//! Given a [`Catalog`], a list of goal courses (often zero-credit milestones
//! such as a major) and the courses already completed, [`schedule_courses`]
//! searches the AND/OR graph of prerequisite alternatives for a term-by-term
//! plan that respects course offerings and per-term credit limits.

pub mod catalog;
pub mod config;
pub mod course;
pub mod electives;
pub mod error;
pub mod model;
pub mod plan;
pub mod schedule;
pub mod term;

pub use catalog::{Catalog, CatalogIssue};
pub use config::{SchedulerConfig, TermBound, TermLimits};
pub use course::{Alternative, CourseCode, CourseInfo};
pub use electives::ElectiveGroups;
pub use error::{Result, ScheduleError};
pub use model::{PrerequisiteDepthIndex, SearchContext, SearchOutcome, schedule_courses};
pub use plan::{Plan, PlannedCourse};
pub use schedule::{Schedule, ScheduleSnapshot};
pub use term::{MAX_TERM, Season, Term, TermSlot, YearLabel};
