//! Search engine for the course planner.

mod course_scheduler;
mod model_context;
mod model_fill;
mod model_frontier;
mod model_prereqs;
mod model_search;

pub use course_scheduler::*;
pub use model_context::SearchContext;
pub use model_fill::fill_terms;
pub use model_frontier::Frontier;
pub use model_prereqs::PrerequisiteDepthIndex;
