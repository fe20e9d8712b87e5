//! Shared, read-only inputs of a planning run.
use super::model_frontier::Frontier;
use super::model_prereqs::PrerequisiteDepthIndex;
use crate::catalog::Catalog;
use crate::config::{SchedulerConfig, TermLimits};
use crate::course::CourseCode;
use crate::electives::ElectiveGroups;
use crate::error::Result;
use crate::schedule::Schedule;

/// Everything the search reads but never mutates: the catalog, the depth
/// heuristic built from the goals, the elective groups and the configuration.
/// Built once and reused across term-bound attempts.
pub struct SearchContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SchedulerConfig,
    pub depths: PrerequisiteDepthIndex,
    pub electives: ElectiveGroups,
}

impl<'a> SearchContext<'a> {
    /// Validates the configuration and builds the depth index, failing on
    /// unknown courses or prerequisite cycles reachable from `goals`.
    pub fn new(
        catalog: &'a Catalog,
        goals: &[CourseCode],
        config: &'a SchedulerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let depths = PrerequisiteDepthIndex::build(catalog, goals)?;
        let electives = ElectiveGroups::from_catalog(catalog);
        Ok(Self {
            catalog,
            config,
            depths,
            electives,
        })
    }

    /// A fresh schedule for one attempt, bounded by `limits`.
    pub fn new_schedule(&self, limits: TermLimits, initial: &[CourseCode]) -> Schedule<'_> {
        Schedule::new(
            self.catalog,
            &self.electives,
            limits,
            initial.iter().cloned(),
        )
    }

    pub fn frontier<'c>(&self, courses: impl IntoIterator<Item = &'c CourseCode>) -> Frontier {
        Frontier::from_courses(&self.depths, courses)
    }
}
