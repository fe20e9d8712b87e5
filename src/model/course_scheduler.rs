use tracing::{debug, info};

use super::model_context::SearchContext;
use super::model_fill::fill_terms;
use crate::catalog::Catalog;
use crate::config::{SchedulerConfig, TermBound};
use crate::course::CourseCode;
use crate::error::Result;
use crate::plan::Plan;
use crate::schedule::Schedule;

/// Result of a completed search. `NoSolution` is an ordinary answer, distinct
/// from a successful plan that happens to be empty (all goals already met).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Plan),
    NoSolution,
}

impl SearchOutcome {
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SearchOutcome::Found(plan) => Some(plan),
            SearchOutcome::NoSolution => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan> {
        match self {
            SearchOutcome::Found(plan) => Some(plan),
            SearchOutcome::NoSolution => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Plans `goals` on top of the already-completed `initial` courses.
///
/// Errors are reserved for bad input: an unknown course, a prerequisite cycle,
/// or an invalid configuration. An exhausted search returns
/// [`SearchOutcome::NoSolution`].
pub fn schedule_courses(
    catalog: &Catalog,
    goals: &[CourseCode],
    initial: &[CourseCode],
    config: &SchedulerConfig,
) -> Result<SearchOutcome> {
    let ctx = SearchContext::new(catalog, goals, config)?;
    let max_term = config.limits.max_term;
    let bounds = match config.term_bound {
        TermBound::Fixed => max_term..=max_term,
        TermBound::Iterative => 1..=max_term,
    };

    let mut best: Option<Schedule<'_>> = None;
    for bound in bounds {
        let mut schedule = ctx.new_schedule(config.limits.with_max_term(bound), initial);
        if !ctx.search_goals(goals, &mut schedule)? {
            debug!(bound, "no plan within term bound");
            continue;
        }
        let count = schedule.num_scheduled();
        debug!(bound, courses = count, "found plan within term bound");
        if best.as_ref().is_none_or(|b| count < b.num_scheduled()) {
            best = Some(schedule);
        }
    }

    let Some(mut schedule) = best else {
        info!(goals = goals.len(), "no solution found");
        return Ok(SearchOutcome::NoSolution);
    };
    if config.fill_terms {
        fill_terms(&mut schedule)?;
    }
    let plan = schedule.plan()?;
    info!(
        courses = plan.len(),
        credits = plan.total_credits(),
        "course plan found"
    );
    Ok(SearchOutcome::Found(plan))
}
