//! AND/OR backtracking over prerequisite alternatives.
//!
//! Every popped course is an AND obligation; its prerequisite alternatives are
//! the OR branches. A branch that cannot be completed is undone by restoring
//! the snapshot taken before it, and the next alternative is tried.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::model_context::SearchContext;
use super::model_frontier::Frontier;
use crate::course::{Alternative, CourseCode};
use crate::error::Result;
use crate::schedule::Schedule;

impl SearchContext<'_> {
    /// Schedules every goal (and whatever prerequisites they pull in) into
    /// `schedule`. `Ok(false)` means no assignment was found; the schedule is
    /// then left in an unspecified partial state and should be discarded.
    pub fn search_goals(&self, goals: &[CourseCode], schedule: &mut Schedule<'_>) -> Result<bool> {
        let frontier = self.frontier(goals);
        self.search(frontier, schedule)
    }

    fn search(&self, mut frontier: Frontier, schedule: &mut Schedule<'_>) -> Result<bool> {
        while let Some(course) = frontier.pop() {
            trace!(course = %course, pending = frontier.len(), "sub-goal chosen");
            if schedule.is_taken(&course) {
                continue;
            }

            let chosen = self.choose_alternative(&course, schedule)?;
            // An elective slot must be backed by a course no sibling slot used.
            if chosen.is_none() && self.electives.group_of(&course).is_some() {
                debug!(course = %course, "no unused alternative left for elective slot");
                return Ok(false);
            }
            if !schedule.schedule_course(&course, chosen)? {
                debug!(course = %course, "could not schedule course, abandoning branch");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Tries `course`'s alternatives in order and returns the first one that is
    /// already satisfied or whose missing courses could all be scheduled.
    fn choose_alternative(
        &self,
        course: &CourseCode,
        schedule: &mut Schedule<'_>,
    ) -> Result<Option<&Alternative>> {
        let info = self.catalog.get(course)?;
        for alternative in &info.prereqs {
            if schedule.alternative_consumed(course, alternative) {
                trace!(course = %course, "alternative already used by this elective group");
                continue;
            }

            let residual: BTreeSet<&CourseCode> = alternative
                .iter()
                .filter(|c| !schedule.is_taken(c))
                .collect();
            if residual.is_empty() {
                return Ok(Some(alternative));
            }

            trace!(course = %course, trying = ?residual, "trying prerequisite alternative");
            let snapshot = schedule.snapshot();
            if self.search(self.frontier(residual), schedule)? {
                return Ok(Some(alternative));
            }
            schedule.restore(snapshot);
            trace!(course = %course, "alternative failed, restored schedule");
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SchedulerConfig;
    use crate::course::CourseInfo;
    use crate::term::Season;

    fn code(d: &str) -> CourseCode {
        CourseCode::new("CS", d)
    }

    fn both() -> [Season; 2] {
        [Season::Fall, Season::Spring]
    }

    #[test]
    fn failed_alternative_leaves_no_trace() {
        let catalog: Catalog = [
            (code("1101"), CourseInfo::new(3, both())),
            (code("never"), CourseInfo::new(3, [])),
            (code("1500"), CourseInfo::new(3, both())),
            (
                code("goal"),
                CourseInfo::new(0, both())
                    .with_alternative([code("1101"), code("never")])
                    .with_alternative([code("1500")]),
            ),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default();
        let goals = [code("goal")];
        let ctx = SearchContext::new(&catalog, &goals, &config).unwrap();
        let mut schedule = ctx.new_schedule(config.limits, &[]);

        assert!(ctx.search_goals(&goals, &mut schedule).unwrap());
        assert!(!schedule.is_taken(&code("1101")));
        assert!(schedule.is_taken(&code("1500")));
        assert!(schedule.is_taken(&code("goal")));
        assert!(schedule.is_consistent());
    }

    #[test]
    fn failed_alternative_restores_exact_snapshot() {
        let catalog: Catalog = [
            (code("1000"), CourseInfo::new(3, both())),
            (code("1101"), CourseInfo::new(3, both())),
            (
                code("2201"),
                CourseInfo::new(3, both()).with_alternative([code("1101")]),
            ),
            (code("never"), CourseInfo::new(3, [])),
            (
                code("goal"),
                CourseInfo::new(3, both()).with_alternative([code("2201"), code("never")]),
            ),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default();
        let goals = [code("goal")];
        let ctx = SearchContext::new(&catalog, &goals, &config).unwrap();
        let mut schedule = ctx.new_schedule(config.limits, &[]);
        assert!(schedule.schedule_course(&code("1000"), None).unwrap());

        let before = schedule.snapshot();
        let chosen = ctx.choose_alternative(&code("goal"), &mut schedule).unwrap();
        assert!(chosen.is_none());
        assert_eq!(schedule.snapshot(), before);
        assert!(schedule.is_consistent());
    }

    #[test]
    fn elective_slots_use_distinct_courses() {
        let slot = CourseInfo::new(0, both())
            .with_alternative([code("3251")])
            .with_alternative([code("3270")])
            .with_alternative([code("3281")]);
        let catalog: Catalog = [
            (code("3251"), CourseInfo::new(3, both())),
            (code("3270"), CourseInfo::new(3, both())),
            (code("3281"), CourseInfo::new(3, both())),
            (code("elective1"), slot.clone()),
            (code("elective2"), slot),
            (
                code("major"),
                CourseInfo::new(0, both()).with_alternative([code("elective1"), code("elective2")]),
            ),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default();
        let goals = [code("major")];
        let ctx = SearchContext::new(&catalog, &goals, &config).unwrap();
        let mut schedule = ctx.new_schedule(config.limits, &[]);

        assert!(ctx.search_goals(&goals, &mut schedule).unwrap());
        let group = ctx.electives.group_of(&code("elective1")).unwrap();
        let consumed = schedule.electives_consumed(group).unwrap();
        assert_eq!(consumed.len(), 2);
        assert!(consumed.contains(&code("3251")));
        assert!(consumed.contains(&code("3270")));
        assert!(!schedule.is_taken(&code("3281")));
    }

    #[test]
    fn already_satisfied_alternative_counts_for_electives() {
        let slot = CourseInfo::new(0, both())
            .with_alternative([code("3251")])
            .with_alternative([code("3270")]);
        let catalog: Catalog = [
            (code("3251"), CourseInfo::new(3, both())),
            (code("3270"), CourseInfo::new(3, both())),
            (code("elective1"), slot.clone()),
            (code("elective2"), slot),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default();
        let goals = [code("elective1"), code("elective2")];
        let ctx = SearchContext::new(&catalog, &goals, &config).unwrap();
        let mut schedule = ctx.new_schedule(config.limits, &[code("3251")]);

        assert!(ctx.search_goals(&goals, &mut schedule).unwrap());
        assert!(schedule.is_taken(&code("3270")));
        assert_eq!(schedule.term_of(&code("3251")), Some(0));
    }

    #[test]
    fn unplaceable_goal_fails() {
        let catalog: Catalog = [
            (code("never"), CourseInfo::new(3, [])),
            (
                code("goal"),
                CourseInfo::new(3, both()).with_alternative([code("never")]),
            ),
        ]
        .into_iter()
        .collect();
        let config = SchedulerConfig::default();
        let goals = [code("goal")];
        let ctx = SearchContext::new(&catalog, &goals, &config).unwrap();
        let mut schedule = ctx.new_schedule(config.limits, &[]);

        assert!(!ctx.search_goals(&goals, &mut schedule).unwrap());
        assert_eq!(schedule.num_scheduled(), 0);
    }
}
