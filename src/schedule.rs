//! Mutable schedule state explored by the search.
//!
//! The state records which course sits in which term, the credit load of each
//! term, and which courses have been spent on elective slots. The search takes
//! a [`ScheduleSnapshot`] before every tentative branch and restores it when the
//! branch fails, so sibling alternatives always start from the same baseline.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::catalog::Catalog;
use crate::config::TermLimits;
use crate::course::{Alternative, CourseCode, CourseInfo};
use crate::electives::ElectiveGroups;
use crate::error::Result;
use crate::plan::{Plan, PlannedCourse};
use crate::term::{INITIAL_TERM, MAX_TERM, Season, Term, TermSlot};

/// Value copy of every mutable field of a [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    scheduled: BTreeMap<Term, BTreeSet<CourseCode>>,
    courses_taken: BTreeSet<CourseCode>,
    credits: BTreeMap<Term, u32>,
    electives_consumed: BTreeMap<usize, BTreeSet<CourseCode>>,
}

#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    catalog: &'a Catalog,
    electives: &'a ElectiveGroups,
    limits: TermLimits,
    scheduled: BTreeMap<Term, BTreeSet<CourseCode>>,
    courses_taken: BTreeSet<CourseCode>,
    credits: BTreeMap<Term, u32>,
    electives_consumed: BTreeMap<usize, BTreeSet<CourseCode>>,
}

impl<'a> Schedule<'a> {
    /// Starts a schedule whose term 0 holds the already-completed courses.
    /// A horizon past [`MAX_TERM`] is clamped, since later terms have no
    /// season/year slot in a plan.
    pub fn new(
        catalog: &'a Catalog,
        electives: &'a ElectiveGroups,
        limits: TermLimits,
        initial: impl IntoIterator<Item = CourseCode>,
    ) -> Self {
        let completed: BTreeSet<CourseCode> = initial.into_iter().collect();
        let mut scheduled = BTreeMap::new();
        scheduled.insert(INITIAL_TERM, completed.clone());
        let limits = limits.with_max_term(limits.max_term.min(MAX_TERM));
        Self {
            catalog,
            electives,
            limits,
            scheduled,
            courses_taken: completed,
            credits: BTreeMap::new(),
            electives_consumed: BTreeMap::new(),
        }
    }

    pub fn limits(&self) -> TermLimits {
        self.limits
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn is_taken(&self, code: &CourseCode) -> bool {
        self.courses_taken.contains(code)
    }

    pub fn courses_taken(&self) -> &BTreeSet<CourseCode> {
        &self.courses_taken
    }

    pub fn courses_in(&self, term: Term) -> impl Iterator<Item = &CourseCode> {
        self.scheduled.get(&term).into_iter().flatten()
    }

    pub fn credits_in(&self, term: Term) -> u32 {
        self.credits.get(&term).copied().unwrap_or(0)
    }

    pub fn term_of(&self, code: &CourseCode) -> Option<Term> {
        self.scheduled
            .iter()
            .find(|(_, courses)| courses.contains(code))
            .map(|(term, _)| *term)
    }

    /// Courses placed by planning, excluding the initial term.
    pub fn num_scheduled(&self) -> usize {
        self.scheduled
            .range(INITIAL_TERM + 1..)
            .map(|(_, courses)| courses.len())
            .sum()
    }

    /// Courses already spent on slots of the given elective group.
    pub fn electives_consumed(&self, group: usize) -> Option<&BTreeSet<CourseCode>> {
        self.electives_consumed.get(&group)
    }

    /// True when `code` is an elective and any course of `alternative` already
    /// fulfilled another slot of its group.
    pub fn alternative_consumed(&self, code: &CourseCode, alternative: &Alternative) -> bool {
        let Some(group) = self.electives.group_of(code) else {
            return false;
        };
        self.electives_consumed
            .get(&group)
            .is_some_and(|consumed| alternative.iter().any(|c| consumed.contains(c)))
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            scheduled: self.scheduled.clone(),
            courses_taken: self.courses_taken.clone(),
            credits: self.credits.clone(),
            electives_consumed: self.electives_consumed.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: ScheduleSnapshot) {
        self.scheduled = snapshot.scheduled;
        self.courses_taken = snapshot.courses_taken;
        self.credits = snapshot.credits;
        self.electives_consumed = snapshot.electives_consumed;
    }

    /// Places `code` in the earliest admissible term.
    ///
    /// Returns `Ok(true)` without touching the state when the course is
    /// already taken, and `Ok(false)` when no term up to the horizon admits it.
    /// On success an elective course records `chosen` as consumed for its group.
    pub fn schedule_course(
        &mut self,
        code: &CourseCode,
        chosen: Option<&Alternative>,
    ) -> Result<bool> {
        if self.is_taken(code) {
            return Ok(true);
        }
        let catalog = self.catalog;
        let info = catalog.get(code)?;
        for term in 1..=self.limits.max_term {
            if self.admits(code, info, term) {
                self.place(code, info, term);
                if let Some(alternative) = chosen {
                    self.record_elective(code, alternative);
                }
                return Ok(true);
            }
        }
        trace!(course = %code, max_term = self.limits.max_term, "no term admits course");
        Ok(false)
    }

    /// Places `code` in exactly `term`, under the same checks as
    /// [`Schedule::schedule_course`].
    pub fn schedule_course_in(&mut self, code: &CourseCode, term: Term) -> Result<bool> {
        if self.is_taken(code) {
            return Ok(false);
        }
        if term == INITIAL_TERM || term > self.limits.max_term {
            return Ok(false);
        }
        let catalog = self.catalog;
        let info = catalog.get(code)?;
        if !self.admits(code, info, term) {
            return Ok(false);
        }
        self.place(code, info, term);
        Ok(true)
    }

    /// Marks every course of `alternative` as spent on `code`'s elective group.
    /// Does nothing for courses outside any group.
    pub fn record_elective(&mut self, code: &CourseCode, alternative: &Alternative) {
        if let Some(group) = self.electives.group_of(code) {
            self.electives_consumed
                .entry(group)
                .or_default()
                .extend(alternative.iter().cloned());
        }
    }

    fn admits(&self, code: &CourseCode, info: &CourseInfo, term: Term) -> bool {
        self.credits_in(term)
            .checked_add(info.credits)
            .is_some_and(|load| load <= self.limits.max_credits_per_term)
            && info.offered_in(Season::of_term(term))
            && !self.is_taken(code)
            && self.requirements_satisfied(info, term)
    }

    /// At least one alternative must be complete in the terms before `term`.
    /// High-level requirements may also count work done in `term` itself.
    fn requirements_satisfied(&self, info: &CourseInfo, term: Term) -> bool {
        if info.prereqs.is_empty() {
            return true;
        }
        let last = if info.is_high_level() { term } else { term - 1 };
        let done: BTreeSet<&CourseCode> = self
            .scheduled
            .range(INITIAL_TERM..=last)
            .flat_map(|(_, courses)| courses.iter())
            .collect();
        info.prereqs
            .iter()
            .any(|alternative| alternative.iter().all(|c| done.contains(c)))
    }

    fn place(&mut self, code: &CourseCode, info: &CourseInfo, term: Term) {
        self.scheduled.entry(term).or_default().insert(code.clone());
        self.courses_taken.insert(code.clone());
        let load = self.credits.entry(term).or_insert(0);
        *load = load.saturating_add(info.credits);
        trace!(course = %code, term, credits = info.credits, "placed course");
        debug_assert!(self.is_consistent());
    }

    /// Checks the structural invariants: `courses_taken` is exactly the union
    /// of all terms, no course sits in two terms, and no term exceeds the
    /// credit cap.
    pub fn is_consistent(&self) -> bool {
        let mut seen = BTreeSet::new();
        for courses in self.scheduled.values() {
            for code in courses {
                if !seen.insert(code) {
                    return false;
                }
            }
        }
        let union_matches = seen.len() == self.courses_taken.len()
            && self.courses_taken.iter().all(|c| seen.contains(c));
        let within_cap = self
            .credits
            .iter()
            .all(|(term, credits)| *term == INITIAL_TERM || *credits <= self.limits.max_credits_per_term);
        union_matches && within_cap
    }

    /// The planned courses in term order; term 0 is not part of the plan.
    pub fn plan(&self) -> Result<Plan> {
        let mut entries = Vec::with_capacity(self.num_scheduled());
        for (term, courses) in self.scheduled.range(INITIAL_TERM + 1..) {
            let Some(slot) = TermSlot::from_term(*term) else {
                continue;
            };
            for code in courses {
                entries.push(PlannedCourse {
                    course: code.clone(),
                    slot,
                    credits: self.catalog.get(code)?.credits,
                });
            }
        }
        Ok(Plan::from_entries(entries))
    }
}
