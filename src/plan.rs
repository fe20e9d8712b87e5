use std::fmt;

use serde::{Deserialize, Serialize};

use crate::course::CourseCode;
use crate::term::{Term, TermSlot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCourse {
    pub course: CourseCode,
    pub slot: TermSlot,
    pub credits: u32,
}

/// A finished plan, ordered by term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    entries: Vec<PlannedCourse>,
}

impl Plan {
    pub(crate) fn from_entries(mut entries: Vec<PlannedCourse>) -> Self {
        entries.sort_by(|a, b| {
            a.slot
                .term()
                .cmp(&b.slot.term())
                .then_with(|| a.course.cmp(&b.course))
        });
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedCourse> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseCode> {
        self.entries.iter().map(|entry| &entry.course)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.entries.iter().any(|entry| &entry.course == code)
    }

    pub fn term_of(&self, code: &CourseCode) -> Option<Term> {
        self.entries
            .iter()
            .find(|entry| &entry.course == code)
            .map(|entry| entry.slot.term())
    }

    pub fn credits_in(&self, term: Term) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.slot.term() == term)
            .map(|entry| entry.credits)
            .sum()
    }

    pub fn total_credits(&self) -> u32 {
        self.entries.iter().map(|entry| entry.credits).sum()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a PlannedCourse;
    type IntoIter = std::slice::Iter<'a, PlannedCourse>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "{:<14} {:<12} {:>2}",
                entry.slot.to_string(),
                entry.course.to_string(),
                entry.credits
            )?;
        }
        Ok(())
    }
}
