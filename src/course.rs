//! Course identifiers and immutable catalog records.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::term::Season;

lazy_static! {
    // Program tags may carry a hyphenated prefix, e.g. "CS-HON".
    static ref COURSE_CODE_RE: Regex =
        Regex::new(r"^((?:[A-Z]+-)?[A-Z]+)\s*(.+?)\s*$").expect("course code pattern compiles");
}

/// A (program, designation) pair such as `CS 3251` or `CS major`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode {
    pub program: String,
    pub designation: String,
}

impl CourseCode {
    pub fn new(program: impl Into<String>, designation: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            designation: designation.into(),
        }
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.designation)
    }
}

impl FromStr for CourseCode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = COURSE_CODE_RE
            .captures(s.trim())
            .ok_or_else(|| ScheduleError::InvalidCourseCode(s.to_string()))?;
        Ok(CourseCode::new(&caps[1], &caps[2]))
    }
}

impl TryFrom<String> for CourseCode {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.to_string()
    }
}

/// One OR-branch of a course's prerequisites; every member is required.
pub type Alternative = BTreeSet<CourseCode>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseInfo {
    pub credits: u32,
    #[serde(default)]
    pub terms: BTreeSet<Season>,
    #[serde(default)]
    pub prereqs: Vec<Alternative>,
}

impl CourseInfo {
    pub fn new(credits: u32, terms: impl IntoIterator<Item = Season>) -> Self {
        Self {
            credits,
            terms: terms.into_iter().collect(),
            prereqs: Vec::new(),
        }
    }

    /// Appends an alternative prerequisite set, tried after the ones already listed.
    pub fn with_alternative(mut self, alternative: impl IntoIterator<Item = CourseCode>) -> Self {
        self.prereqs.push(alternative.into_iter().collect());
        self
    }

    /// Zero-credit courses are milestones ("CS major") rather than real classes.
    pub fn is_high_level(&self) -> bool {
        self.credits == 0
    }

    pub fn offered_in(&self, season: Season) -> bool {
        self.terms.contains(&season)
    }

    /// Every course named by any alternative.
    pub fn flattened_prereqs(&self) -> BTreeSet<&CourseCode> {
        self.prereqs.iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_and_spaced_codes() {
        let compact: CourseCode = "CS1101".parse().unwrap();
        assert_eq!(compact, CourseCode::new("CS", "1101"));

        let spaced: CourseCode = "MATH 2300".parse().unwrap();
        assert_eq!(spaced, CourseCode::new("MATH", "2300"));

        let hyphen: CourseCode = "CS-HON 2000".parse().unwrap();
        assert_eq!(hyphen.program, "CS-HON");
    }

    #[test]
    fn display_reparses_to_same_code() {
        let code = CourseCode::new("CS", "major");
        let back: CourseCode = code.to_string().parse().unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn designation_may_contain_spaces() {
        let code = CourseCode::new("CS", "major elective");
        let back: CourseCode = code.to_string().parse().unwrap();
        assert_eq!(back, code);

        let padded: CourseCode = "  CS   2201  ".parse().unwrap();
        assert_eq!(padded, CourseCode::new("CS", "2201"));
    }

    #[test]
    fn rejects_codes_without_program() {
        assert!(matches!(
            "1101".parse::<CourseCode>(),
            Err(ScheduleError::InvalidCourseCode(_))
        ));
    }

    #[test]
    fn flattened_prereqs_union_alternatives() {
        let a = CourseCode::new("CS", "1101");
        let b = CourseCode::new("CS", "1104");
        let info = CourseInfo::new(3, [Season::Fall])
            .with_alternative([a.clone()])
            .with_alternative([a.clone(), b.clone()]);
        let flat = info.flattened_prereqs();
        assert_eq!(flat.len(), 2);
        assert!(flat.contains(&a) && flat.contains(&b));
    }
}
