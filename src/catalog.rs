//! The course catalog handed to the planner.
//!
//! A catalog is built once by the caller (from a spreadsheet export, JSON, or
//! by hand) and is only ever read while planning.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::course::{CourseCode, CourseInfo};
use crate::error::{Result, ScheduleError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    courses: BTreeMap<CourseCode, CourseInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON keyed by course code, e.g.
    /// `{"CS 1101": {"credits": 3, "terms": ["Fall"], "prereqs": []}}`.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse course catalog JSON")
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read course catalog {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn insert(&mut self, code: CourseCode, info: CourseInfo) -> Option<CourseInfo> {
        self.courses.insert(code, info)
    }

    /// Looks up a course; a miss means the catalog is not total over its references.
    pub fn get(&self, code: &CourseCode) -> Result<&CourseInfo> {
        self.courses
            .get(code)
            .ok_or_else(|| ScheduleError::MissingCourse(code.clone()))
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.contains_key(code)
    }

    /// Courses in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseCode, &CourseInfo)> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sanity checks on a freshly loaded catalog. Planning does not require a
    /// clean report, but a missing prerequisite will surface as
    /// [`ScheduleError::MissingCourse`] once the search reaches it.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (code, info) in &self.courses {
            if info.terms.is_empty() {
                issues.push(CatalogIssue::NeverOffered(code.clone()));
            }
            for prereq in info.flattened_prereqs() {
                if prereq == code {
                    issues.push(CatalogIssue::SelfPrerequisite(code.clone()));
                } else if !self.courses.contains_key(prereq) {
                    issues.push(CatalogIssue::MissingPrerequisite {
                        course: code.clone(),
                        prereq: prereq.clone(),
                    });
                }
            }
        }
        issues
    }
}

impl FromIterator<(CourseCode, CourseInfo)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (CourseCode, CourseInfo)>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    MissingPrerequisite {
        course: CourseCode,
        prereq: CourseCode,
    },
    NeverOffered(CourseCode),
    SelfPrerequisite(CourseCode),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MissingPrerequisite { course, prereq } => {
                write!(f, "{course} requires {prereq}, which is not in the catalog")
            }
            CatalogIssue::NeverOffered(course) => write!(f, "{course} is not offered in any term"),
            CatalogIssue::SelfPrerequisite(course) => write!(f, "{course} lists itself as a prerequisite"),
        }
    }
}
