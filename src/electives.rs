//! Elective groups: interchangeable high-level requirements.
//!
//! Zero-credit courses whose catalog records are identical (same offered terms,
//! same prerequisite alternatives) stand for repeated slots of one elective
//! requirement, e.g. "technical elective" listed twice under a major. Each slot
//! must be fulfilled by a different course.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::catalog::Catalog;
use crate::course::{CourseCode, CourseInfo};

#[derive(Debug, Clone, Default)]
pub struct ElectiveGroups {
    groups: Vec<BTreeSet<CourseCode>>,
    membership: HashMap<CourseCode, usize>,
}

impl ElectiveGroups {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut by_signature: BTreeMap<&CourseInfo, BTreeSet<CourseCode>> = BTreeMap::new();
        for (code, info) in catalog.iter() {
            if info.is_high_level() && !info.prereqs.is_empty() {
                by_signature.entry(info).or_default().insert(code.clone());
            }
        }

        let mut electives = Self::default();
        for members in by_signature.into_values().filter(|m| m.len() > 1) {
            let idx = electives.groups.len();
            for code in &members {
                electives.membership.insert(code.clone(), idx);
            }
            electives.groups.push(members);
        }
        electives
    }

    pub fn group_of(&self, code: &CourseCode) -> Option<usize> {
        self.membership.get(code).copied()
    }

    pub fn members(&self, group: usize) -> Option<&BTreeSet<CourseCode>> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
