//! Prerequisite depth index used to order the search frontier.
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::Catalog;
use crate::course::CourseCode;
use crate::error::{Result, ScheduleError};

/// Depth of each course's prerequisite chain, for every course reachable from
/// the goals.
///
/// A course with no prerequisites has depth 0. Otherwise its depth is one more
/// than the deepest course named by *any* of its alternatives. This
/// over-approximates the chain actually taken and is only used for ordering.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteDepthIndex {
    depths: HashMap<CourseCode, u32>,
}

impl PrerequisiteDepthIndex {
    pub fn build<'g>(
        catalog: &Catalog,
        goals: impl IntoIterator<Item = &'g CourseCode>,
    ) -> Result<Self> {
        let mut builder = DepthBuilder {
            catalog,
            depths: HashMap::new(),
            visiting: HashSet::new(),
            chain: Vec::new(),
        };
        for goal in goals {
            builder.depth_of(goal)?;
        }
        debug!(courses = builder.depths.len(), "built prerequisite depth index");
        Ok(Self {
            depths: builder.depths,
        })
    }

    /// Courses outside the goals' closure rank as depth 0.
    pub fn depth(&self, code: &CourseCode) -> u32 {
        self.depths.get(code).copied().unwrap_or(0)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.depths.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

struct DepthBuilder<'a> {
    catalog: &'a Catalog,
    depths: HashMap<CourseCode, u32>,
    visiting: HashSet<CourseCode>,
    chain: Vec<CourseCode>,
}

impl DepthBuilder<'_> {
    fn depth_of(&mut self, code: &CourseCode) -> Result<u32> {
        if let Some(depth) = self.depths.get(code) {
            return Ok(*depth);
        }
        if !self.visiting.insert(code.clone()) {
            let start = self.chain.iter().position(|c| c == code).unwrap_or(0);
            let mut chain = self.chain[start..].to_vec();
            chain.push(code.clone());
            return Err(ScheduleError::CyclicPrerequisite {
                course: code.clone(),
                chain,
            });
        }
        self.chain.push(code.clone());

        let catalog = self.catalog;
        let info = catalog.get(code)?;
        let mut deepest: Option<u32> = None;
        for prereq in info.flattened_prereqs() {
            let depth = self.depth_of(prereq)?;
            deepest = Some(deepest.map_or(depth, |d| d.max(depth)));
        }
        let depth = deepest.map_or(0, |d| d + 1);

        self.chain.pop();
        self.visiting.remove(code);
        self.depths.insert(code.clone(), depth);
        Ok(depth)
    }
}
