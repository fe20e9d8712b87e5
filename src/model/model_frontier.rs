use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use super::model_prereqs::PrerequisiteDepthIndex;
use crate::course::CourseCode;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    depth: u32,
    course: Reverse<CourseCode>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .cmp(&other.depth)
            .then_with(|| self.course.cmp(&other.course))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending goal courses, deepest prerequisite chain first. Ties pop in
/// ascending course code order.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    queued: HashSet<CourseCode>,
}

impl Frontier {
    pub fn from_courses<'c>(
        depths: &PrerequisiteDepthIndex,
        courses: impl IntoIterator<Item = &'c CourseCode>,
    ) -> Self {
        let mut frontier = Self::default();
        for course in courses {
            frontier.push(depths, course);
        }
        frontier
    }

    /// Queues `course` unless it is already pending.
    pub fn push(&mut self, depths: &PrerequisiteDepthIndex, course: &CourseCode) {
        if self.queued.insert(course.clone()) {
            self.heap.push(FrontierEntry {
                depth: depths.depth(course),
                course: Reverse(course.clone()),
            });
        }
    }

    pub fn pop(&mut self) -> Option<CourseCode> {
        let FrontierEntry {
            course: Reverse(course),
            ..
        } = self.heap.pop()?;
        self.queued.remove(&course);
        Some(course)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
