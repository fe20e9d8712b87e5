use thiserror::Error;

use crate::course::CourseCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("course {0} is not in the catalog")]
    MissingCourse(CourseCode),
    #[error("prerequisite cycle through {course} (chain of {} courses)", .chain.len())]
    CyclicPrerequisite {
        course: CourseCode,
        chain: Vec<CourseCode>,
    },
    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid course code {0:?}")]
    InvalidCourseCode(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
