#![allow(dead_code)]

use std::sync::Once;

use ross_planner::{Catalog, CourseCode, CourseInfo, Season};

static TRACING: Once = Once::new();

/// Routes planner traces to the test writer; set `RUST_LOG=ross_planner=trace`
/// to follow a search.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn cs(designation: &str) -> CourseCode {
    CourseCode::new("CS", designation)
}

pub fn both_terms() -> [Season; 2] {
    [Season::Fall, Season::Spring]
}

pub fn catalog<const N: usize>(courses: [(CourseCode, CourseInfo); N]) -> Catalog {
    courses.into_iter().collect()
}
