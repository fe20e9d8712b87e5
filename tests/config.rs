use std::io::Write;

use ross_planner::{ScheduleError, SchedulerConfig, TermBound, TermLimits};

#[test]
fn defaults_match_four_year_plan() {
    let config = SchedulerConfig::default();
    assert_eq!(config.limits.max_term, 8);
    assert_eq!(config.limits.max_credits_per_term, 18);
    assert_eq!(config.limits.min_credits_per_term, 12);
    assert_eq!(config.term_bound, TermBound::Fixed);
    assert!(config.fill_terms);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = SchedulerConfig::from_toml_str(
        r#"
        term_bound = "iterative"

        [limits]
        max_term = 6
        "#,
    )
    .unwrap();
    assert_eq!(config.term_bound, TermBound::Iterative);
    assert_eq!(
        config.limits,
        TermLimits {
            max_term: 6,
            ..TermLimits::default()
        }
    );
    assert!(config.fill_terms);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fill_terms = false").unwrap();
    writeln!(file, "[limits]").unwrap();
    writeln!(file, "max_credits_per_term = 15").unwrap();
    writeln!(file, "min_credits_per_term = 9").unwrap();

    let config = SchedulerConfig::from_toml_path(file.path()).unwrap();
    assert!(!config.fill_terms);
    assert_eq!(config.limits.max_credits_per_term, 15);
    assert_eq!(config.limits.min_credits_per_term, 9);
    assert_eq!(config.limits.max_term, 8);
}

#[test]
fn rejects_horizon_beyond_four_years() {
    let err = SchedulerConfig::from_toml_str("[limits]\nmax_term = 10\n").unwrap_err();
    let cause = err.downcast_ref::<ScheduleError>().expect("schedule error");
    assert!(matches!(cause, ScheduleError::InvalidConfig(_)));
}

#[test]
fn rejects_inverted_credit_limits() {
    let config = SchedulerConfig {
        limits: TermLimits {
            max_credits_per_term: 10,
            min_credits_per_term: 12,
            ..TermLimits::default()
        },
        ..SchedulerConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ScheduleError::InvalidConfig(_))
    ));
}

#[test]
fn unknown_term_bound_is_a_parse_error() {
    let err = SchedulerConfig::from_toml_str("term_bound = \"sometimes\"").unwrap_err();
    assert!(err.to_string().contains("scheduler config"));
}
