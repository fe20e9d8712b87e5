use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::term::{MAX_TERM, Term};

pub const DEFAULT_MAX_CREDITS_PER_TERM: u32 = 18;
pub const DEFAULT_MIN_CREDITS_PER_TERM: u32 = 12;

/// Term horizon and credit load limits for one search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermLimits {
    pub max_term: Term,
    pub max_credits_per_term: u32,
    pub min_credits_per_term: u32,
}

impl Default for TermLimits {
    fn default() -> Self {
        Self {
            max_term: MAX_TERM,
            max_credits_per_term: DEFAULT_MAX_CREDITS_PER_TERM,
            min_credits_per_term: DEFAULT_MIN_CREDITS_PER_TERM,
        }
    }
}

impl TermLimits {
    pub fn with_max_term(self, max_term: Term) -> Self {
        Self { max_term, ..self }
    }
}

/// How many terms the search may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermBound {
    /// One attempt using every term up to `max_term`.
    #[default]
    Fixed,
    /// One attempt per bound 1..=max_term; the plan with the fewest courses wins.
    Iterative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchedulerConfig {
    pub limits: TermLimits,
    pub term_bound: TermBound,
    /// Pad terms up to the minimum credit load once a plan is found.
    pub fill_terms: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            limits: TermLimits::default(),
            term_bound: TermBound::Fixed,
            fill_terms: true,
        }
    }
}

impl SchedulerConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: SchedulerConfig =
            toml::from_str(raw).context("failed to parse scheduler config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scheduler config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.max_term == 0 || limits.max_term > MAX_TERM {
            return Err(ScheduleError::InvalidConfig(format!(
                "max_term must be between 1 and {MAX_TERM}, got {}",
                limits.max_term
            )));
        }
        if limits.max_credits_per_term == 0 {
            return Err(ScheduleError::InvalidConfig(
                "max_credits_per_term must be positive".to_string(),
            ));
        }
        if limits.min_credits_per_term > limits.max_credits_per_term {
            return Err(ScheduleError::InvalidConfig(format!(
                "min_credits_per_term ({}) exceeds max_credits_per_term ({})",
                limits.min_credits_per_term, limits.max_credits_per_term
            )));
        }
        Ok(())
    }
}
