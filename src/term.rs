//! Term numbering and its translation to academic seasons and years.
//!
//! Term 0 holds courses completed before planning starts. Terms 1 through
//! [`MAX_TERM`] alternate Fall (odd) and Spring (even), two per academic year.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type Term = u32;

/// Bucket for already-completed courses; never schedulable.
pub const INITIAL_TERM: Term = 0;

/// Four years of two terms each.
pub const MAX_TERM: Term = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Fall,
    Spring,
}

impl Season {
    pub fn of_term(term: Term) -> Season {
        if term % 2 == 1 {
            Season::Fall
        } else {
            Season::Spring
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Fall => write!(f, "Fall"),
            Season::Spring => write!(f, "Spring"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YearLabel {
    Frosh,
    Soph,
    Junior,
    Senior,
}

impl YearLabel {
    /// First (Fall) term of the year.
    pub fn first_term(self) -> Term {
        match self {
            YearLabel::Frosh => 1,
            YearLabel::Soph => 3,
            YearLabel::Junior => 5,
            YearLabel::Senior => 7,
        }
    }

    pub fn of_term(term: Term) -> Option<YearLabel> {
        match term {
            1 | 2 => Some(YearLabel::Frosh),
            3 | 4 => Some(YearLabel::Soph),
            5 | 6 => Some(YearLabel::Junior),
            7 | 8 => Some(YearLabel::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            YearLabel::Frosh => "Frosh",
            YearLabel::Soph => "Soph",
            YearLabel::Junior => "Junior",
            YearLabel::Senior => "Senior",
        };
        f.write_str(label)
    }
}

/// A schedulable term expressed as (season, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermSlot {
    pub season: Season,
    pub year: YearLabel,
}

impl TermSlot {
    /// Returns `None` for term 0 and anything past [`MAX_TERM`].
    pub fn from_term(term: Term) -> Option<TermSlot> {
        let year = YearLabel::of_term(term)?;
        Some(TermSlot {
            season: Season::of_term(term),
            year,
        })
    }

    pub fn term(&self) -> Term {
        match self.season {
            Season::Fall => self.year.first_term(),
            Season::Spring => self.year.first_term() + 1,
        }
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.season)
    }
}
