//! Post-pass that pads light terms with extra catalog courses.
use tracing::debug;

use crate::error::Result;
use crate::schedule::Schedule;
use crate::term::Term;

/// One past the last term that carries credits; terms from there on are past
/// graduation and stay empty. `None` when no term carries credits.
fn stop_term(schedule: &Schedule<'_>) -> Option<Term> {
    (1..=schedule.limits().max_term)
        .rev()
        .find(|term| schedule.credits_in(*term) > 0)
        .map(|last| last + 1)
}

/// Fills every term before the stop term up to the minimum credit load with
/// any admissible catalog course, scanning the catalog repeatedly until the
/// load is reached or a full pass adds nothing. Returns how many courses were
/// added.
pub fn fill_terms(schedule: &mut Schedule<'_>) -> Result<usize> {
    let Some(stop) = stop_term(schedule) else {
        return Ok(0);
    };
    let catalog = schedule.catalog();
    let min_credits = schedule.limits().min_credits_per_term;
    let mut added = 0;

    for term in 1..stop {
        while schedule.credits_in(term) < min_credits {
            let mut progressed = false;
            for (code, info) in catalog.iter() {
                if schedule.credits_in(term) >= min_credits {
                    break;
                }
                if info.is_high_level() || schedule.is_taken(code) {
                    continue;
                }
                if schedule.schedule_course_in(code, term)? {
                    debug!(course = %code, term, "filled term with extra course");
                    progressed = true;
                    added += 1;
                }
            }
            if !progressed {
                break;
            }
        }
    }
    Ok(added)
}
