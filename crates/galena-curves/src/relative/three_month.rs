//! The three-month (3M) prompt date.

use chrono::{DateTime, Datelike, Duration, Months};
use chrono_tz::Tz;
use tracing::error;

use galena_core::london::{at_prompt_expiry, trading_day_cutoff};

use crate::error::{CurveError, CurveResult};
use crate::prompt_map::PromptMap;

/// Cap on the backward correction that keeps 3M inside its target month.
const MAX_BACKWARD_STEPS: i64 = 10;

/// The 3M prompt for a reference instant.
///
/// The naive guess is the settlement day three calendar months forward,
/// with the trading-day cutoff applied first so trades entered after the
/// 19:31 boundary bucket into the next day's 3M cycle. When the prompt
/// map rolls that guess forward out of its month, the guess steps
/// backward (re-querying the map) until the resolved prompt sits in the
/// intended month — the 3M date never crosses into the following month.
pub fn three_month_date(
    reference: DateTime<Tz>,
    prompt_map: &PromptMap,
) -> CurveResult<DateTime<Tz>> {
    let guess_date = (reference
        .naive_local()
        .checked_add_months(Months::new(3))
        .expect("date stays well within chrono's representable range")
        + trading_day_cutoff())
    .date();

    let mut mapped = prompt_map
        .resolve(guess_date)
        .ok_or(CurveError::UnmappedDate { date: guess_date })?;

    let mut steps_back = 0i64;
    while mapped.month() != guess_date.month() && mapped > guess_date {
        steps_back += 1;
        if steps_back > MAX_BACKWARD_STEPS {
            error!(
                %reference,
                %guess_date,
                %mapped,
                "three-month backward correction failed to converge"
            );
            return Err(CurveError::unresolved(
                "three-month backward correction",
                MAX_BACKWARD_STEPS as u32,
            ));
        }
        let lookup = guess_date - Duration::days(steps_back);
        mapped = prompt_map
            .resolve(lookup)
            .ok_or(CurveError::UnmappedDate { date: lookup })?;
    }

    Ok(at_prompt_expiry(mapped))
}
