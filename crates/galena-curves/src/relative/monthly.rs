//! Monthly (third-Wednesday) prompt dates.

use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;

use galena_core::dates::{add_months, nth_weekday_of_month};
use galena_core::london::at_prompt_expiry;

/// Default number of forward months of monthly prompts.
pub const DEFAULT_FORWARD_MONTHS: u32 = 18;

/// Monthly prompts: the third Wednesday of each of `forward_months`
/// consecutive calendar months, starting with the reference month.
///
/// Monthly futures prompts are canonical Rulebook dates: a pure calendar
/// calculation, independent of the prompt map and the non-prompt set.
#[must_use]
pub fn monthly_prompts(reference: DateTime<Tz>, forward_months: u32) -> Vec<DateTime<Tz>> {
    let start = reference.date_naive();

    (0..forward_months)
        .map(|offset| {
            let anchor = add_months(start, offset);
            let third_wednesday =
                nth_weekday_of_month(anchor.year(), anchor.month(), Weekday::Wed, 3)
                    .expect("every month has a third Wednesday");
            at_prompt_expiry(third_wednesday)
        })
        .collect()
}
