//! Weekly (Wednesday) prompt dates.

use chrono::{DateTime, Datelike, Duration, Weekday};
use chrono_tz::Tz;

use galena_core::dates::{next_weekday_after, whole_months_between};
use galena_core::london::{at_prompt_expiry, PROMPT_EXPIRY_HOUR, PROMPT_EXPIRY_MINUTE};

use crate::error::CurveResult;
use crate::prompt_map::PromptMap;
use crate::relative::three_month_date;

/// Weekly prompts run through the sixth calendar month after the month
/// the trade is made in.
const WEEKLY_HORIZON_MONTHS: i32 = 6;

/// All weekly prompts for a reference instant.
///
/// Per the Rulebook: each Wednesday falling after the three-months date,
/// until and including the last Wednesday in the sixth calendar month
/// after the month in which the contract is made. Weekly prompts are
/// defined to land on Wednesdays and are not re-validated against the
/// prompt map.
pub fn weekly_prompts(
    reference: DateTime<Tz>,
    prompt_map: &PromptMap,
) -> CurveResult<Vec<DateTime<Tz>>> {
    let three_month = three_month_date(reference, prompt_map)?;
    let reference_local = reference.naive_local();

    let mut wednesday = next_weekday_after(three_month.date_naive(), Weekday::Wed);
    let mut prompts = Vec::new();

    loop {
        let first_of_month = wednesday
            .with_day(1)
            .expect("the first of a month always exists")
            .and_hms_opt(PROMPT_EXPIRY_HOUR, PROMPT_EXPIRY_MINUTE, 0)
            .expect("12:30 is a valid wall-clock time");
        if whole_months_between(first_of_month, reference_local) >= WEEKLY_HORIZON_MONTHS {
            break;
        }
        prompts.push(at_prompt_expiry(wednesday));
        wednesday += Duration::days(7);
    }

    Ok(prompts)
}
