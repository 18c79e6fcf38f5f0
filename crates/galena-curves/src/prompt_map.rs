//! The LME prompt map.
//!
//! The settlement-business-day regulation does not make every calendar
//! date a valid prompt: weekends and exchange non-prompt dates roll to a
//! nearby Settlement Business Day, and the direction of the roll is
//! date-dependent. The prompt map materialises that rule as a plain
//! date → date mapping over a rolling four-month window, which the Cash,
//! 3M, and broken-date calculations then query.
//!
//! Roll rules, per the Rulebook:
//!
//! - Good Friday, and a Christmas Day falling Tuesday through Friday,
//!   roll **backward** to the prior valid day
//! - a Saturday rolls **back** to the preceding Friday when that Friday
//!   is itself valid, otherwise **forward** past the weekend
//! - Sundays and every other non-prompt date roll **forward**, skipping
//!   weekends and further non-prompt dates

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use galena_core::calendars::good_friday;
use galena_core::dates::{add_months, is_weekend};
use galena_core::london::now_london;

use crate::error::CurveResult;

/// Width of the prompt-map window, in calendar months from the
/// reference date.
const PROMPT_WINDOW_MONTHS: u32 = 4;

/// A date → prompt-date mapping over a rolling four-month window.
///
/// Immutable once built; shared read-only by all calculators within one
/// curve invocation. For any entry, following the mapping a second time
/// is a fixed point: `map[d] == map[map[d]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptMap {
    map: BTreeMap<NaiveDate, NaiveDate>,
}

impl PromptMap {
    /// The valid prompt the given date rolls to, if the date is inside
    /// the built window.
    #[must_use]
    pub fn resolve(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.map.get(&date).copied()
    }

    /// Iterates over `(date, prompt)` entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, NaiveDate)> + '_ {
        self.map.iter().map(|(d, p)| (*d, *p))
    }

    /// Number of mapped dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// First mapped date (the reference date of the build).
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.map.keys().next().copied()
    }

    /// Last mapped date.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.map.keys().next_back().copied()
    }
}

/// Builds the prompt map for every date from the reference date through
/// four calendar months forward.
///
/// `non_prompts` are the exchange's non-prompt dates; nothing beyond the
/// window is required. When `reference` is `None` the current instant in
/// Europe/London is used.
pub fn build_prompt_map(
    non_prompts: &[NaiveDate],
    reference: Option<DateTime<Tz>>,
) -> CurveResult<PromptMap> {
    let reference = reference.unwrap_or_else(now_london);
    let non_prompts: HashSet<NaiveDate> = non_prompts.iter().copied().collect();

    // One applicable Good Friday per invocation: this year's while we are
    // on or before it, next year's after.
    let mut applicable_good_friday = good_friday(reference.year())?;
    if reference.date_naive() > applicable_good_friday {
        applicable_good_friday = good_friday(reference.year() + 1)?;
    }

    let start = reference.date_naive();
    let window_end = add_months(start, PROMPT_WINDOW_MONTHS);

    let mut map = BTreeMap::new();
    let mut candidate = start;
    while candidate < window_end {
        map.insert(
            candidate,
            resolve_candidate(candidate, &non_prompts, applicable_good_friday),
        );
        candidate += Duration::days(1);
    }

    debug!(
        entries = map.len(),
        %start,
        %window_end,
        "built LME prompt map"
    );
    Ok(PromptMap { map })
}

/// Resolves one candidate date to its valid prompt.
fn resolve_candidate(
    candidate: NaiveDate,
    non_prompts: &HashSet<NaiveDate>,
    applicable_good_friday: NaiveDate,
) -> NaiveDate {
    let mut guess = candidate;

    if !non_prompts.contains(&guess) {
        // Sundays always roll forward; the advance re-checks the
        // non-prompt set in case the roll lands on an excluded date.
        while guess.weekday() == Weekday::Sun || non_prompts.contains(&guess) {
            guess += Duration::days(1);
        }
        if guess.weekday() == Weekday::Sat {
            let friday = guess - Duration::days(1);
            if !non_prompts.contains(&friday) && friday != applicable_good_friday {
                // A Saturday with a valid Friday before it rolls back.
                guess = friday;
            } else {
                // No valid Friday (non-prompt, or Good Friday): roll
                // forward past the weekend and any further non-prompts.
                while is_weekend(guess) || non_prompts.contains(&guess) {
                    guess += Duration::days(1);
                }
            }
        }
        return guess;
    }

    if guess == applicable_good_friday {
        // Good Friday prompts fall on the prior valid day.
        while non_prompts.contains(&guess) || guess == applicable_good_friday {
            guess -= Duration::days(1);
        }
        return guess;
    }

    if is_backward_rolling_christmas(guess) {
        while non_prompts.contains(&guess) {
            guess -= Duration::days(1);
        }
        return guess;
    }

    // Every other non-prompt rolls forward, skipping weekends too: a day
    // just past a rolled-forward non-prompt may itself be a weekend.
    while non_prompts.contains(&guess) || is_weekend(guess) {
        guess += Duration::days(1);
    }
    guess
}

/// A Christmas Day falling Tuesday through Friday settles on the prior
/// settlement day.
fn is_backward_rolling_christmas(date: NaiveDate) -> bool {
    date.month() == 12
        && date.day() == 25
        && matches!(
            date.weekday(),
            Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri
        )
}
