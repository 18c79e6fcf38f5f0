//! The LME futures curve snapshot.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use galena_core::london::{at_prompt_expiry, now_london};
use galena_core::types::Holiday;

use crate::error::CurveResult;
use crate::prompt_map::{build_prompt_map, PromptMap};
use crate::relative::{cash_date, monthly_prompts, three_month_date, tom_date, weekly_prompts};

/// A per-invocation snapshot of the derived prompt dates for one
/// product.
///
/// Constructed fresh on every calculation by [`build_curve`] and
/// discarded after its consumer reads it. Broken dates are not part of
/// the primary construction: derive them explicitly with
/// [`FuturesCurve::with_broken_dates`], so a curve either carries them
/// (`Some`) or visibly does not (`None`) — there is no silently
/// half-built state.
#[derive(Debug, Clone, Serialize)]
pub struct FuturesCurve {
    /// Cash (SPOT) prompt.
    pub cash: DateTime<Tz>,
    /// Three-month (3M) prompt.
    pub three_month: DateTime<Tz>,
    /// TOM (Cash Today) prompt; `None` when the rulebook defines none.
    pub tom: Option<DateTime<Tz>>,
    /// Weekly Wednesday prompts after 3M.
    pub weeklies: Vec<DateTime<Tz>>,
    /// Third-Wednesday monthly prompts.
    pub monthlies: Vec<DateTime<Tz>>,
    /// The prompt map the curve was derived from.
    pub prompt_map: PromptMap,
    broken_dates: Option<Vec<DateTime<Tz>>>,
}

impl FuturesCurve {
    /// Derives the broken dates: every prompt-map target strictly
    /// between Cash and 3M, sorted and deduplicated, at the prompt
    /// expiry. May overlap weeklies or monthlies; never includes TOM,
    /// Cash, or 3M themselves.
    #[must_use]
    pub fn with_broken_dates(mut self) -> Self {
        let cash = self.cash.date_naive();
        let three_month = self.three_month.date_naive();

        let targets: BTreeSet<NaiveDate> = self
            .prompt_map
            .iter()
            .map(|(_, prompt)| prompt)
            .filter(|prompt| cash < *prompt && *prompt < three_month)
            .collect();

        self.broken_dates = Some(targets.into_iter().map(at_prompt_expiry).collect());
        self
    }

    /// The derived broken dates, when they have been populated.
    #[must_use]
    pub fn broken_dates(&self) -> Option<&[DateTime<Tz>]> {
        self.broken_dates.as_deref()
    }

    /// The deduplicated, sorted union of every prompt in this snapshot:
    /// Cash, 3M, TOM (if present), weeklies, monthlies, and broken dates
    /// (if populated). This is the definitive list of prompts to
    /// materialise as contracts.
    #[must_use]
    pub fn prompt_list(&self) -> Vec<DateTime<Tz>> {
        let mut prompts: BTreeSet<DateTime<Tz>> = BTreeSet::new();
        prompts.insert(self.cash);
        prompts.insert(self.three_month);
        prompts.extend(self.tom);
        prompts.extend(self.weeklies.iter().copied());
        prompts.extend(self.monthlies.iter().copied());
        if let Some(broken) = &self.broken_dates {
            prompts.extend(broken.iter().copied());
        }
        prompts.into_iter().collect()
    }
}

/// Builds the primary curve snapshot for one product.
///
/// `non_prompts` feeds the prompt map; `holidays` (with their closure
/// flags) feed the Cash and TOM calculations. When `reference` is `None`
/// the current instant in Europe/London is used. The returned curve
/// carries no broken dates; see [`FuturesCurve::with_broken_dates`].
pub fn build_curve(
    non_prompts: &[NaiveDate],
    holidays: &[Holiday],
    forward_months: u32,
    reference: Option<DateTime<Tz>>,
) -> CurveResult<FuturesCurve> {
    let reference = reference.unwrap_or_else(now_london);

    let prompt_map = build_prompt_map(non_prompts, Some(reference))?;
    let three_month = three_month_date(reference, &prompt_map)?;
    let cash = cash_date(reference, holidays)?;
    let tom = tom_date(reference, holidays)?;
    let weeklies = weekly_prompts(reference, &prompt_map)?;
    let monthlies = monthly_prompts(reference, forward_months);

    debug!(
        %reference,
        %cash,
        %three_month,
        tom = ?tom,
        weeklies = weeklies.len(),
        monthlies = monthlies.len(),
        "built futures curve"
    );

    Ok(FuturesCurve {
        cash,
        three_month,
        tom,
        weeklies,
        monthlies,
        prompt_map,
        broken_dates: None,
    })
}
