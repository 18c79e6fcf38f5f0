//! Relative-date calculators.
//!
//! Each of the exchange's key relative dates is a pure function over a
//! reference datetime, the holiday/non-prompt inputs, and (where
//! relevant) the prompt map:
//!
//! - [`cash_date`] — Cash / SPOT
//! - [`tom_date`] — TOM / Cash Today (optional by rulebook)
//! - [`three_month_date`] — the canonical 3M prompt
//! - [`weekly_prompts`] — Wednesdays past 3M
//! - [`monthly_prompts`] — third-Wednesday monthly prompts

mod cash;
mod monthly;
mod three_month;
mod tom;
mod weekly;

pub use cash::cash_date;
pub use monthly::{monthly_prompts, DEFAULT_FORWARD_MONTHS};
pub use three_month::three_month_date;
pub use tom::tom_date;
pub use weekly::weekly_prompts;

/// Iteration cap for the Cash/TOM forward day scans.
pub(crate) const MAX_SEARCH_DAYS: u32 = 25;
