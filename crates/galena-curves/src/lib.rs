//! # Galena Curves
//!
//! The LME settlement-date engine.
//!
//! Given a list of exchange non-prompt dates and the product holiday
//! records, this crate derives the exchange's key relative dates and
//! composes them into one [`FuturesCurve`] snapshot:
//!
//! - **Prompt map**: every calendar date in a rolling four-month window
//!   mapped to the valid Settlement Business Day it rolls to
//! - **Cash / SPOT**: the Rulebook two-business-day-forward prompt
//! - **TOM (Cash Today)**: the next-business-day prompt, when one exists
//! - **3M**: the canonical three-month-forward prompt
//! - **Weekly and monthly prompts**: Wednesday prompts past 3M, and
//!   third-Wednesday monthly prompts
//!
//! Everything here is pure and allocation-only: inputs are passed
//! explicitly, nothing is read from process state, and one invocation
//! never mutates another's data. Bounded corrective searches fail fast
//! with [`CurveError::UnresolvedSearch`] instead of degrading silently.
//!
//! ## Example
//!
//! ```rust
//! use chrono::TimeZone;
//! use galena_core::london::LONDON;
//! use galena_curves::build_curve;
//!
//! let reference = LONDON.with_ymd_and_hms(2024, 2, 6, 15, 35, 0).unwrap();
//! let curve = build_curve(&[], &[], 18, Some(reference)).unwrap();
//!
//! assert_eq!(curve.monthlies.len(), 18);
//! assert!(curve.cash < curve.three_month);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod prompt_map;
pub mod relative;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{build_curve, FuturesCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::prompt_map::{build_prompt_map, PromptMap};
    pub use crate::relative::{
        cash_date, monthly_prompts, three_month_date, tom_date, weekly_prompts,
        DEFAULT_FORWARD_MONTHS,
    };
}

// Re-export the primary entry points at crate root
pub use curve::{build_curve, FuturesCurve};
pub use error::{CurveError, CurveResult};
pub use prompt_map::{build_prompt_map, PromptMap};
pub use relative::{
    cash_date, monthly_prompts, three_month_date, tom_date, weekly_prompts,
    DEFAULT_FORWARD_MONTHS,
};
