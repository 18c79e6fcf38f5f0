//! # Galena Core
//!
//! Core types and calendar primitives for the Galena LME toolkit.
//!
//! This crate provides the foundational building blocks used throughout
//! Galena:
//!
//! - **Types**: the exchange [`Holiday`](types::Holiday) record and its
//!   closure / non-settlement partition
//! - **Calendar primitives**: Easter and Good Friday computation,
//!   weekday/weekend classification, clamped month arithmetic
//! - **London time**: Europe/London civil-time helpers, the 12:30 prompt
//!   expiry stamp, and the Rulebook trading-day cutoff
//!
//! ## Design Philosophy
//!
//! - **Pure and allocation-only**: nothing in this crate performs I/O
//! - **Explicit Over Implicit**: reference datetimes are timezone-carrying
//!   `DateTime<Tz>` values, so an unzoned instant cannot reach the engine
//!
//! ## Example
//!
//! ```rust
//! use galena_core::calendars::good_friday;
//!
//! let friday = good_friday(2024).unwrap();
//! assert_eq!(friday.to_string(), "2024-03-29");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod dates;
pub mod error;
pub mod london;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{easter_sunday, good_friday};
    pub use crate::dates::{add_months, is_weekend, nth_weekday_of_month};
    pub use crate::error::{GalenaError, GalenaResult};
    pub use crate::london::{at_prompt_expiry, now_london, LONDON};
    pub use crate::types::{split_holidays, Holiday, HolidaySplit};
}

// Re-export commonly used types at crate root
pub use error::{GalenaError, GalenaResult};
pub use types::{Holiday, HolidaySplit};
