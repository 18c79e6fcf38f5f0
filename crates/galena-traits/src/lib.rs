//! # Galena Traits
//!
//! Trait definitions for the collaborators around the settlement-date
//! engine. The overnight prep run is glue between three seams, and this
//! crate owns the seams without owning any runtime:
//!
//! - [`static_data`]: where non-prompt dates, product holidays, and
//!   product reference entries come from (a relational store in
//!   production)
//! - [`publish`]: where derived curves go (a cache/bus plus freshness
//!   markers for downstream consumers)
//! - [`config`]: explicit configuration structs replacing process-wide
//!   environment lookups
//!
//! Implementations live with the processes that run them; this crate
//! deliberately has no database, cache, or transfer dependencies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod ids;
pub mod publish;
pub mod static_data;

pub use config::PrepConfig;
pub use error::TraitError;
pub use ids::{FeedId, ProductSymbol};
pub use publish::{CurvePublisher, RelativeDateSnapshot};
pub use static_data::{HolidayUpdate, HolidayUpdateReceiver, ProductInfo, StaticDataSource};
