//! Domain value objects shared across the Galena crates.

mod holiday;

pub use holiday::{split_holidays, Holiday, HolidaySplit};
