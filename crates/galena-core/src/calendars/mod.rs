//! Calendar computations for exchange date rules.
//!
//! Currently this is the movable-feast arithmetic (Easter, Good Friday)
//! that the LME settlement-business-day regulation hangs its special
//! cases on.

mod easter;

pub use easter::{easter_sunday, good_friday};
