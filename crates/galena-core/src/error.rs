//! Error types for the Galena core crate.

use thiserror::Error;

/// A specialized Result type for Galena core operations.
pub type GalenaResult<T> = Result<T, GalenaError>;

/// The main error type for calendar and date-primitive operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalenaError {
    /// Year outside the validity range of the Easter algorithm.
    #[error("Year {year} outside supported range 1583-4099")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// Error in date construction or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed calendar input.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl GalenaError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
