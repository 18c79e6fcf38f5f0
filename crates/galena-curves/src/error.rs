//! Error types for the settlement-date engine.

use chrono::NaiveDate;
use galena_core::GalenaError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// The error type for prompt-map and curve calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A bounded corrective search exceeded its iteration cap.
    ///
    /// Indicates malformed or contradictory non-prompt/holiday input; the
    /// curve must not be published.
    #[error("{what} failed to converge within {iterations} iterations")]
    UnresolvedSearch {
        /// The search that failed.
        what: &'static str,
        /// The iteration cap that was hit.
        iterations: u32,
    },

    /// A date fell outside the built prompt-map window.
    #[error("no prompt mapping for {date}: prompt map is stale or its window is too short")]
    UnmappedDate {
        /// The date that could not be resolved.
        date: NaiveDate,
    },

    /// Calendar primitive failure.
    #[error(transparent)]
    Core(#[from] GalenaError),
}

impl CurveError {
    /// Creates an unresolved-search error.
    #[must_use]
    pub fn unresolved(what: &'static str, iterations: u32) -> Self {
        Self::UnresolvedSearch { what, iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::unresolved("cash date search", 25);
        assert!(err.to_string().contains("25 iterations"));

        let err = CurveError::from(GalenaError::InvalidYear { year: 4100 });
        assert!(err.to_string().contains("4100"));
    }
}
