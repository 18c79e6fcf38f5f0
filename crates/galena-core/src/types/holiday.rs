//! Exchange holiday records.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An exchange-supplied holiday entry.
///
/// The exchange distinguishes *full closure* days (the exchange is shut)
/// from *non-settlement business days* (open for trading, but not valid
/// for settlement). The distinction drives the Cash and TOM calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date of the holiday.
    pub date: NaiveDate,
    /// Feed-supplied holiday weight. Carried for feed parity; does not
    /// affect date calculations.
    pub weight: f64,
    /// True when the exchange is fully closed on this date.
    pub is_closure_date: bool,
}

impl Holiday {
    /// Creates a holiday record.
    #[must_use]
    pub fn new(date: NaiveDate, weight: f64, is_closure_date: bool) -> Self {
        Self {
            date,
            weight,
            is_closure_date,
        }
    }

    /// A full-closure day with unit weight.
    #[must_use]
    pub fn closure(date: NaiveDate) -> Self {
        Self::new(date, 1.0, true)
    }

    /// A non-settlement business day with unit weight.
    #[must_use]
    pub fn non_settlement(date: NaiveDate) -> Self {
        Self::new(date, 1.0, false)
    }
}

/// Holiday dates partitioned by closure kind.
#[derive(Debug, Clone, Default)]
pub struct HolidaySplit {
    /// Dates on which the exchange is fully closed.
    pub full_closures: HashSet<NaiveDate>,
    /// Business days that are not valid for settlement.
    pub non_settlement: HashSet<NaiveDate>,
}

impl HolidaySplit {
    /// Whether the exchange is fully closed on `date`.
    #[must_use]
    pub fn is_full_closure(&self, date: NaiveDate) -> bool {
        self.full_closures.contains(&date)
    }

    /// Whether `date` is a business day excluded from settlement.
    #[must_use]
    pub fn is_non_settlement(&self, date: NaiveDate) -> bool {
        self.non_settlement.contains(&date)
    }
}

/// Partitions holiday records into full-closure and non-settlement sets.
#[must_use]
pub fn split_holidays(holidays: &[Holiday]) -> HolidaySplit {
    let mut split = HolidaySplit::default();
    for holiday in holidays {
        if holiday.is_closure_date {
            split.full_closures.insert(holiday.date);
        } else {
            split.non_settlement.insert(holiday.date);
        }
    }
    split
}
