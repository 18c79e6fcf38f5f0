//! Static data source traits.
//!
//! The exchange static data (non-prompt dates, per-product holiday
//! records with closure flags, product reference entries) lives in a
//! relational store maintained by the ingestion jobs. The engine only
//! sees these traits; session and transaction discipline belong to the
//! implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use galena_core::types::Holiday;

use crate::error::TraitError;
use crate::ids::{FeedId, ProductSymbol};

/// Product reference entry (static attributes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Exchange product symbol (e.g. `xlme-lcu-usd`).
    pub symbol: ProductSymbol,
    /// Short name used in contract symbols (e.g. `lcu`).
    pub short_name: String,
    /// Human-readable product name.
    pub display_name: String,
    /// Contract lot multiplier.
    pub future_multiplier: u32,
    /// Feed carrying the product's 3M price.
    pub three_month_feed: FeedId,
}

/// Trait for exchange static data providers.
#[async_trait]
pub trait StaticDataSource: Send + Sync {
    /// All exchange non-prompt dates on record. Nothing beyond roughly
    /// four months out is required by the engine.
    async fn non_prompt_dates(&self) -> Result<Vec<NaiveDate>, TraitError>;

    /// Holiday records (with closure flags) for one product.
    async fn product_holidays(&self, symbol: &ProductSymbol) -> Result<Vec<Holiday>, TraitError>;

    /// Product reference entry.
    ///
    /// Fails with [`TraitError::ProductNotFound`] when the symbol is not
    /// on record; callers propagate this rather than retrying.
    async fn product(&self, symbol: &ProductSymbol) -> Result<ProductInfo, TraitError>;

    /// Subscribe to holiday reloads (fired after each ingestion run).
    async fn subscribe_holidays(&self) -> Result<HolidayUpdateReceiver, TraitError>;
}

/// A reloaded holiday set for one product.
#[derive(Debug, Clone)]
pub struct HolidayUpdate {
    /// Product the reload applies to.
    pub symbol: ProductSymbol,
    /// The full replacement holiday list.
    pub holidays: Vec<Holiday>,
}

/// Receiver for holiday reload notifications.
pub struct HolidayUpdateReceiver {
    rx: tokio::sync::broadcast::Receiver<HolidayUpdate>,
}

impl HolidayUpdateReceiver {
    /// Create a new holiday update receiver.
    pub fn new(rx: tokio::sync::broadcast::Receiver<HolidayUpdate>) -> Self {
        Self { rx }
    }

    /// Receive the next update.
    pub async fn recv(&mut self) -> Option<HolidayUpdate> {
        self.rx.recv().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_holiday_update_receiver() {
        let (tx, rx) = tokio::sync::broadcast::channel(4);
        let mut receiver = HolidayUpdateReceiver::new(rx);

        tx.send(HolidayUpdate {
            symbol: ProductSymbol::from("xlme-lcu-usd"),
            holidays: vec![],
        })
        .unwrap();

        let update = receiver.recv().await.unwrap();
        assert_eq!(update.symbol.as_str(), "xlme-lcu-usd");
    }
}
