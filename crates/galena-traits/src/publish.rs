//! Cache/bus publication traits.
//!
//! Downstream consumers read the derived dates from a cache keyed per
//! product, in `YYYYMMDD` wire form, together with freshness markers the
//! monitoring layer alerts on. A failed curve calculation must block
//! these writes — a corrupted curve is never partially published.

use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use galena_curves::FuturesCurve;

use crate::error::TraitError;
use crate::ids::ProductSymbol;

/// Wire format for prompt dates: `YYYYMMDD`.
const WIRE_DATE_FORMAT: &str = "%Y%m%d";

/// The relative forward dates for one product, in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeDateSnapshot {
    /// Product the snapshot belongs to.
    pub product: ProductSymbol,
    /// Cash prompt as `YYYYMMDD`.
    pub cash: String,
    /// TOM prompt as `YYYYMMDD`; absent when the rulebook defines none.
    pub tom: Option<String>,
    /// 3M prompt as `YYYYMMDD`.
    pub three_month: String,
}

impl RelativeDateSnapshot {
    /// Extracts the publishable relative dates from a curve snapshot.
    #[must_use]
    pub fn from_curve(product: ProductSymbol, curve: &FuturesCurve) -> Self {
        Self {
            product,
            cash: wire_date(curve.cash),
            tom: curve.tom.map(wire_date),
            three_month: wire_date(curve.three_month),
        }
    }
}

fn wire_date(prompt: DateTime<Tz>) -> String {
    prompt.format(WIRE_DATE_FORMAT).to_string()
}

/// Trait for curve publication targets.
#[async_trait]
pub trait CurvePublisher: Send + Sync {
    /// Publish the Cash/TOM/3M snapshot for a product.
    async fn publish_relative_dates(
        &self,
        snapshot: &RelativeDateSnapshot,
    ) -> Result<(), TraitError>;

    /// Publish the full flattened prompt list for a product.
    async fn publish_prompt_list(
        &self,
        product: &ProductSymbol,
        prompts: &[DateTime<Tz>],
    ) -> Result<(), TraitError>;

    /// Write the freshness/health marker the monitoring layer watches.
    async fn mark_healthy(&self, key: &str) -> Result<(), TraitError>;
}
