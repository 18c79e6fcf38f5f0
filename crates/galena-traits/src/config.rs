//! Prep run configuration.
//!
//! The original system read dev/prod cache suffixes and health keys from
//! process-wide environment state at import time. Here the knobs are an
//! explicit struct handed to whichever collaborator needs them;
//! environment loading is the launching process's job.

use serde::{Deserialize, Serialize};

use galena_curves::DEFAULT_FORWARD_MONTHS;

/// Suffix appended to every cache key when dev keys are active.
const DEV_KEY_SUFFIX: &str = ":dev";

/// Configuration for one overnight prep run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Months of monthly prompts (and options) to generate.
    pub forward_months: u32,
    /// Route cache writes to the dev keyspace.
    pub use_dev_keys: bool,
    /// Key the freshness/health marker is written under.
    pub health_key: String,
}

impl PrepConfig {
    /// Configuration with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward_months: DEFAULT_FORWARD_MONTHS,
            use_dev_keys: true,
            health_key: "prep:health".to_string(),
        }
    }

    /// Sets the number of forward months.
    #[must_use]
    pub fn with_forward_months(mut self, months: u32) -> Self {
        self.forward_months = months;
        self
    }

    /// Selects the dev or production keyspace.
    #[must_use]
    pub fn with_dev_keys(mut self, use_dev_keys: bool) -> Self {
        self.use_dev_keys = use_dev_keys;
        self
    }

    /// Sets the health marker key.
    #[must_use]
    pub fn with_health_key(mut self, key: impl Into<String>) -> Self {
        self.health_key = key.into();
        self
    }

    /// The suffix cache publishers append to every key.
    #[must_use]
    pub fn key_suffix(&self) -> &'static str {
        if self.use_dev_keys {
            DEV_KEY_SUFFIX
        } else {
            ""
        }
    }
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self::new()
    }
}
