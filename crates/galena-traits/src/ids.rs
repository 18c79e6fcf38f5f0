//! Identifier types used across the prep pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange product identifier (e.g. `xlme-lcu-usd`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProductSymbol(pub String);

impl ProductSymbol {
    /// Create a new product symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductSymbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Price feed identifier (e.g. `X.US.LDKZ`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeedId(pub String);

impl FeedId {
    /// Create a new feed ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FeedId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FeedId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
