//! Error types for trait operations.

use thiserror::Error;

/// Common error type for collaborator operations.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Required product reference data is missing. Propagated, never
    /// retried: a prep run for an unknown product must fail its caller.
    #[error("product not found: {symbol}")]
    ProductNotFound {
        /// The symbol that could not be resolved.
        symbol: String,
    },

    /// Connection to the backing store or cache failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Subscription to a data stream failed.
    #[error("subscription failed: {0}")]
    SubscriptionFailed(String),

    /// Parse/deserialization error.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Database error.
    #[error("database error: {0}")]
    DatabaseError(String),

    /// Operation timed out.
    #[error("timeout")]
    Timeout,

    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TraitError {
    /// Creates a product-not-found error.
    #[must_use]
    pub fn product_not_found(symbol: impl Into<String>) -> Self {
        Self::ProductNotFound {
            symbol: symbol.into(),
        }
    }
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e.to_string())
    }
}
