//! Crate-level error types.
//!
//! [`TrendviewError`] unifies every error source (configuration, HTTP,
//! JSON, provider responses, terminal I/O) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrendviewError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TrendviewError {
    /// A configuration value was present but could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be built, sent, or read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The market data provider answered with a non-success status.
    #[error("market data API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered successfully but the payload was unusable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Terminal setup, drawing, or teardown failed.
    #[error("io error: {0}")]
    Io(String),
}
