//! Error types for session setup and stats monitoring.
//!
//! Everything in the resolution/parsing/aggregation core is designed to
//! degrade rather than fail: the channel resolver falls back to "no default
//! URL", the directive parser drops malformed entries, and the stats
//! aggregator skips partial reports. [`PlayerError`] covers the boundaries
//! where a real failure must surface: the session collaborator's
//! load/unload calls, the report source, and configuration documents.
//!
//! Errors can be classified for retry handling:
//!
//! ```rust
//! use vantage::PlayerError;
//!
//! let error = PlayerError::session_failed("peer connection dropped");
//! if error.is_retryable() {
//!     println!("Can retry this operation");
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for playback operations.
pub type Result<T, E = PlayerError> = std::result::Result<T, E>;

/// Main error type for playback session operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("channel registry request failed: {url}")]
    Registry {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("session error: {reason}")]
    Session {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("report source error: {reason}")]
    Source {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("configuration error in {context}: {details}")]
    Config { context: String, details: String },

    #[error("operation timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl PlayerError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            PlayerError::Registry { .. } => true,
            PlayerError::Session { .. } => true,
            PlayerError::Source { .. } => true,
            PlayerError::Timeout { .. } => true,
            PlayerError::Config { .. } => false,
        }
    }

    /// Helper constructor for registry lookup errors.
    pub fn registry_failed(
        url: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        PlayerError::Registry { url: url.into(), source: Some(source) }
    }

    /// Helper constructor for session errors.
    pub fn session_failed(reason: impl Into<String>) -> Self {
        PlayerError::Session { reason: reason.into(), source: None }
    }

    /// Helper constructor for session errors with source.
    pub fn session_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        PlayerError::Session { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for report source errors.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        PlayerError::Source { reason: reason.into(), source: None }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        PlayerError::Config { context: context.into(), details: details.into() }
    }
}

impl From<reqwest::Error> for PlayerError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_else(|| "<unknown>".to_string());
        PlayerError::Registry { url, source: Some(Box::new(err)) }
    }
}

impl From<serde_yaml_ng::Error> for PlayerError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        PlayerError::Config { context: "yaml document".to_string(), details: err.to_string() }
    }
}
