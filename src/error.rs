//! Error types for the navigation core.

use thiserror::Error;

/// Failure talking to an AI/routing provider.
///
/// Never reaches the user directly: callers swap in a fallback.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response did not match schema: {0}")]
    Schema(String),

    #[error("provider returned no content")]
    Empty,
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Schema(e.to_string())
    }
}

/// Geolocation failures reported by a [`LocationWatcher`](crate::traits::LocationWatcher).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    Denied,

    #[error("position unavailable")]
    Unavailable,

    #[error("timed out waiting for a position fix")]
    Timeout,
}

/// Misuse of the navigation session state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("route has no steps to navigate")]
    EmptyRoute,

    #[error("navigation already started")]
    AlreadyStarted,

    #[error("navigation is not in progress")]
    NotInProgress,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("sharing is not available on this device")]
    Unavailable,

    #[error("share cancelled or failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
