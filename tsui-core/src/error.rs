//! Unified error type definition

use thiserror::Error;

/// Error returned by every daemon call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DaemonError {
    /// The LocalAPI socket could not be reached (daemon not running, wrong path, permissions)
    #[error("Failed to connect to tailscaled at {path}: {message}")]
    Connect { path: String, message: String },

    /// The daemon answered with a non-success HTTP status
    #[error("{body} (HTTP {status})")]
    Http { status: u16, body: String },

    /// The response body could not be decoded
    #[error("Failed to decode daemon response: {0}")]
    Decode(String),

    /// The call exceeded the caller-provided timeout
    #[error("Timed out waiting for tailscaled")]
    Timeout,

    /// Transport-level failure after the connection was established
    #[error("Request failed: {0}")]
    Request(String),

    /// The daemon reported an application-level error inside a successful response
    #[error("{0}")]
    Daemon(String),

    /// The operation is not available on this platform
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl DaemonError {
    /// Whether it is expected behavior (daemon down, timeouts, permission denied), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Connect { .. } | Self::Timeout | Self::Unsupported(_) | Self::Daemon(_) => true,
            Self::Http { status, .. } => *status == 403,
            Self::Decode(_) | Self::Request(_) => false,
        }
    }
}

impl From<serde_json::Error> for DaemonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Daemon call Result type alias
pub type DaemonResult<T> = std::result::Result<T, DaemonError>;
