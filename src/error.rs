//! Display client error types.
//!
//! [`DisplayError`] is the central error type for the crate. Per-frame
//! variants ([`DisplayError::ElementNotFound`], [`DisplayError::MalformedStatus`])
//! are logged by the listening loop and never end the connection; the
//! connection-level variants are returned to the caller.

use tokio_tungstenite::tungstenite;

use crate::domain::IndicatorId;

/// Client-side error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category                              | Fatal to the connection |
/// |-----------|---------------------------------------|-------------------------|
/// | 1000–1999 | Configuration / endpoint, pre-dialing | n/a (no socket yet)     |
/// | 2000–2999 | Connection                            | yes                     |
/// | 3000–3999 | Per-frame                             | no                      |
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The device endpoint could not be built.
    #[error("invalid device endpoint: {0}")]
    InvalidEndpoint(String),

    /// An environment variable was set but could not be parsed.
    #[error("invalid configuration for {key}: {value:?}")]
    Config {
        /// Variable name.
        key: &'static str,
        /// Raw value as found in the environment.
        value: String,
    },

    /// Opening the WebSocket to the device failed.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        /// Endpoint that was dialed.
        url: String,
        /// Underlying WebSocket error.
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// The socket failed while reading frames or closing.
    #[error("websocket transport error: {0}")]
    Transport(#[from] Box<tungstenite::Error>),

    /// The indicator surface has no element with this identifier.
    #[error("indicator element not found: {0}")]
    ElementNotFound(IndicatorId),

    /// Strict policy rejected a status frame.
    #[error("malformed status {payload:?}: expected 2 fields, got {fields}")]
    MalformedStatus {
        /// Raw frame text.
        payload: String,
        /// Number of comma-separated fields found.
        fields: usize,
    },
}

impl DisplayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Config { .. } => 1001,
            Self::InvalidEndpoint(_) => 1002,
            Self::Connect { .. } => 2001,
            Self::Transport(_) => 2002,
            Self::ElementNotFound(_) => 3001,
            Self::MalformedStatus { .. } => 3002,
        }
    }

    /// Returns `true` if the error ends the connection.
    ///
    /// Per-frame errors leave the socket open so later frames still apply.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::ElementNotFound(_) | Self::MalformedStatus { .. }
        )
    }
}

impl From<tungstenite::Error> for DisplayError {
    fn from(err: tungstenite::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
