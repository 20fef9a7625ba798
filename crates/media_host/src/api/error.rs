//! Request failure taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
/// Failure of a media library request.
pub enum MediaApiError {
    /// The request never produced an HTTP response (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a status other than 200.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not the expected JSON envelope.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The transport is not available on this target.
    #[error("media api unavailable: {0}")]
    Unsupported(&'static str),
}

impl MediaApiError {
    /// Returns `true` for failures where no HTTP response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for MediaApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
