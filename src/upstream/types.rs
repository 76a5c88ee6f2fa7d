//! Upstream-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the upstream store.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("failed to build upstream HTTP client: {0}")]
    Client(reqwest::Error),

    /// The request never produced an HTTP response (connect failure, DNS,
    /// aborted transfer).
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Raw reply from the upstream store.
///
/// The body is kept as text: the store replies with JSON on most paths but
/// empty or plain-text bodies do occur, and the translation layer owns that
/// distinction.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}
