//! Error types for source fetch operations

use thiserror::Error;

/// Errors a source fetch can report
///
/// The taxonomy deliberately separates "the source did not answer" from
/// "the source answered and the answer has no entry for this asset" — the
/// price source keys its response by asset id, and a missing key is a
/// normal not-found outcome rather than a transport failure.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network, timeout, or HTTP-level failure
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The price source's response has no entry for the requested asset id
    #[error("No quote entry for asset: {0}")]
    AssetNotFound(String),

    /// A successful reply whose body does not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for source operations
pub type Result<T> = std::result::Result<T, SourceError>;

impl SourceError {
    /// Whether the failure is a not-found outcome rather than an outage
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::AssetNotFound(_))
    }
}
