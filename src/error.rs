//! Shaker error types

/// Failure of one outbound request to the recipe source.
///
/// Not classified further: "not found", "server error" and "offline" all
/// land here. The cause is carried as text for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl TransportError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// Shaker error types
#[derive(Debug, thiserror::Error)]
pub enum ShakerError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unknown cocktail code: {0}")]
    UnknownCode(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Shaker operations
pub type Result<T> = std::result::Result<T, ShakerError>;
