//! Journey-maps client error types.

/// Errors that can occur when fetching a transfer from journey-maps.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key was rejected
    #[error("unauthorized: check JOURNEY_MAPS_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a feature collection
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
