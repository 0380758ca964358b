//! MBTA API error types.

/// Errors that can occur when interacting with the MBTA API.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
