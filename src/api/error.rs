use thiserror::Error;

/// Failures from the movie API. The view treats every variant the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport level failure, including timeouts
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a movie page
    #[error("Could not decode response: {reason}")]
    Decode { reason: String },
}

/// Result type for movie API operations
pub type ApiResult<T> = Result<T, ApiError>;
