//! Error types for the WebAPI client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == WebApi Error Enum ==
/// Unified error type for the WebAPI client.
#[derive(Error, Debug)]
pub enum WebApiError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("WebAPI returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the server
        body: String,
    },

    /// Response body could not be decoded into the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller supplied invalid input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A polled job did not finish within the allowed time
    #[error("Job execution {execution_id} did not complete within {timeout_secs}s")]
    JobTimeout {
        /// Execution id being polled
        execution_id: i64,
        /// Deadline that was exceeded, in seconds
        timeout_secs: u64,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the WebAPI client.
pub type Result<T> = std::result::Result<T, WebApiError>;
