//! Client error types
//!
//! Three failure classes surface to callers: validation failures raised
//! before any network call, server rejections carrying the server's own
//! message, and transport failures shown as one generic connectivity
//! message. Nothing is retried automatically anywhere.

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Precondition failed before any HTTP call; always user-correctable
    #[error("{0}")]
    Validation(String),

    /// Server rejected the request (non-2xx or success:false)
    #[error("{0}")]
    Rejected(String),

    /// Transport failure
    #[error("network error, check your connection")]
    Network(#[from] reqwest::Error),

    /// Stored identity missing or rejected by the server
    #[error("authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Response body didn't have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local state store failure
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
