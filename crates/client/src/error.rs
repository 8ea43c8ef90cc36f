use serde_json::Value;
use thiserror::Error;

use backoffice_core::CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call. Propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or similar; no usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error envelope or a JSON error body.
    #[error("backend error ({status}): {message}")]
    Backend {
        status: u16,
        message: String,
        body: Value,
    },

    /// Non-2xx response whose body could not be parsed.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response that did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request rejected locally before it was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

impl ApiError {
    /// HTTP-level status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } | ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Invalid(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
