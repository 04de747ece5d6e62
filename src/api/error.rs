use thiserror::Error;

use crate::auth::AuthError;

/// Errors surfaced by the API dispatcher and typed operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error("Empty response from {0}")]
    EmptyResponse(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}
