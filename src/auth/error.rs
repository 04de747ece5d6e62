use thiserror::Error;

/// Errors raised by the device-authorization flow and token lifecycle.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token cache available")]
    NoTokenCache,
    #[error("{context} failed with status {status}: {body}")]
    Upstream {
        context: &'static str,
        status: u16,
        body: String,
    },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}
