//! Model error types

use thiserror::Error;

/// Errors from the backend model runtime
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error calling Ollama: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("Ollama returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ModelError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}
