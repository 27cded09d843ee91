//! Chat gateway - the stateful adapter between the HTTP front and the
//! model backend.
//!
//! The gateway owns a single lazily-bound model client. The first chat
//! call binds the client to the requested model name; every later call
//! reuses that client unconditionally and the requested model name is
//! ignored. Initialization is serialized through a `OnceCell`, so exactly
//! one client is constructed even under concurrent first use.

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

use crate::domain::types::{ChatMessage, IncomingMessage, MessageRole};
use crate::infrastructure::model::{ModelClient, ModelError};

/// Fixed provider label reported by model-info
pub const PROVIDER_LABEL: &str = "Ollama";

/// Errors surfaced by the gateway as response bodies
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unsupported message role: {0}")]
    UnsupportedRole(String),
    #[error("Model not initialized")]
    NotInitialized,
    #[error(transparent)]
    Backend(#[from] ModelError),
}

/// Metadata for the currently bound model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub model_name: String,
    pub provider: &'static str,
}

/// The adapter between role-tagged conversations and the model backend
pub struct ChatGateway<C: ModelClient> {
    endpoint: String,
    client: OnceCell<C>,
}

impl<C: ModelClient> ChatGateway<C> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: OnceCell::new(),
        }
    }

    /// Forward a conversation to the backend and return the reply text.
    ///
    /// The client is bound before role validation, matching the original
    /// service: a request with a bad role still pins the model. A role
    /// outside the recognized set aborts before the backend is invoked.
    /// One invocation attempt, no retries.
    pub async fn chat(
        &self,
        messages: Vec<IncomingMessage>,
        model_name: &str,
    ) -> Result<String, GatewayError> {
        let client = self
            .client
            .get_or_init(|| C::bind(&self.endpoint, model_name));

        if client.model() != model_name {
            debug!(
                bound = client.model(),
                requested = model_name,
                "Client already bound, requested model ignored"
            );
        }

        let mut turns = Vec::with_capacity(messages.len());
        for message in messages {
            match MessageRole::from_wire(&message.role) {
                Some(role) => turns.push(ChatMessage::new(role, message.content)),
                None => return Err(GatewayError::UnsupportedRole(message.role)),
            }
        }

        let reply = client.generate(&turns).await?;
        Ok(reply)
    }

    /// Metadata for the bound model, or an error before first use
    pub fn model_info(&self) -> Result<ModelInfo, GatewayError> {
        match self.client.get() {
            Some(client) => Ok(ModelInfo {
                model_name: client.model().to_string(),
                provider: PROVIDER_LABEL,
            }),
            None => Err(GatewayError::NotInitialized),
        }
    }
}
