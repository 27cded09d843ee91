//! Model client trait

use super::types::ModelError;
use crate::domain::types::ChatMessage;
use async_trait::async_trait;

/// Trait for backend model clients.
///
/// A client is bound to one model identifier for its whole lifetime;
/// rebinding means constructing a new client.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Construct a client bound to an endpoint and model identifier
    fn bind(endpoint: &str, model: &str) -> Self
    where
        Self: Sized;

    /// The model identifier this client is bound to
    fn model(&self) -> &str;

    /// Submit an ordered list of turns and return the generated reply text
    async fn generate(&self, turns: &[ChatMessage]) -> Result<String, ModelError>;
}
