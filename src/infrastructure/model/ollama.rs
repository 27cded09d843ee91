//! Ollama client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::adapter::MessageAdapter;
use super::traits::ModelClient;
use super::types::ModelError;
use crate::domain::types::ChatMessage;

/// Ollama client for a local LLM runtime.
///
/// No timeout is applied to the chat call; a hung backend blocks the
/// request that triggered it.
#[derive(Clone)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    http: Client,
}

impl OllamaClient {
    fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    fn bind(endpoint: &str, model: &str) -> Self {
        info!(endpoint, model, "Binding Ollama client");
        Self {
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            http: Client::new(),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, turns: &[ChatMessage]) -> Result<String, ModelError> {
        let url = self.build_url("/api/chat");

        let payload = OllamaRequest {
            model: self.model.clone(),
            messages: MessageAdapter::to_ollama_format(turns),
            stream: false,
        };

        info!(
            model = self.model.as_str(),
            turns = turns.len(),
            "Sending request to Ollama"
        );

        let response: OllamaResponse = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(ModelError::network)?
            .error_for_status()
            .map_err(ModelError::network)?
            .json()
            .await
            .map_err(ModelError::network)?;

        debug!("Received response from Ollama");

        let content = response
            .message
            .ok_or_else(|| ModelError::invalid_response("missing message"))?
            .content;

        Ok(content)
    }
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<serde_json::Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    message: Option<OllamaMessage>,
}

#[derive(Deserialize)]
struct OllamaMessage {
    content: String,
}
