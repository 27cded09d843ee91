use crate::domain::types::IncomingMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<IncomingMessage>,
    pub model: String,
}

/// Chat result body. A successful reply is the raw JSON string; a
/// business-logic failure is an error object. Both ship with HTTP 200,
/// as the original service did.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply(String),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ModelInfoResponse {
    Info {
        model_name: String,
        provider: String,
    },
    Error(ErrorResponse),
}
