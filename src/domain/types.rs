use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Conversation role as recognized by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Backend turn tag for this role.
    pub fn turn_tag(self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "human",
            MessageRole::Assistant => "assistant",
        }
    }

    /// Parse a wire role string. Anything outside the three
    /// recognized values is rejected by the caller.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "system" => Some(MessageRole::System),
            "user" => Some(MessageRole::User),
            "assistant" => Some(MessageRole::Assistant),
            _ => None,
        }
    }
}

/// A message as received on the wire, role not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IncomingMessage {
    /// One of "system", "user", "assistant"
    pub role: String,
    pub content: String,
}

/// A validated conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
