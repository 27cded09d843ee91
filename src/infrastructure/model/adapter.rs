//! Message adapter - converts validated turns to the backend wire format

use crate::domain::types::ChatMessage;
use serde_json::{Value, json};

/// Adapter for converting conversation turns to the Ollama chat format
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert turns to Ollama format, preserving order.
    /// Returns: [{"role": turn_tag, "content": "..."}]
    pub fn to_ollama_format(turns: &[ChatMessage]) -> Vec<Value> {
        turns
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role.turn_tag(),
                    "content": turn.content.clone()
                })
            })
            .collect()
    }
}
