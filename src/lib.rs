pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::gateway::{ChatGateway, GatewayError, ModelInfo};
pub use config::GatewayConfig;
pub use domain::types::{ChatMessage, IncomingMessage, MessageRole};
pub use infrastructure::{model, server};
