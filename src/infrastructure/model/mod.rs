mod adapter;
mod ollama;
mod traits;
mod types;

pub use adapter::MessageAdapter;
pub use ollama::OllamaClient;
pub use traits::ModelClient;
pub use types::ModelError;
