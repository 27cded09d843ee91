mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use error::ServerError;
pub use router::router;

use crate::application::gateway::ChatGateway;
use crate::infrastructure::model::ModelClient;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve<C>(
    gateway: Arc<ChatGateway<C>>,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<(), ServerError>
where
    C: ModelClient + 'static,
{
    router::serve(gateway, addr, cors_origins).await
}
