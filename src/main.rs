//! Gateway binary entry point
//!
//! Runs the HTTP front for a local Ollama runtime: POST /chat forwards a
//! conversation, GET /model-info reports the bound model.

use clap::Parser;
use ollama_gateway::application::gateway::ChatGateway;
use ollama_gateway::config::{ConfigError, GatewayConfig};
use ollama_gateway::infrastructure::model::OllamaClient;
use ollama_gateway::infrastructure::server;
use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "ollama-gateway", about = "HTTP gateway for a local Ollama runtime")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Ollama endpoint (overrides config if specified)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting Ollama chat gateway");

    let config_path = args.config.as_deref().map(Path::new);
    let mut config = GatewayConfig::load(config_path)?;
    if let Some(endpoint) = args.endpoint {
        config.ollama_endpoint = endpoint;
    }

    let addr: SocketAddr = match args.addr {
        Some(addr) => addr,
        None => config
            .bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: config.bind.clone(),
                source,
            })?,
    };

    debug!(endpoint = %config.ollama_endpoint, "Configuration loaded");

    let gateway = Arc::new(ChatGateway::<OllamaClient>::new(
        config.ollama_endpoint.clone(),
    ));

    info!(%addr, "Gateway server starting");
    server::serve(gateway, addr, &config.cors_origins).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}
