mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/gateway.toml";

/// Default listen address, all interfaces (development posture)
pub const DEFAULT_BIND: &str = "0.0.0.0:5006";

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

/// Gateway configuration loaded from gateway.toml
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: String,
    pub ollama_endpoint: String,
    pub cors_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            ollama_endpoint: DEFAULT_OLLAMA_ENDPOINT.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    bind: Option<String>,
    #[serde(default)]
    cors_origins: Vec<String>,
    ollama: Option<RawOllama>,
}

#[derive(Debug, Deserialize, Default)]
struct RawOllama {
    endpoint: Option<String>,
}

impl From<RawConfig> for GatewayConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = GatewayConfig::default();
        Self {
            bind: raw.bind.unwrap_or(defaults.bind),
            ollama_endpoint: raw
                .ollama
                .and_then(|o| o.endpoint)
                .unwrap_or(defaults.ollama_endpoint),
            cors_origins: raw.cors_origins,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a file path (or the default path if None).
    ///
    /// The default path is allowed to be absent, in which case built-in
    /// defaults apply. An explicitly requested path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));

        debug!(path = %config_path.display(), "Reading gateway configuration file");

        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                if explicit {
                    return Err(ConfigError::NotFound {
                        path: config_path.to_path_buf(),
                    });
                }
                debug!("No configuration file found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Self::from(parsed))
    }
}
