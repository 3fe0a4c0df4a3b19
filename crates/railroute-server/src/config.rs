//! Server configuration

use railroute_sdk::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How [`ServerConfig::load`] obtained its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Config file and/or environment variables
    Sources,
    /// No usable source; built-in defaults, with the reason
    Defaults(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Record routing metrics and expose them on /metrics
    pub enable_metrics: bool,

    /// Emit a debug event for every routing decision
    pub log_decisions: bool,

    /// Base URL share links are built from
    pub share_base_url: String,

    /// Log level for the railroute crates when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_metrics: true,
            log_decisions: true,
            share_base_url: "/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file.
    ///
    /// Runs before logging is set up, so how the configuration was obtained is
    /// returned for the caller to log.
    pub fn load() -> anyhow::Result<(Self, ConfigOrigin)> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("RAILROUTE").try_parsing(true))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map(|config| (config, ConfigOrigin::Sources))
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => Ok((Self::default(), ConfigOrigin::Defaults(e.to_string()))),
        }
    }

    /// Load configuration from one explicit file; missing keys take defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Default `EnvFilter` directives when RUST_LOG is not set
    pub fn log_filter(&self) -> String {
        format!(
            "railroute_server={level},railroute_sdk={level},railroute_runtime={level},railroute_core={level},tower_http=debug",
            level = self.log_level
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// SDK settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .enable_metrics(self.enable_metrics)
            .log_decisions(self.log_decisions)
            .with_share_base_url(self.share_base_url.clone())
    }
}
