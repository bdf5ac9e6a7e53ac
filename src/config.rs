use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::Network;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParlayConfig {
    #[serde(default)]
    pub network: Network,
    /// Overrides the network's public RPC endpoint.
    pub rpc_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub parlay: ParlayConfig,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        debug!(?config, "loaded config");
        Ok(config)
    }

    pub fn rpc_url(&self) -> String {
        self.parlay
            .rpc_url
            .clone()
            .unwrap_or_else(|| self.parlay.network.default_rpc_url().to_string())
    }
}
