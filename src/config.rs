use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct FreeIpaConfig {
    /// Server host name; the client talks to `https://{host}/ipa`.
    pub host: String,
    pub username: String,
    pub password: String,
    /// Verify the server TLS certificate. Defaults to true.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    /// API version override; the client default is used when unset.
    #[serde(default)]
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub freeipa: FreeIpaConfig,
}

impl Config {
    /// Loads `config.toml` from the current directory.
    pub fn new() -> Result<Self> {
        Self::from_file("config.toml")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        info!("Loaded configuration for {}", config.freeipa.host);
        Ok(config)
    }
}

fn default_verify_tls() -> bool {
    true
}
