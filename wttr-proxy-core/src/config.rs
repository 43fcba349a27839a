use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

/// Server configuration loaded from a TOML file.
///
/// Every field has a default, so a missing or empty config file still yields
/// a runnable server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Port to bind the server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind to all interfaces (0.0.0.0) instead of just localhost.
    #[serde(default = "default_bind_all")]
    pub bind_all: bool,

    /// Base URL of the upstream weather provider.
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Timeout for a single upstream request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_bind_all() -> bool {
    true
}

fn default_upstream_url() -> String {
    "https://wttr.in".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_all: default_bind_all(),
            upstream_url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Timeout applied to a single upstream request.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
