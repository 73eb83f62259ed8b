use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Default tracker address used when `indexer.base_url` is not set.
pub const DEFAULT_BASE_URL: &str = "https://nebulance.io/";

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub indexer: IndexerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Tracker connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexerConfig {
    /// Tracker site URL (e.g., "https://nebulance.io/")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key generated in the tracker's user settings
    pub api_key: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Optional User-Agent override for outbound requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl IndexerConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }

    /// Base URL with exactly one trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> String {
        format!("{}/", self.base_url.trim().trim_end_matches('/'))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub indexer: SanitizedIndexerConfig,
}

/// Sanitized indexer config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedIndexerConfig {
    pub base_url: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            indexer: SanitizedIndexerConfig {
                base_url: config.indexer.base_url(),
                api_key_configured: !config.indexer.api_key.trim().is_empty(),
                timeout_secs: config.indexer.timeout_secs,
            },
        }
    }
}
