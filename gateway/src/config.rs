//! Gateway configuration loaded from environment variables.

use std::net::SocketAddr;

use posts_core::BasicCredentials;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_USERNAME: &str = "username";
const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_RUST_LOG: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GATEWAY_BIND_ADDRESS {value:?} is not a socket address: {source}")]
    BindAddress {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("POSTS_BASE_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket the gateway listens on
    pub bind_address: SocketAddr,
    /// Base URL of the remote posts API
    pub posts_base_url: String,
    /// Basic-auth credentials attached to every outbound request
    pub credentials: BasicCredentials,
    /// Tracing filter directive
    pub rust_log: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("GATEWAY_BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddress {
                value: bind.clone(),
                source,
            })?;

        let posts_base_url = lookup("POSTS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if posts_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let credentials = BasicCredentials::new(
            lookup("POSTS_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            lookup("POSTS_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        );

        Ok(Self {
            bind_address,
            posts_base_url,
            credentials,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
        })
    }
}
