use crate::error::ConfigError;
use crate::services::quidax::DEFAULT_BASE_URL;
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "TICKER_BIND_ADDR";
pub const BASE_URL_VAR: &str = "QUIDAX_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment (after `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                name: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(BASE_URL_VAR) {
            let trimmed = value.trim_end_matches('/');
            if trimmed.is_empty() {
                return Err(ConfigError::Invalid {
                    name: BASE_URL_VAR,
                    value,
                });
            }
            config.base_url = trimmed.to_string();
        }

        Ok(config)
    }
}
