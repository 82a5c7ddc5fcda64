//! Process configuration, read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "COINBANK_ADDR";

/// Listen address used when `COINBANK_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3333";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?;

        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_3333() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.addr.port(), 3333);
    }

    #[test]
    fn reads_addr_from_lookup() {
        let config = Config::from_lookup(|key| {
            (key == ADDR_VAR).then(|| "127.0.0.1:8081".to_string())
        })
        .unwrap();
        assert_eq!(config.addr.port(), 8081);
    }

    #[test]
    fn rejects_malformed_addr() {
        let err = Config::from_lookup(|_| Some("not-an-addr".to_string())).unwrap_err();
        assert!(err.to_string().contains(ADDR_VAR));
    }
}
