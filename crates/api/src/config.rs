//! Process configuration, read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `ORDERDESK_BIND_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: SocketAddr,
    /// `ORDERDESK_SEED_FILE`: JSON file of customers/products loaded into the
    /// in-memory stores at startup.
    pub seed_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            seed_file: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match lookup("ORDERDESK_BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("ORDERDESK_BIND_ADDR is not a socket address: {raw}"))?,
            None => {
                tracing::warn!("ORDERDESK_BIND_ADDR not set; using {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR
            }
        };

        let seed_file = lookup("ORDERDESK_SEED_FILE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            seed_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn reads_bind_addr_and_seed_file() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("ORDERDESK_BIND_ADDR", "127.0.0.1:9090"),
            ("ORDERDESK_SEED_FILE", "/etc/orderdesk/seed.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/orderdesk/seed.json")));
    }

    #[test]
    fn blank_seed_file_means_none() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[("ORDERDESK_SEED_FILE", "  ")])).unwrap();
        assert_eq!(config.seed_file, None);
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        let err = ApiConfig::from_lookup(lookup_from(&[("ORDERDESK_BIND_ADDR", "localhost")]))
            .unwrap_err();
        assert!(err.to_string().contains("ORDERDESK_BIND_ADDR"));
    }
}
