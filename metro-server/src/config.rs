//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;

/// Environment variable holding the booking signing secret.
pub const SIGNING_SECRET_VAR: &str = "METRO_SIGNING_SECRET";

/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Environment variable pointing at a JSON network description.
pub const NETWORK_FILE_VAR: &str = "METRO_NETWORK_FILE";

/// Environment variable for the route cache size.
pub const ROUTE_CACHE_CAPACITY_VAR: &str = "METRO_ROUTE_CACHE_CAPACITY";

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required variable absent or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// Variable present but unparseable
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the metro server.
#[derive(Clone)]
pub struct ServerConfig {
    /// Secret used to sign booking tokens.
    pub signing_secret: String,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Network description file; the built-in seed is used when absent.
    pub network_file: Option<PathBuf>,

    /// Route cache settings.
    pub route_cache: CacheConfig,
}

impl ServerConfig {
    /// Create a config with the given signing secret and defaults elsewhere.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            network_file: None,
            route_cache: CacheConfig::default(),
        }
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup(SIGNING_SECRET_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(SIGNING_SECRET_VAR))?;
        let mut config = Self::new(secret);

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            let addr: SocketAddr = value.parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
            config = config.with_bind_addr(addr);
        }

        if let Some(path) = lookup(NETWORK_FILE_VAR).filter(|p| !p.is_empty()) {
            config = config.with_network_file(path);
        }

        if let Some(value) = lookup(ROUTE_CACHE_CAPACITY_VAR) {
            let capacity: u64 = value.parse().map_err(|_| ConfigError::Invalid {
                var: ROUTE_CACHE_CAPACITY_VAR,
                value: value.clone(),
            })?;
            config = config.with_route_cache_capacity(capacity);
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Load the network from a JSON file instead of the built-in seed.
    pub fn with_network_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.network_file = Some(path.into());
        self
    }

    /// Set the maximum number of cached routes.
    pub fn with_route_cache_capacity(mut self, capacity: u64) -> Self {
        self.route_cache.max_capacity = capacity;
        self
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("signing_secret", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("network_file", &self.network_file)
            .field("route_cache", &self.route_cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_secret_only() {
        let config = ServerConfig::from_lookup(lookup(&[(SIGNING_SECRET_VAR, "s3cret")])).unwrap();

        assert_eq!(config.signing_secret, "s3cret");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(config.network_file.is_none());
        assert_eq!(config.route_cache, CacheConfig::default());
    }

    #[test]
    fn secret_is_required() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(SIGNING_SECRET_VAR));
        assert_eq!(err.to_string(), "METRO_SIGNING_SECRET must be set");

        let err = ServerConfig::from_lookup(lookup(&[(SIGNING_SECRET_VAR, "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(SIGNING_SECRET_VAR));
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            (SIGNING_SECRET_VAR, "s3cret"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (NETWORK_FILE_VAR, "/etc/metro/network.json"),
            (ROUTE_CACHE_CAPACITY_VAR, "64"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.network_file,
            Some(PathBuf::from("/etc/metro/network.json"))
        );
        assert_eq!(config.route_cache.max_capacity, 64);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[
            (SIGNING_SECRET_VAR, "s3cret"),
            (BIND_ADDR_VAR, "localhost"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: "localhost".to_string()
            }
        );

        let err = ServerConfig::from_lookup(lookup(&[
            (SIGNING_SECRET_VAR, "s3cret"),
            (ROUTE_CACHE_CAPACITY_VAR, "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var, .. } if var == ROUTE_CACHE_CAPACITY_VAR));
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", ServerConfig::new("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }
}
