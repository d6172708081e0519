use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

impl Config {
    /// Apply command-line `--port` / `--bind` values on top of the loaded
    /// configuration and re-validate the server section
    pub fn apply_overrides(
        &mut self,
        port: Option<u16>,
        bind: Option<String>,
    ) -> Result<(), String> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        self.server.validate()
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr().map(|_| ())
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| format!("Bind address '{}' is not a valid IP address", self.bind))
    }
}

/// In-memory store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start with the two fixed users and posts
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Execution limits and introspection for the GraphQL schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlConfig {
    #[serde(default = "default_true")]
    pub introspection: bool,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            introspection: true,
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    16
}

fn default_max_complexity() -> usize {
    256
}

impl GraphqlConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be greater than zero".to_string());
        }
        if self.max_complexity == 0 {
            return Err("max_complexity must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert!(config.store.seed);
        assert!(config.graphql.introspection);
        assert_eq!(config.graphql.max_depth, 16);
    }

    #[test]
    fn test_server_validation_valid() {
        let server = ServerConfig {
            port: 8080,
            bind: "127.0.0.1".to_string(),
        };
        assert!(server.validate().is_ok());
    }

    #[test]
    fn test_server_validation_invalid_bind() {
        let server = ServerConfig {
            port: 8080,
            bind: "localhost:8080".to_string(),
        };
        assert!(server.validate().is_err());
    }

    #[test]
    fn test_overrides_replace_port_and_bind() {
        let mut config = Config::default();
        config
            .apply_overrides(Some(8080), Some("127.0.0.1".to_string()))
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_absent_overrides_keep_loaded_values() {
        let mut config = Config::default();
        config.server.port = 5000;
        config.apply_overrides(None, None).unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind, "0.0.0.0");
    }

    #[test]
    fn test_invalid_bind_override_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(None, Some("not-an-ip".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_graphql_validation_zero_depth() {
        let graphql = GraphqlConfig {
            max_depth: 0,
            ..GraphqlConfig::default()
        };
        assert!(graphql.validate().is_err());
    }
}
