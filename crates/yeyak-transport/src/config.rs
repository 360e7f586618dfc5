//! Server address configuration.

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Address of the reservation agent backend.
///
/// Constructed explicitly and handed to the transport constructor; the rest
/// of the client never reads ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration for the given address.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Loads the configuration from `YEYAK_SERVER_HOST` and
    /// `YEYAK_SERVER_PORT`, falling back to `127.0.0.1:5000` for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        let host = env::var("YEYAK_SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("YEYAK_SERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }

    /// Returns the base URL for requests to the backend.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_explicit_address() {
        let config = ServerConfig::new("reserve.example.com", 8080);
        assert_eq!(config.base_url(), "http://reserve.example.com:8080");
    }
}
