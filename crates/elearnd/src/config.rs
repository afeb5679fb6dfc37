//! Runtime configuration sourced from environment variables.

use std::env;

/// Server configuration with environment-variable overrides.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub address: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the SQLite database file.
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8080,
            db_path: "elearning.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `ELEARND_ADDR`, `ELEARND_PORT` and `ELEARND_DB`, falling back
    /// to the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            address: env::var("ELEARND_ADDR").unwrap_or(defaults.address),
            port: env::var("ELEARND_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            db_path: env::var("ELEARND_DB").unwrap_or(defaults.db_path),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, "elearning.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
