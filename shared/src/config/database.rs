//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for the SQLite key store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from("totally_not_my_privateKeys.db"),
            max_connections: 5,
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// Reads `DATABASE_PATH`, `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_CONNECT_TIMEOUT`, falling back to defaults when unset.
    pub fn from_env() -> Self {
        let path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "totally_not_my_privateKeys.db".to_string());
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Self {
            path,
            max_connections,
            connect_timeout,
        }
    }

    /// Create a new database configuration with an explicit file path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = DatabaseConfig::new("/tmp/keys.db").with_max_connections(2);
        assert_eq!(config.path, "/tmp/keys.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connect_timeout, 30);
    }
}
