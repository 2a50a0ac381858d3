//! Server configuration.

use std::{env, fmt, str::FromStr};

/// Where user records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite database at `database_url`.
    Sqlite,
    /// Process memory. Contents are lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("Unknown storage backend: {other} (expected sqlite or memory)"),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Storage backend.
    pub storage: StorageBackend,
    /// Database URL (SQLite backend only).
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub db_max_connections: u32,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = var("USER_SERVER_STORAGE")
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(StorageBackend::Sqlite);

        Ok(Self {
            host: var("USER_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("USER_SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            storage,
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:users.db?mode=rwc".to_string()),
            db_max_connections: var("USER_SERVER_DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            log_level: var("USER_SERVER_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
