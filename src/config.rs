//! Application configuration
//!
//! Loaded from TOML. Every section and key is optional; anything missing
//! falls back to its default, and a missing file yields the defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! shutdown_timeout = 30
//!
//! [storage]
//! backend = "sqlite"          # or "memory"
//! sqlite_path = "./truckers.db"
//!
//! [logging]
//! level = "info"
//! format = "text"             # or "json"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::InfraError;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "TRUCKERS_CONFIG";

/// `$TRUCKERS_CONFIG`, else `~/.config/truckers/config.toml`, else
/// `./config.toml` when no config directory is known.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .map(|dir| dir.join("truckers").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on restart
    #[default]
    Memory,
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub sqlite_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            sqlite_path: "./truckers.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` env-filter directive; `RUST_LOG` wins when set
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `path`, returning defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, InfraError> {
        toml::from_str(raw).map_err(|e| InfraError::Config(e.to_string()))
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), InfraError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| InfraError::Config(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), InfraError> {
        if self.server.host.trim().is_empty() {
            return Err(InfraError::Config("server.host must not be empty".into()));
        }
        if self.storage.backend == StorageBackend::Sqlite && self.storage.sqlite_path.trim().is_empty()
        {
            return Err(InfraError::Config(
                "storage.sqlite_path is required for the sqlite backend".into(),
            ));
        }
        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(InfraError::Config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = AppConfig::parse("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::parse(
            r#"
            [server]
            port = 9100

            [storage]
            backend = "sqlite"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.shutdown_timeout, 30);
        assert_eq!(cfg.storage.backend, StorageBackend::Sqlite);
        assert_eq!(cfg.storage.sqlite_path, "./truckers.db");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn rejects_unknown_backend_and_bad_format() {
        assert!(AppConfig::parse("[storage]\nbackend = \"firestore\"").is_err());

        let mut cfg = AppConfig::default();
        cfg.logging.format = "xml".into();
        assert!(matches!(cfg.validate(), Err(InfraError::Config(_))));

        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Sqlite;
        cfg.storage.sqlite_path = " ".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_file_loads_defaults_and_save_round_trips() {
        let dir = std::env::temp_dir().join(format!("truckers-cfg-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("config.toml");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());

        let mut cfg = AppConfig::default();
        cfg.server.port = 7000;
        cfg.logging.format = "json".into();
        cfg.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), cfg);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("SQLite".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}
