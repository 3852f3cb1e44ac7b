//! Configuration loading and management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::error::{ConfigError, DinewheelResult};

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_event_capacity() -> usize {
    1024
}

/// Which persistence backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Keep the collection in process memory only
    Memory,
    /// Embedded LMDB database (requires the `lmdb` feature)
    Lmdb,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Memory
    }
}

/// Persistence configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the LMDB environment (lmdb backend only)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP surface binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Buffer size for the notification bus
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            storage: StorageConfig::default(),
            event_capacity: default_event_capacity(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> DinewheelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path, e),
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> DinewheelResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.path.is_none());
        assert_eq!(config.event_capacity, 1024);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
listen_addr: "0.0.0.0:8080"
storage:
  backend: lmdb
  path: /var/lib/dinewheel
event_capacity: 256
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.storage.backend, StorageBackend::Lmdb);
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/var/lib/dinewheel"))
        );
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let yaml = "storage:\n  backend: cloud\n";
        assert!(AppConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_yaml_serialization_roundtrip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.listen_addr, config.listen_addr);
        assert_eq!(parsed.storage.backend, config.storage.backend);
    }
}
