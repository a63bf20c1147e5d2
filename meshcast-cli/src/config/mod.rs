//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use meshcast_core::SplitConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Forecast source configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// MQTT transmission configuration
    #[serde(default)]
    pub mqtt: MqttConfig,

    /// Fragment splitting configuration
    #[serde(default)]
    pub split: SplitConfig,
}

/// Forecast source configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SourceConfig {
    /// Forecast page URL
    #[serde(default)]
    pub url: String,
}

/// MQTT transmission configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct MqttConfig {
    /// Broker hostname
    pub host: String,

    /// Broker port
    pub port: u16,

    /// Broker username
    pub username: String,

    /// Broker password
    pub password: String,

    /// Mesh node id placed in the payload's "from" field
    pub from: u32,

    /// Mesh channel index for the downlink
    pub channel: u8,

    /// Downlink topic
    pub topic: String,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1883,
            username: String::new(),
            password: String::new(),
            from: 0,
            channel: 0,
            topic: "msh/US/2/json/mqtt/".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&raw)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config
            .split
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_original_deployment() {
        let config = CliConfig::default();
        assert_eq!(config.mqtt.port, 1883);
        assert_eq!(config.mqtt.topic, "msh/US/2/json/mqtt/");
        assert_eq!(config.split.max_total_length, 200);
        assert_eq!(config.split.reserved_space, 6);
    }

    #[test]
    fn load_parses_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meshcast.toml");
        std::fs::write(
            &path,
            r#"
[source]
url = "https://forecast.example.org/zone.php"

[mqtt]
host = "broker.example.org"
port = 8883
username = "wx"
password = "secret"
from = 123456789
channel = 2
topic = "msh/EU/2/json/mqtt/"

[split]
max_total_length = 180
reserved_space = 8
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.source.url, "https://forecast.example.org/zone.php");
        assert_eq!(config.mqtt.host, "broker.example.org");
        assert_eq!(config.mqtt.from, 123456789);
        assert_eq!(config.split.max_total_length, 180);
        assert_eq!(config.split.reserved_space, 8);
    }

    #[test]
    fn load_fills_missing_sections_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meshcast.toml");
        std::fs::write(&path, "[source]\nurl = \"https://example.org\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.mqtt.host, "localhost");
        assert_eq!(config.split.max_total_length, 200);
    }

    #[test]
    fn load_rejects_invalid_split_budget() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meshcast.toml");
        std::fs::write(&path, "[split]\nmax_total_length = 6\nreserved_space = 6\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meshcast.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = CliConfig::load(Path::new("/nonexistent/meshcast.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
