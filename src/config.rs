//! Configuration
//!
//! Analysis thresholds and report options, loaded from TOML. Every field
//! has a default so running without a config file works.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Report rendering options
    #[serde(default)]
    pub report: ReportConfig,
}

/// Tunable rule thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Signal level (dBm) above which an AP is suspiciously strong
    #[serde(default = "default_strong_signal_dbm")]
    pub strong_signal_dbm: i32,

    /// Signal level (dBm) below which a client is flagged as weak
    #[serde(default = "default_weak_client_dbm")]
    pub weak_client_dbm: i32,

    /// Station count per network that triggers a device audit warning
    #[serde(default = "default_station_alert_count")]
    pub station_alert_count: usize,

    /// Beacon count below which an AP looks hidden or sporadic
    #[serde(default = "default_low_beacon_count")]
    pub low_beacon_count: i64,

    /// Data packet count above which traffic is worth noting
    #[serde(default = "default_high_data_count")]
    pub high_data_count: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strong_signal_dbm: default_strong_signal_dbm(),
            weak_client_dbm: default_weak_client_dbm(),
            station_alert_count: default_station_alert_count(),
            low_beacon_count: default_low_beacon_count(),
            high_data_count: default_high_data_count(),
        }
    }
}

/// Report rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Cap on informational items printed in full
    #[serde(default = "default_max_info_items")]
    pub max_info_items: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_info_items: default_max_info_items(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load config from default locations or fall back to defaults
    pub fn load_or_default() -> Result<Self> {
        let paths = [
            PathBuf::from("/etc/airaudit/config.toml"),
            dirs_next::config_dir()
                .map(|p| p.join("airaudit/config.toml"))
                .unwrap_or_default(),
            PathBuf::from("config.toml"),
        ];

        for path in &paths {
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

fn default_strong_signal_dbm() -> i32 {
    -40
}

fn default_weak_client_dbm() -> i32 {
    -85
}

fn default_station_alert_count() -> usize {
    5
}

fn default_low_beacon_count() -> i64 {
    100
}

fn default_high_data_count() -> i64 {
    20000
}

fn default_max_info_items() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.thresholds.strong_signal_dbm, -40);
        assert_eq!(config.thresholds.weak_client_dbm, -85);
        assert_eq!(config.thresholds.station_alert_count, 5);
        assert_eq!(config.thresholds.low_beacon_count, 100);
        assert_eq!(config.thresholds.high_data_count, 20000);
        assert_eq!(config.report.max_info_items, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            parsed.thresholds.strong_signal_dbm,
            config.thresholds.strong_signal_dbm
        );
        assert_eq!(parsed.report.max_info_items, config.report.max_info_items);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = "[thresholds]\nstrong_signal_dbm = -30\n";
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.thresholds.strong_signal_dbm, -30);
        assert_eq!(config.thresholds.weak_client_dbm, -85);
        assert_eq!(config.report.max_info_items, 10);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.thresholds.station_alert_count = 8;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.thresholds.station_alert_count, 8);
        assert_eq!(loaded.thresholds.low_beacon_count, 100);
    }
}
