use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_api_base() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_admin_prefix() -> String {
    "/admin".to_string()
}

fn default_debounce_window_ms() -> u64 {
    5_000
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client configuration, persisted as TOML under the data directory.
///
/// Environment variables `SITEPULSE_API_BASE` and `SITEPULSE_COLLECTOR_BASE`
/// override the file. An absent `collector_base` disables tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Collector endpoint base. `None` means tracking is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_base: Option<String>,

    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,

    /// Duplicate-suppression window for navigation events. The 5000 ms
    /// default mirrors the collector's expectations; it is approximate,
    /// not a semantic guarantee.
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Override for the mobile user-agent heuristic (regex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_pattern: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            collector_base: None,
            admin_prefix: default_admin_prefix(),
            debounce_window_ms: default_debounce_window_ms(),
            timeout_secs: default_timeout_secs(),
            mobile_pattern: None,
        }
    }
}

impl ClientConfig {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Self::load_from(&Self::default_path(data_dir))?;
        Ok(config.with_env_overrides())
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(sitepulse_core::Error::Io)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        self.save_to(&Self::default_path(data_dir))
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(sitepulse_core::Error::Io)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(sitepulse_core::Error::Io)?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Apply `SITEPULSE_*` environment overrides on top of file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base) = std::env::var("SITEPULSE_API_BASE")
            && !base.trim().is_empty()
        {
            self.api_base = base;
        }
        if let Ok(base) = std::env::var("SITEPULSE_COLLECTOR_BASE") {
            let trimmed = base.trim();
            self.collector_base = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        self
    }

    pub fn tracking_enabled(&self) -> bool {
        self.collector_base.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_file_absent() -> Result<()> {
        let temp_dir = TempDir::new().map_err(sitepulse_core::Error::Io)?;
        let config = ClientConfig::load_from(&ClientConfig::default_path(temp_dir.path()))?;

        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.admin_prefix, "/admin");
        assert_eq!(config.debounce_window_ms, 5_000);
        assert!(config.collector_base.is_none());
        assert!(!config.tracking_enabled());

        Ok(())
    }

    #[test]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new().map_err(sitepulse_core::Error::Io)?;

        let mut config = ClientConfig::default();
        config.api_base = "https://api.example.com".to_string();
        config.collector_base = Some("https://collect.example.com".to_string());
        config.debounce_window_ms = 2_500;

        config.save(temp_dir.path())?;
        let loaded = ClientConfig::load_from(&ClientConfig::default_path(temp_dir.path()))?;

        assert_eq!(loaded.api_base, "https://api.example.com");
        assert_eq!(
            loaded.collector_base.as_deref(),
            Some("https://collect.example.com")
        );
        assert_eq!(loaded.debounce_window_ms, 2_500);
        assert!(loaded.tracking_enabled());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new().map_err(sitepulse_core::Error::Io)?;
        let path = ClientConfig::default_path(temp_dir.path());
        std::fs::write(&path, "api_base = \"https://only.example\"\n")
            .map_err(sitepulse_core::Error::Io)?;

        let loaded = ClientConfig::load_from(&path)?;
        assert_eq!(loaded.api_base, "https://only.example");
        assert_eq!(loaded.debounce_window_ms, 5_000);
        assert_eq!(loaded.timeout_secs, 30);

        Ok(())
    }
}
