use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{client, controller};

/// Deploy-time configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.weatherapi.com/v1/current.json"
/// default_location = "Mumbai"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// WeatherAPI.com key. Required before any fetch can happen.
    pub api_key: Option<String>,

    /// Current-conditions endpoint. Overridable mainly for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Location loaded on startup when none is given.
    #[serde(default = "default_location")]
    pub default_location: String,
}

fn default_base_url() -> String {
    client::DEFAULT_BASE_URL.to_string()
}

fn default_location() -> String {
    controller::DEFAULT_LOCATION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_location: default_location(),
        }
    }
}

impl Config {
    /// The API key, or an actionable error when it was never configured.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weatherpanel configure` and enter your WeatherAPI.com key."
            )
        })
    }

    /// Load config from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file yet.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherpanel", "weatherpanel")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_weatherapi_and_mumbai() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, "https://api.weatherapi.com/v1/current.json");
        assert_eq!(cfg.default_location, "Mumbai");
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `weatherpanel configure`"));
    }

    #[test]
    fn require_api_key_rejects_empty_string() {
        let cfg = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(cfg.require_api_key().is_err());
    }

    #[test]
    fn minimal_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("api_key = \"KEY\"").expect("minimal config parses");

        assert_eq!(cfg.require_api_key().expect("key present"), "KEY");
        assert_eq!(cfg.base_url, "https://api.weatherapi.com/v1/current.json");
        assert_eq!(cfg.default_location, "Mumbai");
    }

    #[test]
    fn full_toml_round_trips() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            base_url: "http://localhost:8080/v1/current.json".to_string(),
            default_location: "Pune".to_string(),
        };

        let serialized = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed: Config = toml::from_str(&serialized).expect("parses back");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.default_location, "Pune");
    }
}
