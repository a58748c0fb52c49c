use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{probe::NetworkStatusProbe, recents::RecentsStore};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Timeout for the weather request, in seconds. Defaults to 10.
    pub request_timeout_secs: Option<u64>,

    /// Host:port the connectivity probe dials.
    pub probe_host: Option<String>,

    /// Override for the recents file location.
    pub recents_path: Option<PathBuf>,
}

impl Config {
    /// The stored API key, with a setup hint when it is missing.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `wizard configure` and enter your OpenWeather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn probe_host(&self) -> &str {
        self.probe_host.as_deref().unwrap_or(NetworkStatusProbe::DEFAULT_HOST)
    }

    /// Where the recents file lives: the configured override, or the
    /// platform data directory.
    pub fn recents_file_path(&self) -> Result<PathBuf> {
        match &self.recents_path {
            Some(path) => Ok(path.clone()),
            None => RecentsStore::default_path(),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
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
        let dirs = ProjectDirs::from("dev", "weather-wizard", "wizard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `wizard configure`"));
    }

    #[test]
    fn set_and_read_api_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert_eq!(cfg.api_key().expect("api key must exist"), "KEY");
    }

    #[test]
    fn request_timeout_defaults_to_ten_seconds() {
        let cfg = Config::default();
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));

        let cfg = Config { request_timeout_secs: Some(3), ..Config::default() };
        assert_eq!(cfg.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn probe_host_defaults_to_upstream() {
        let cfg = Config::default();
        assert_eq!(cfg.probe_host(), NetworkStatusProbe::DEFAULT_HOST);

        let cfg = Config { probe_host: Some("localhost:80".into()), ..Config::default() };
        assert_eq!(cfg.probe_host(), "localhost:80");
    }

    #[test]
    fn recents_path_override_is_honored() {
        let cfg = Config {
            recents_path: Some(PathBuf::from("/tmp/recents.json")),
            ..Config::default()
        };

        let path = cfg.recents_file_path().expect("path must resolve");
        assert_eq!(path, PathBuf::from("/tmp/recents.json"));
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            request_timeout_secs: Some(5),
            probe_host: None,
            recents_path: None,
        };

        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.request_timeout_secs, Some(5));
    }
}
