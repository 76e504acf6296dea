//! Client Configuration
//!
//! Settings embedded at build time from `config.toml`.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Embedded default configuration
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Auto-dismiss durations in milliseconds (0 = sticky)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_short_toast")]
    pub success_ms: u32,
    #[serde(default = "default_short_toast")]
    pub info_ms: u32,
    #[serde(default = "default_short_toast")]
    pub warning_ms: u32,
    #[serde(default = "default_error_toast")]
    pub error_ms: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClockConfig {
    /// How often the wall clock used for reservation classification ticks
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_short_toast() -> u32 {
    3000
}

fn default_error_toast() -> u32 {
    4000
}

fn default_refresh_secs() -> u32 {
    30
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_ms: default_short_toast(),
            info_ms: default_short_toast(),
            warning_ms: default_short_toast(),
            error_ms: default_error_toast(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { refresh_secs: default_refresh_secs() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig { base_url: "http://localhost:8080/api".to_string() },
            logging: LoggingConfig::default(),
            notifications: NotificationConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl Config {
    /// Load the embedded configuration, applying the build-time API override
    pub fn load() -> Result<Self> {
        let mut config = Self::from_toml_str(EMBEDDED_CONFIG)?;
        if let Some(url) = option_env!("LIBRARY_API_URL") {
            config.api.base_url = url.to_string();
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("api.base_url must be an http(s) URL, got '{}'", base_url);
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error, off",
                self.logging.level
            );
        }

        if self.clock.refresh_secs == 0 {
            bail!("clock.refresh_secs must be greater than 0");
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = Config::from_toml_str(EMBEDDED_CONFIG).expect("embedded config should parse");
        assert_eq!(config.api_base(), "http://localhost:8080/api");
        assert_eq!(config.notifications.error_ms, 4000);
    }

    #[test]
    fn test_sections_default_when_missing() {
        let config = Config::from_toml_str("[api]\nbase_url = \"https://example.org/api/\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.notifications.success_ms, 3000);
        assert_eq!(config.clock.refresh_secs, 30);
        assert_eq!(config.api_base(), "https://example.org/api");
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let result = Config::from_toml_str("[api]\nbase_url = \"  \"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let toml = "[api]\nbase_url = \"http://localhost\"\n[logging]\nlevel = \"loud\"\n";
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_rejects_zero_clock_refresh() {
        let toml = "[api]\nbase_url = \"http://localhost\"\n[clock]\nrefresh_secs = 0\n";
        assert!(Config::from_toml_str(toml).is_err());
    }
}
