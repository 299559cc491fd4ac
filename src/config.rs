//! Global spacecal configuration.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use chrono::{Locale, Weekday};
use chrono_tz::Tz;
use serde::Deserialize;
use spacecal_core::GridConfig;

/// Global configuration at ~/.config/spacecal/config.toml
///
/// All fields are optional; anything missing falls back to the engine
/// defaults (UTC, Monday week start, POSIX locale).
#[derive(Deserialize, Clone, Default)]
pub struct GlobalConfig {
    /// IANA timezone name, e.g. "Europe/Berlin"
    pub timezone: Option<String>,

    /// Locale for day and month names, e.g. "de_DE"
    pub locale: Option<String>,

    /// First day of the week, e.g. "monday" or "sunday"
    pub week_start: Option<String>,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("spacecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, falling back to defaults when the file is
    /// missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid spacecal config")
    }

    /// Resolve into the engine's grid configuration. An explicit timezone
    /// override (CLI flag) wins over the config file.
    pub fn grid_config(&self, timezone_override: Option<&str>) -> Result<GridConfig> {
        let mut config = GridConfig::default();

        if let Some(name) = timezone_override.or(self.timezone.as_deref()) {
            config.tz = name
                .parse::<Tz>()
                .map_err(|e| anyhow!("Unknown timezone '{name}': {e}"))?;
        }
        if let Some(name) = &self.locale {
            config.locale = Locale::try_from(name.as_str())
                .map_err(|_| anyhow!("Unknown locale '{name}'"))?;
        }
        if let Some(name) = &self.week_start {
            config.week_start = Weekday::from_str(name)
                .map_err(|_| anyhow!("'{name}' is not a weekday"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_engine_defaults() {
        let config = GlobalConfig::parse("").unwrap().grid_config(None).unwrap();
        assert_eq!(config.tz, chrono_tz::UTC);
        assert_eq!(config.week_start, Weekday::Mon);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            timezone = "Europe/Berlin"
            locale = "de_DE"
            week_start = "sunday"
        "#;
        let config = GlobalConfig::parse(toml).unwrap().grid_config(None).unwrap();
        assert_eq!(config.tz, chrono_tz::Europe::Berlin);
        assert_eq!(config.week_start, Weekday::Sun);
    }

    #[test]
    fn test_timezone_override_wins() {
        let global = GlobalConfig::parse("timezone = \"Europe/Berlin\"").unwrap();
        let config = global.grid_config(Some("America/New_York")).unwrap();
        assert_eq!(config.tz, chrono_tz::America::New_York);
    }

    #[test]
    fn test_bad_timezone_fails() {
        let global = GlobalConfig::default();
        assert!(global.grid_config(Some("Nowhere/Special")).is_err());
    }
}
