//! Configuration for the lotto shell.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest number of decimal places shown for the return rate.
pub const MAX_YIELD_DECIMALS: u8 = 6;

/// Shell configuration. Every section may be omitted from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LottoConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Invalid answers tolerated per question before giving up.
    /// Unset means ask until a valid answer arrives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places of the percentage return rate
    #[serde(default = "default_yield_decimals")]
    pub yield_decimals: u8,

    /// Print every purchased ticket
    #[serde(default = "default_show_tickets")]
    pub show_tickets: bool,
}

fn default_yield_decimals() -> u8 {
    1
}

fn default_show_tickets() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            yield_decimals: default_yield_decimals(),
            show_tickets: default_show_tickets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LottoConfig {
    /// Load and validate config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: LottoConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.max_attempts == Some(0) {
            bail!("input.max_attempts must be at least 1 when set");
        }
        if self.output.yield_decimals > MAX_YIELD_DECIMALS {
            bail!(
                "output.yield_decimals must be at most {}, got {}",
                MAX_YIELD_DECIMALS,
                self.output.yield_decimals
            );
        }
        if self.logging.level.trim().is_empty() {
            bail!("logging.level must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LottoConfig::default();
        assert_eq!(config.input.max_attempts, None);
        assert_eq!(config.output.yield_decimals, 1);
        assert!(config.output.show_tickets);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: LottoConfig = toml::from_str("").unwrap();
        assert_eq!(config, LottoConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config: LottoConfig = toml::from_str(
            r#"
            [input]
            max_attempts = 3

            [output]
            show_tickets = false
            "#,
        )
        .unwrap();
        assert_eq!(config.input.max_attempts, Some(3));
        assert!(!config.output.show_tickets);
        assert_eq!(config.output.yield_decimals, 1);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = LottoConfig::default();
        config.input.max_attempts = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_decimals() {
        let mut config = LottoConfig::default();
        config.output.yield_decimals = MAX_YIELD_DECIMALS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("lotto.toml");

        let mut config = LottoConfig::default();
        config.input.max_attempts = Some(5);
        config.output.yield_decimals = 2;
        config.save(&path).unwrap();

        let loaded = LottoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lotto.toml");
        fs::write(&path, "[output]\nyield_decimals = 9\n").unwrap();

        assert!(LottoConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = LottoConfig::load(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
