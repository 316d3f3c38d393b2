//! Desk configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock desk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted day-change amplitude, in percent.
pub const MAX_REFRESH_AMPLITUDE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub pad_x: f64,
    pub pad_y: f64,
    pub grid_divisions: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 260.0,
            pad_x: 32.0,
            pad_y: 22.0,
            grid_divisions: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Day changes are redrawn uniformly from `[-amplitude, +amplitude]`.
    pub refresh_amplitude: f64,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            refresh_amplitude: 0.8,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { reply_delay_ms: 200 }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    pub clear_after_ms: u64,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: 5000,
        }
    }
}

impl NewsletterConfig {
    pub fn clear_after(&self) -> Duration {
        Duration::from_millis(self.clear_after_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file. The TUI stays silent without one.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub chart: ChartConfig,
    pub market: MarketConfig,
    pub chat: ChatConfig,
    pub newsletter: NewsletterConfig,
    pub logging: LoggingConfig,
}

impl DeskConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DeskConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. Missing or unreadable files are errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.chart;
        if !(c.width.is_finite() && c.height.is_finite()) || c.width <= 0.0 || c.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "chart size must be positive, got {}x{}",
                c.width, c.height
            )));
        }
        if !(c.pad_x.is_finite() && c.pad_y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "chart padding must be finite, got {}x{}",
                c.pad_x, c.pad_y
            )));
        }
        if c.pad_x < 0.0 || c.pad_y < 0.0 || c.pad_x * 2.0 >= c.width || c.pad_y * 2.0 >= c.height {
            return Err(ConfigError::Invalid(format!(
                "chart padding {}x{} leaves no drawable area",
                c.pad_x, c.pad_y
            )));
        }
        if c.grid_divisions == 0 {
            return Err(ConfigError::Invalid("grid_divisions must be at least 1".into()));
        }
        let amp = self.market.refresh_amplitude;
        if !amp.is_finite() || !(0.0..=MAX_REFRESH_AMPLITUDE).contains(&amp) {
            return Err(ConfigError::Invalid(format!(
                "refresh_amplitude must be between 0 and {MAX_REFRESH_AMPLITUDE} percent, got {amp}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = DeskConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(200));
        assert_eq!(config.newsletter.clear_after(), Duration::from_secs(5));
        assert_eq!(config.market.refresh_amplitude, 0.8);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = DeskConfig::from_toml_str(
            r#"
            [chart]
            width = 800.0

            [market]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.chart.width, 800.0);
        assert_eq!(config.chart.height, 260.0);
        assert_eq!(config.market.seed, Some(7));
        assert_eq!(config.market.refresh_amplitude, 0.8);
    }

    #[test]
    fn rejects_padding_wider_than_chart() {
        let err = DeskConfig::from_toml_str("[chart]\nwidth = 50.0\npad_x = 30.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_nan_padding() {
        let err = DeskConfig::from_toml_str("[chart]\npad_x = nan\npad_y = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = DeskConfig::from_toml_str("[chart]\npad_y = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_grid() {
        let err = DeskConfig::from_toml_str("[chart]\ngrid_divisions = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_negative_amplitude() {
        let err = DeskConfig::from_toml_str("[market]\nrefresh_amplitude = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_amplitude_beyond_percentage() {
        let err = DeskConfig::from_toml_str("[market]\nrefresh_amplitude = 1e308\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = DeskConfig::from_toml_str("[market]\nrefresh_amplitude = 100.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let config = DeskConfig::from_toml_str("[market]\nrefresh_amplitude = 100.0\n").unwrap();
        assert_eq!(config.market.refresh_amplitude, MAX_REFRESH_AMPLITUDE);
    }

    #[test]
    fn parse_errors_surface() {
        let err = DeskConfig::from_toml_str("not = [valid").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = DeskConfig::load_or_default(Path::new("/nonexistent/feis/config.toml")).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert!(DeskConfig::load(Path::new("/nonexistent/feis/config.toml")).is_err());
    }
}
