//! Calculator configuration
//!
//! Stores display preferences only. Operand text is never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GuiError, GuiResult};

/// Default window size (width, height) in logical pixels
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (520, 340);
/// Smallest window that still fits both rows of inputs
const MIN_WINDOW_SIZE: (u32, u32) = (420, 300);
/// Largest accepted window size
const MAX_WINDOW_SIZE: (u32, u32) = (1920, 1080);

/// Color scheme of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    #[default]
    Light,
    Dark,
}

impl AppTheme {
    /// Convert to iced Theme
    #[must_use]
    pub fn to_iced_theme(self) -> iced::Theme {
        match self {
            Self::Light => iced::Theme::Light,
            Self::Dark => iced::Theme::Dark,
        }
    }
}

/// Main calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Color scheme
    pub theme: AppTheme,
    /// Window size (width, height)
    pub window_size: (u32, u32),
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            theme: AppTheme::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            log_filter: "info".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("proportion").join("gui.toml"))
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> GuiResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GuiError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| GuiError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.clamp_window_size();
        Ok(config)
    }

    /// Load configuration for startup.
    ///
    /// An explicit `path` must exist. Without one, a missing default file is
    /// not an error. Any failure yields the defaults together with the error
    /// so the caller can report it once logging is up.
    pub fn load_startup(path: Option<&Path>) -> (Self, Option<GuiError>) {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) if path.is_file() => path,
                _ => return (Self::default(), None),
            },
        };

        match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Clamp the window size to a usable range
    pub fn clamp_window_size(&mut self) {
        let (w, h) = self.window_size;
        self.window_size = (
            w.clamp(MIN_WINDOW_SIZE.0, MAX_WINDOW_SIZE.0),
            h.clamp(MIN_WINDOW_SIZE.1, MAX_WINDOW_SIZE.1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.theme, AppTheme::Light);
        assert_eq!(config.window_size, (520, 340));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CalculatorConfig = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(config.theme, AppTheme::Dark);
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_clamp_window_size() {
        let mut config = CalculatorConfig {
            window_size: (10, 5000),
            ..Default::default()
        };
        config.clamp_window_size();
        assert_eq!(config.window_size, (420, 1080));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"\nwindow_size = [600, 400]\nlog_filter = \"debug\"").unwrap();

        let config = CalculatorConfig::load_from(file.path()).unwrap();
        assert_eq!(config.theme, AppTheme::Dark);
        assert_eq!(config.window_size, (600, 400));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"purple\"").unwrap();

        let err = CalculatorConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, GuiError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_startup_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let (config, err) = CalculatorConfig::load_startup(Some(&dir.path().join("nope.toml")));
        assert_eq!(config, CalculatorConfig::default());
        assert!(matches!(err, Some(GuiError::ConfigRead { .. })));
    }

    #[test]
    fn test_config_serialization() {
        let config = CalculatorConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
        let parsed: CalculatorConfig = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, parsed);
    }
}
