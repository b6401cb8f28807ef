//! Error types for the calculator window

use std::path::PathBuf;

use thiserror::Error;

/// GUI-related errors
#[derive(Debug, Error)]
pub enum GuiError {
    /// Config file exists but could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`CalculatorConfig`](crate::CalculatorConfig)
    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Iced backend error
    #[error("Iced error: {0}")]
    Iced(String),
}

/// Result type alias for GUI operations
pub type GuiResult<T> = Result<T, GuiError>;
