//! Window configuration for the calculator
//!
//! The calculator runs in a single fixed-size, centered window. Title and
//! resizability are constants; only the size comes from configuration.

use crate::config::{CalculatorConfig, DEFAULT_WINDOW_SIZE};

/// Title of the main window
pub const WINDOW_TITLE: &str = "Regra de Três";

/// Main window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Window title
    pub title: &'static str,
    /// Initial size (width, height) in logical pixels
    pub size: (u32, u32),
    /// Whether the window is resizable
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            size: DEFAULT_WINDOW_SIZE,
            resizable: false,
        }
    }
}

impl WindowSettings {
    /// Settings for the configured window size
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            size: config.window_size,
            ..Default::default()
        }
    }

    /// Convert to iced window settings.
    ///
    /// Close requests are delivered to the application instead of closing
    /// the window directly, so shutdown goes through `update`.
    #[must_use]
    pub fn to_iced(&self) -> iced::window::Settings {
        #[allow(clippy::cast_precision_loss)]
        let size = iced::Size::new(self.size.0 as f32, self.size.1 as f32);

        iced::window::Settings {
            size,
            position: iced::window::Position::Centered,
            resizable: self.resizable,
            exit_on_close_request: false,
            ..Default::default()
        }
    }
}
