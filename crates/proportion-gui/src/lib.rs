//! Proportion GUI - desktop window for the rule-of-three calculator
//!
//! Built on iced's Elm-inspired architecture:
//! - **State**: a [`ProportionState`](proportion_core::ProportionState) owned by [`Calculator`]
//! - **Message**: one per keystroke in an operand field
//! - **Update**: writes the field, which recomputes the result
//! - **View**: two rows of fields, the second ending in the read-only result
//!
//! # Usage
//!
//! ```no_run
//! use proportion_gui::{launch, CalculatorConfig};
//!
//! launch(CalculatorConfig::default()).unwrap();
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod theme;
pub mod window;

pub use app::{Calculator, Message};
pub use config::{AppTheme, CalculatorConfig};
pub use error::{GuiError, GuiResult};
pub use window::{WindowSettings, WINDOW_TITLE};

use iced::Task;

/// Open the calculator window and run until it is closed
pub fn launch(config: CalculatorConfig) -> GuiResult<()> {
    let settings = WindowSettings::from_config(&config);
    tracing::info!(size = ?settings.size, theme = ?config.theme, "opening calculator window");

    iced::application(
        move || (Calculator::new(&config), Task::none()),
        Calculator::update,
        Calculator::view,
    )
    .title(settings.title)
    .theme(Calculator::theme)
    .subscription(Calculator::subscription)
    .window(settings.to_iced())
    .run()
    .map_err(|e| GuiError::Iced(e.to_string()))
}
