//! Widget styling for the calculator window

use iced::widget::container;
use iced::{Border, Color, Theme};

/// Background of the "is to" chip between two operands
pub const CHIP_BACKGROUND: Color = Color::from_rgb(0.53, 0.53, 0.53);
/// Background behind the read-only result field
pub const RESULT_BACKGROUND: Color = Color::from_rgb(0.0, 1.0, 1.0);

/// Gray chip with white text
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CHIP_BACKGROUND.into()),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Cyan frame around the result field
pub fn result_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(RESULT_BACKGROUND.into()),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
