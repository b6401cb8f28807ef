//! Main calculator application
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │              Regra de 3               │
//! │                                       │
//! │     [ A ]  Está para  [ B ]           │
//! │              ASSIM COMO               │
//! │     [ C ]  Está para  [ X ]           │
//! └───────────────────────────────────────┘
//! ```

use iced::widget::{center, column, container, row, text, text_input};
use iced::{font, window, Center, Element, Font, Length, Subscription, Task, Theme};
use proportion_core::{Field, ProportionState};

use crate::config::{AppTheme, CalculatorConfig};
use crate::theme;

/// Heading above the inputs
pub const HEADING: &str = "Regra de 3";
/// Text of the chip between the two terms of a ratio
pub const RATIO_TEXT: &str = "Está para";
/// Text between the known and the unknown ratio
pub const PROPORTION_TEXT: &str = "ASSIM COMO";
/// Label of the result field
pub const RESULT_LABEL: &str = "X";

/// Placeholder hinting at numeric input
const INPUT_PLACEHOLDER: &str = "0";
/// Width of each text field
const FIELD_WIDTH: f32 = 110.0;

/// Messages for the calculator
#[derive(Debug, Clone)]
pub enum Message {
    /// An operand field was edited
    OperandChanged(Field, String),
    /// The user asked to close the window
    CloseRequested(window::Id),
}

/// Calculator application state
#[derive(Debug)]
pub struct Calculator {
    state: ProportionState,
    theme: AppTheme,
}

impl Calculator {
    /// Create a calculator with blank fields
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            state: ProportionState::new(),
            theme: config.theme,
        }
    }

    /// Current field contents
    pub fn state(&self) -> &ProportionState {
        &self.state
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OperandChanged(field, value) => {
                self.state.set(field, value);
                tracing::debug!(%field, result = self.state.result(), "operand changed");
                Task::none()
            }
            Message::CloseRequested(id) => {
                tracing::info!(?id, "close requested, exiting");
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = container(
            text(HEADING).size(32).font(Font {
                weight: font::Weight::Medium,
                ..Font::DEFAULT
            }),
        )
        .center_x(Length::Fill);

        let top_row = row![
            self.operand_input(Field::A),
            Self::ratio_chip(),
            self.operand_input(Field::B),
        ]
        .spacing(5)
        .align_y(Center);

        let proportion = text(PROPORTION_TEXT).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

        let bottom_row = row![
            self.operand_input(Field::C),
            Self::ratio_chip(),
            self.result_output(),
        ]
        .spacing(5)
        .align_y(Center);

        let content = column![heading, top_row, proportion, bottom_row]
            .spacing(25)
            .align_x(Center);

        center(content).padding(16).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.to_iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    fn operand_input(&self, field: Field) -> Element<'_, Message> {
        let input = text_input(INPUT_PLACEHOLDER, self.state.get(field))
            .on_input(move |value| Message::OperandChanged(field, value))
            .width(Length::Fixed(FIELD_WIDTH))
            .padding(8);

        column![text(field.label()).size(12), input]
            .spacing(4)
            .into()
    }

    /// Result field. Without `on_input` iced renders it disabled.
    fn result_output(&self) -> Element<'_, Message> {
        let output = text_input("", self.state.result())
            .width(Length::Fixed(FIELD_WIDTH))
            .padding(8);

        column![
            text(RESULT_LABEL).size(12),
            container(output).padding(2).style(theme::result_frame),
        ]
        .spacing(4)
        .align_x(Center)
        .into()
    }

    fn ratio_chip() -> Element<'static, Message> {
        container(text(RATIO_TEXT))
            .padding(5)
            .style(theme::chip)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(calculator: &mut Calculator, field: Field, text: &str) {
        let _ = calculator.update(Message::OperandChanged(field, text.to_string()));
    }

    #[test]
    fn test_calculator_creation() {
        let calculator = Calculator::new(&CalculatorConfig::default());
        assert_eq!(calculator.state(), &ProportionState::new());
        assert_eq!(calculator.theme(), Theme::Light);
    }

    #[test]
    fn test_dark_theme_from_config() {
        let config = CalculatorConfig {
            theme: AppTheme::Dark,
            ..Default::default()
        };
        assert_eq!(Calculator::new(&config).theme(), Theme::Dark);
    }

    #[test]
    fn test_typing_updates_result() {
        let mut calculator = Calculator::new(&CalculatorConfig::default());
        type_into(&mut calculator, Field::A, "2");
        type_into(&mut calculator, Field::B, "4");
        assert_eq!(calculator.state().result(), "");

        type_into(&mut calculator, Field::C, "1");
        assert_eq!(calculator.state().result(), "2.00");
        type_into(&mut calculator, Field::C, "10");
        assert_eq!(calculator.state().result(), "20.00");
    }

    #[test]
    fn test_typing_garbage_blanks_result() {
        let mut calculator = Calculator::new(&CalculatorConfig::default());
        type_into(&mut calculator, Field::A, "2");
        type_into(&mut calculator, Field::B, "4");
        type_into(&mut calculator, Field::C, "10");
        type_into(&mut calculator, Field::B, "4x");

        assert_eq!(calculator.state().b(), "4x");
        assert_eq!(calculator.state().result(), "");
    }

    #[test]
    fn test_view_builds_for_blank_and_solved_states() {
        let mut calculator = Calculator::new(&CalculatorConfig::default());
        {
            let _blank: Element<'_, Message> = calculator.view();
        }

        type_into(&mut calculator, Field::A, "2");
        type_into(&mut calculator, Field::B, "4");
        type_into(&mut calculator, Field::C, "10");
        {
            let _solved: Element<'_, Message> = calculator.view();
        }
        assert_eq!(calculator.state().result(), "20.00");
    }

    #[test]
    fn test_division_by_zero_shows_infinity() {
        let mut calculator = Calculator::new(&CalculatorConfig::default());
        type_into(&mut calculator, Field::A, "0");
        type_into(&mut calculator, Field::B, "5");
        type_into(&mut calculator, Field::C, "5");
        assert_eq!(calculator.state().result(), "Infinity");
    }
}
