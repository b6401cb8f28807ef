//! Proportion Core - state and arithmetic for the rule-of-three calculator
//!
//! Solves X in the proportion A:B = C:X, that is X = (B × C) / A.
//!
//! This crate provides:
//! - State: [`ProportionState`], the text fields and their derived result
//! - Parse: locale-independent operand parsing
//! - Format: fixed-point rendering of the result
//!
//! # Usage
//!
//! ```
//! use proportion_core::ProportionState;
//!
//! let mut state = ProportionState::new();
//! state.set_a("2");
//! state.set_b("4");
//! state.set_c("10");
//! assert_eq!(state.result(), "20.00");
//!
//! state.set_a("abc");
//! assert_eq!(state.result(), "");
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for operand parsing
pub mod error;

/// Fixed-point formatting of computed values
pub mod format;

/// Operand parsing and the proportion formula
pub mod parse;

/// The reactive state container
pub mod state;

pub use error::{ProportionError, ProportionResult};
pub use format::{format_fixed, RESULT_PLACES};
pub use parse::{parse_operand, solve};
pub use state::{Field, ProportionState};
