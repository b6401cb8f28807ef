//! The reactive state container
//!
//! [`ProportionState`] holds the raw text of the three operands and the
//! derived result. Every mutator recomputes the result before returning, so
//! readers always observe a result consistent with the current operands.

use std::fmt;

use serde::Serialize;

use crate::format::{format_fixed, RESULT_PLACES};
use crate::parse::solve;

/// One of the three user-editable operands of A:B = C:X
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First term of the known ratio
    A,
    /// Second term of the known ratio
    B,
    /// First term of the unknown ratio
    C,
}

impl Field {
    /// All operands in input order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Look up a field by its label, ignoring case
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text state of the calculator.
///
/// The result is private and has no setter. It is rewritten by every call
/// to [`set`](Self::set) and the per-field setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProportionState {
    a: String,
    b: String,
    c: String,
    result: String,
}

impl ProportionState {
    /// Create an empty state. All fields, including the result, are blank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from three operands and compute the result once
    #[must_use]
    pub fn with_inputs(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>) -> Self {
        let mut state = Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            result: String::new(),
        };
        state.recompute();
        state
    }

    /// Replace operand A and recompute
    pub fn set_a(&mut self, text: impl Into<String>) {
        self.set(Field::A, text);
    }

    /// Replace operand B and recompute
    pub fn set_b(&mut self, text: impl Into<String>) {
        self.set(Field::B, text);
    }

    /// Replace operand C and recompute
    pub fn set_c(&mut self, text: impl Into<String>) {
        self.set(Field::C, text);
    }

    /// Replace the given operand with `text`, without validation, and
    /// recompute the result
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::A => &mut self.a,
            Field::B => &mut self.b,
            Field::C => &mut self.c,
        };
        *slot = text.into();
        self.recompute();
    }

    /// Reset every operand to blank
    pub fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
        self.c.clear();
        self.recompute();
    }

    /// Current text of the given operand
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::A => &self.a,
            Field::B => &self.b,
            Field::C => &self.c,
        }
    }

    /// Current text of operand A
    #[must_use]
    pub fn a(&self) -> &str {
        &self.a
    }

    /// Current text of operand B
    #[must_use]
    pub fn b(&self) -> &str {
        &self.b
    }

    /// Current text of operand C
    #[must_use]
    pub fn c(&self) -> &str {
        &self.c
    }

    /// Derived result, blank when any operand is not a number
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    fn recompute(&mut self) {
        self.result = match solve(&self.a, &self.b, &self.c) {
            Ok(value) => format_fixed(value, RESULT_PLACES),
            Err(err) => {
                tracing::trace!(%err, "operand rejected, result blanked");
                String::new()
            }
        };
        tracing::trace!(
            a = %self.a,
            b = %self.b,
            c = %self.c,
            result = %self.result,
            "recomputed proportion"
        );
    }
}
