//! Error types for the proportion calculator

use thiserror::Error;

use crate::state::Field;

/// Operand errors.
///
/// [`ProportionState`](crate::ProportionState) never surfaces these; it
/// collapses every failure to a blank result. They exist for callers that
/// want to report which operand was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProportionError {
    /// Input is empty or is not a decimal number
    #[error("Field {field} is not a number: {input:?}")]
    Unparseable { field: Field, input: String },

    /// Input parsed but is infinite or NaN
    #[error("Field {field} is not a finite number: {input:?}")]
    NonFinite { field: Field, input: String },
}

impl ProportionError {
    /// The operand that failed to parse
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Unparseable { field, .. } | Self::NonFinite { field, .. } => *field,
        }
    }
}

/// Result type alias for operand parsing
pub type ProportionResult<T> = Result<T, ProportionError>;
