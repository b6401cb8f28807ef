//! Operand parsing and the proportion formula
//!
//! Operands are parsed with Rust's locale-independent `f64` grammar
//! (period decimal separator, optional sign and exponent). Leading and
//! trailing characters up to U+0020 (ASCII space and control characters)
//! are ignored; any other whitespace, such as a non-breaking space, makes
//! the operand unparseable. Literals that parse to a non-finite value
//! (`inf`, `NaN`, `1e400`) are rejected so that only the division itself
//! can produce an infinite result.

use crate::error::{ProportionError, ProportionResult};
use crate::state::Field;

/// Parse one operand.
///
/// # Examples
///
/// ```
/// use proportion_core::{parse_operand, Field};
///
/// assert_eq!(parse_operand(Field::A, " 2.5 "), Ok(2.5));
/// assert!(parse_operand(Field::B, "12abc").is_err());
/// ```
pub fn parse_operand(field: Field, input: &str) -> ProportionResult<f64> {
    let value: f64 = input
        .trim_matches(|c: char| c <= ' ')
        .parse()
        .map_err(|_| ProportionError::Unparseable {
            field,
            input: input.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ProportionError::NonFinite {
            field,
            input: input.to_string(),
        });
    }

    Ok(value)
}

/// Solve A:B = C:X for X.
///
/// Returns the first operand error in A, B, C order. A zero `a` is not an
/// error: the quotient follows IEEE-754 and may be infinite or NaN.
pub fn solve(a: &str, b: &str, c: &str) -> ProportionResult<f64> {
    let a = parse_operand(Field::A, a)?;
    let b = parse_operand(Field::B, b)?;
    let c = parse_operand(Field::C, c)?;
    Ok((b * c) / a)
}
