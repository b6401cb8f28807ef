//! Fixed-point formatting of computed values
//!
//! Rounding is half-up applied to the shortest decimal representation of
//! the value, not to its exact binary expansion. `1.005` is stored as
//! `1.00499999999999989...` but prints as `1.005`, so it renders `1.01`
//! here where `format!("{:.2}", 1.005)` would give `1.00`.

/// Fractional digits shown in the result field
pub const RESULT_PLACES: usize = 2;

/// Format `value` with exactly `places` fractional digits.
///
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN`. A value
/// that rounds to zero is printed without a sign.
///
/// # Examples
///
/// ```
/// use proportion_core::format_fixed;
///
/// assert_eq!(format_fixed(20.0, 2), "20.00");
/// assert_eq!(format_fixed(0.125, 2), "0.13");
/// assert_eq!(format_fixed(-0.001, 2), "0.00");
/// assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
/// ```
pub fn format_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-Infinity" } else { "Infinity" };
        return text.to_string();
    }

    let Some((mut digits, exponent)) = decimal_digits(value.abs()) else {
        return format!("{value:.places$}");
    };

    // Guarantee at least one digit left of the decimal point
    let mut int_len = exponent + 1;
    if int_len < 1 {
        let pad = usize::try_from(1 - int_len).unwrap_or_default();
        let mut padded = vec![0; pad];
        padded.append(&mut digits);
        digits = padded;
        int_len = 1;
    }
    let mut int_len = usize::try_from(int_len).unwrap_or(1);

    let keep = int_len + places;
    let round_up = digits.get(keep).is_some_and(|&d| d >= 5);
    digits.resize(keep, 0);
    if round_up && !increment(&mut digits) {
        digits.insert(0, 1);
        int_len += 1;
    }

    let negative = value.is_sign_negative() && digits.iter().any(|&d| d != 0);

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

/// Shortest round-trip digits of a non-negative finite value, with the
/// decimal exponent of the first digit.
fn decimal_digits(value: f64) -> Option<(Vec<u8>, i32)> {
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e')?;
    let exponent = exponent.parse().ok()?;
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    Some((digits, exponent))
}

/// Add one unit in the last place. Returns false on carry out of the
/// leading digit.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return true;
        }
    }
    false
}
