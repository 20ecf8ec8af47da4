//! Fixed-point values with exactly one fractional digit, kept as tenths.

use crate::error::ParseError;

/// Parse `-?[0-9]+\.[0-9]` into tenths (`-5.5` → `-55`).
///
/// # Errors
///
/// Returns [`ParseError::InvalidValue`] for anything outside the grammar,
/// including values that do not fit in `i64` tenths.
#[inline]
pub fn parse_tenths(bytes: &[u8]) -> Result<i64, ParseError> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
        None => return Err(ParseError::InvalidValue),
    };

    // Shortest legal body is "d.d".
    let [int_part @ .., b'.', frac] = digits else {
        return Err(ParseError::InvalidValue);
    };
    if int_part.is_empty() || !frac.is_ascii_digit() {
        return Err(ParseError::InvalidValue);
    }

    // Magnitude is unsigned so that `i64::MIN` is reachable.
    let mut magnitude: u64 = 0;
    for &b in int_part.iter().chain(std::iter::once(frac)) {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidValue);
        }
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or(ParseError::InvalidValue)?;
    }

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or(ParseError::InvalidValue)
}

/// Write tenths back out as a decimal with one fractional digit.
///
/// Zero is never signed, so `-0.0` does not occur.
pub fn format_tenths(tenths: i64) -> String {
    let magnitude = tenths.unsigned_abs();
    let sign = if tenths < 0 { "-" } else { "" };
    format!("{sign}{}.{}", magnitude / 10, magnitude % 10)
}

/// Convert tenths to the nearest `f64`, for serialized output only.
#[allow(clippy::cast_precision_loss)]
pub fn tenths_to_f64(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}
