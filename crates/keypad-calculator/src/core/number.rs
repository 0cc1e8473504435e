//! Boundary between display text and numeric values
//!
//! The display holds text, the engine works on `f64`. Crossing from text to
//! number goes through [`parse_operand`], which fails loudly instead of
//! yielding NaN. Crossing back goes through [`format_number`] and
//! [`format_precision`], which lay digits out the way a browser prints a
//! JavaScript number.

use crate::core::{CalcError, CalcResult};

/// Largest decimal exponent still printed in plain notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent still printed in plain notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Digits after the point that make `{:e}` print any `f64` exactly
const EXACT_DIGITS: usize = 800;

/// Parses display text into an operand
///
/// Accepts an optional leading `-`, digits with at most one decimal point
/// and an optional `e`/`E` exponent, or `Infinity`. Anything else, including
/// a lone `.`, is [`CalcError::InvalidOperand`].
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidOperand(text.to_string());
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if body == "Infinity" {
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_numeric_literal(body) {
        return Err(invalid());
    }

    text.parse::<f64>().map_err(|_| invalid())
}

fn is_numeric_literal(body: &str) -> bool {
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body, None),
    };

    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();
    let points = mantissa.bytes().filter(|&b| b == b'.').count();
    let mantissa_ok = digits > 0 && points <= 1 && digits + points == mantissa.len();

    let exponent_ok = exponent.map_or(true, |exp| {
        let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !exp_digits.is_empty() && exp_digits.bytes().all(|b| b.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}

/// Formats a number with the shortest digits that round-trip
///
/// Plain notation is used while the decimal exponent stays within
/// `-7 < n <= 21`; outside that window the exponent form `1.5e-7` /
/// `1e+21` is used. Negative zero prints as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    let (digits, exponent) = split_scientific(&format!("{value:e}"));
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        exponential(&digits, exponent)
    }
}

/// Formats a number rounded to `precision` significant digits
///
/// Trailing zeros are kept and a tie rounds away from zero. Exponent
/// notation is used when the decimal exponent is below -6 or not smaller
/// than `precision`.
#[must_use]
pub fn format_precision(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let precision = precision.max(1);
    if value < 0.0 {
        return format!("-{}", format_precision(-value, precision));
    }

    let (digits, exponent) = if value == 0.0 {
        ("0".repeat(precision), 0)
    } else {
        round_half_up(value, precision)
    };
    let p = precision as i32;

    if exponent < MIN_PLAIN_EXPONENT || exponent >= p {
        exponential(&digits, exponent)
    } else if exponent == p - 1 {
        digits
    } else if exponent >= 0 {
        let (int, frac) = digits.split_at(exponent as usize + 1);
        format!("{int}.{frac}")
    } else {
        format!("0.{}{digits}", "0".repeat((-(exponent + 1)) as usize))
    }
}

/// Splits Rust's `{:e}` output into its significant digits and exponent
fn split_scientific(sci: &str) -> (String, i32) {
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci, "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Rounds a positive finite value to `precision` significant digits
///
/// Works on the exact decimal expansion, so `5` followed by zeros is a true
/// tie and rounds up. Rust's `{:.*e}` would round it to even.
fn round_half_up(value: f64, precision: usize) -> (String, i32) {
    let (mut digits, mut exponent) = split_scientific(&format!("{:.*e}", EXACT_DIGITS, value));
    if digits.len() < precision {
        digits.push_str(&"0".repeat(precision - digits.len()));
    }
    let rest = digits.split_off(precision);
    if rest.as_bytes().first().is_some_and(|&d| d >= b'5') && increment_digits(&mut digits) {
        exponent += 1;
    }
    (digits, exponent)
}

/// Adds one in the last place; returns true when the carry ran off the front
///
/// On overflow the digits become `1` followed by zeros, same length.
fn increment_digits(digits: &mut String) -> bool {
    let mut bytes = std::mem::take(digits).into_bytes();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes[0] = b'1';
    }
    *digits = bytes.into_iter().map(char::from).collect();
    carry
}

fn exponential(digits: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    let (head, tail) = digits.split_at(1);
    if tail.is_empty() {
        format!("{head}e{sign}{}", exponent.abs())
    } else {
        format!("{head}.{tail}e{sign}{}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- parse_operand ---

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_operand("42"), Ok(42.0));
    }

    #[test]
    fn test_parse_negative_decimal() {
        assert_eq!(parse_operand("-2.5"), Ok(-2.5));
    }

    #[test]
    fn test_parse_trailing_and_leading_point() {
        assert_eq!(parse_operand("5."), Ok(5.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(parse_operand("1.0000000e+16"), Ok(1e16));
        assert_eq!(parse_operand("3.3333333e-7"), Ok(3.3333333e-7));
        assert_eq!(parse_operand("1e21"), Ok(1e21));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_operand("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_rejects_lone_point() {
        assert_eq!(parse_operand("."), Err(CalcError::InvalidOperand(".".into())));
    }

    #[test]
    fn test_parse_rejects_multiple_points() {
        assert!(matches!(
            parse_operand("1.2.3"),
            Err(CalcError::InvalidOperand(text)) if text == "1.2.3"
        ));
    }

    #[test]
    fn test_parse_rejects_message_text() {
        assert!(parse_operand("Can't divide by zero").is_err());
    }

    #[test]
    fn test_parse_rejects_nan_and_empty() {
        assert!(parse_operand("NaN").is_err());
        assert!(parse_operand("").is_err());
        assert!(parse_operand("-").is_err());
    }

    #[test]
    fn test_parse_rejects_dangling_exponent() {
        assert!(parse_operand("1e").is_err());
        assert!(parse_operand("1e+").is_err());
        assert!(parse_operand("e5").is_err());
    }

    // --- format_number ---

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(123_456_789_000.0), "123456789000");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_large_switches_to_exponent_past_21_digits() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.23e22), "1.23e+22");
    }

    #[test]
    fn test_format_small_switches_to_exponent_below_micro() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // --- format_precision ---

    #[test]
    fn test_precision_keeps_trailing_zeros() {
        assert_eq!(format_precision(0.1 + 0.2, 8), "0.30000000");
        assert_eq!(format_precision(123.456, 8), "123.45600");
        assert_eq!(format_precision(0.0, 8), "0.0000000");
    }

    #[test]
    fn test_precision_rounds() {
        assert_eq!(format_precision(1.0 / 3.0, 8), "0.33333333");
        assert_eq!(format_precision(-2.0 / 3.0, 8), "-0.66666667");
    }

    #[test]
    fn test_precision_exact_width_is_plain() {
        assert_eq!(format_precision(12_345_678.0, 8), "12345678");
    }

    #[test]
    fn test_precision_large_uses_exponent() {
        assert_eq!(format_precision(1_234_567_890_000.0, 8), "1.2345679e+12");
        assert_eq!(format_precision(99_999_999.0 * 99_999_999.0, 8), "9.9999998e+15");
    }

    #[test]
    fn test_precision_small_uses_exponent() {
        assert_eq!(format_precision(1.0 / 3_000_000.0, 8), "3.3333333e-7");
    }

    #[test]
    fn test_precision_ties_round_up() {
        assert_eq!(format_precision(12_345_678_250_000.0, 8), "1.2345679e+13");
        assert_eq!(format_precision(0.000_244_140_625, 8), "0.00024414063");
        assert_eq!(format_precision(2.5, 1), "3");
        assert_eq!(format_precision(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_precision_below_tie_rounds_down() {
        // stored slightly below the written tie
        assert_eq!(format_precision(2.675, 3), "2.67");
        assert_eq!(format_precision(0.15, 1), "0.1");
        assert_eq!(format_precision(0.000_244_140_624, 8), "0.00024414062");
    }

    #[test]
    fn test_precision_carry_bumps_exponent() {
        assert_eq!(format_precision(99_999_999.5, 8), "1.0000000e+8");
        assert_eq!(format_precision(9.5, 1), "1e+1");
        assert_eq!(format_precision(0.999_999_995, 8), "1.0000000");
    }

    #[test]
    fn test_increment_digits() {
        let mut digits = String::from("1299");
        assert!(!increment_digits(&mut digits));
        assert_eq!(digits, "1300");
        let mut digits = String::from("999");
        assert!(increment_digits(&mut digits));
        assert_eq!(digits, "100");
    }

    #[test]
    fn test_precision_single_digit() {
        assert_eq!(format_precision(5.0, 1), "5");
        assert_eq!(format_precision(50.0, 1), "5e+1");
    }

    proptest! {
        #[test]
        fn prop_formatted_numbers_parse_back(x in proptest::num::f64::NORMAL) {
            let text = format_number(x);
            prop_assert_eq!(parse_operand(&text), Ok(x));
        }

        #[test]
        fn prop_formatted_integers_have_no_leading_zero(n in 1u32..1_000_000_000u32) {
            let text = format_number(f64::from(n));
            prop_assert!(!text.starts_with('0'));
            prop_assert_eq!(text, n.to_string());
        }
    }
}
