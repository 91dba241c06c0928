//! Number parsing and formatting for calculator values.
//!
//! Values travel through the engine as decimal text. These helpers turn that
//! text into `f64`, suppress floating-point noise by rounding to a fixed
//! number of significant digits, and render results back to text using the
//! shortest representation that round-trips.

/// Canonical text for a not-a-number result.
pub const NAN_TEXT: &str = "NaN";
/// Canonical text for positive infinity.
pub const INFINITY_TEXT: &str = "Infinity";
/// Canonical text for negative infinity.
pub const NEG_INFINITY_TEXT: &str = "-Infinity";

/// Default number of significant digits kept after each computation.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 14;

/// Largest decimal exponent rendered without scientific notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent rendered without scientific notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parse calculator text into a number.
///
/// Accepts anything `f64::from_str` accepts (including `Infinity` and `NaN`).
/// Otherwise falls back to the longest numeric prefix, so partially edited
/// text such as `"1e"`, `"5."` or `"Infinity."` still has a value. Text
/// without any numeric prefix is NaN.
pub fn parse_value(text: &str) -> f64 {
    let trimmed = text.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        return value;
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if unsigned.starts_with(INFINITY_TEXT) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .unwrap_or(trimmed.len());

    (1..=end)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Round a value to `digits` significant decimal digits.
///
/// Exact halfway cases round away from zero, so `123456789012345` kept to
/// 14 digits is `123456789012350`. Non-finite values and zero pass through
/// unchanged.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let digits = digits.clamp(1, 17);
    if let Some(rounded) = round_tie_away(value, digits) {
        return rounded;
    }

    // `{:.Ne}` rounds ties to even; ties were handled above.
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Digits after the point needed to print any finite `f64` exactly.
const EXACT_PRECISION: usize = 767;

/// If `value` lies exactly halfway between two `digits`-digit decimals,
/// return the one farther from zero.
fn round_tie_away(value: f64, digits: usize) -> Option<f64> {
    let exact = format!("{:.*e}", EXACT_PRECISION, value.abs());
    let (mantissa, exponent) = exact.split_once('e')?;
    let all_digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let (kept, rest) = all_digits.split_at(digits);

    let mut rest = rest.chars();
    if rest.next() != Some('5') || !rest.all(|c| c == '0') {
        return None;
    }

    let kept: u64 = kept.parse().ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    let magnitude: f64 = format!("{}e{}", kept + 1, exponent - digits as i32 + 1)
        .parse()
        .ok()?;
    Some(magnitude.copysign(value))
}

/// Render a value as the shortest decimal text that round-trips.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent notation
/// (`1e+21`, `1.5e-7`). Negative zero renders as `"0"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY_TEXT
        } else {
            NEG_INFINITY_TEXT
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let body = layout_digits(&digits, exponent + 1);
    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Place the decimal point in `digits`, where `point` is the number of
/// digits that come before it.
fn layout_digits(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exponent = point - 1;
        let sign = if exponent >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    }
}

/// Round to `digits` significant digits, then render.
pub fn normalize(value: f64, digits: usize) -> String {
    format_number(round_significant(value, digits))
}
