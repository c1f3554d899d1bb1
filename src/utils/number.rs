//! Number parsing and formatting with JavaScript semantics
//!
//! Attribute values coming from the editor are strings like `"24px"` or
//! `"1.5"`. The host treats them the way `parseFloat` does, so we follow the
//! same rules: leading whitespace is skipped and the longest numeric prefix
//! wins.

use once_cell::sync::Lazy;
use regex::Regex;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[+-]?(?:Infinity",
        r"|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?",
        r"|\.[0-9]+(?:[eE][+-]?[0-9]+)?)"
    ))
    .expect("float prefix pattern is valid")
});

/// Magnitudes outside `[1e-6, 1e21)` print in exponent form.
const MIN_FIXED: f64 = 1e-6;
const MAX_FIXED: f64 = 1e21;

/// Parse the numeric prefix of `text`, like JavaScript `parseFloat`.
///
/// Returns `None` where `parseFloat` would return `NaN`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let matched = FLOAT_PREFIX.find(trimmed)?.as_str();

    match matched.trim_start_matches(['+', '-']) {
        "Infinity" => Some(if matched.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }),
        _ => matched.parse::<f64>().ok(),
    }
}

/// `parseFloat(text) || fallback`: zero and `NaN` both take the fallback.
pub fn parse_float_or(text: Option<&str>, fallback: f64) -> f64 {
    match text.and_then(parse_float_prefix) {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => fallback,
    }
}

/// Format a number the way JavaScript stringifies it for attribute values.
///
/// Integral values drop the fractional part (`4`, not `4.0`), negative
/// zero prints as `0`, and very large or small magnitudes use an explicitly
/// signed exponent (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if !(MIN_FIXED..MAX_FIXED).contains(&magnitude) {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    format!("{}", value)
}
