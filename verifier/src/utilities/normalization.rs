//! Numeric-aware canonicalization of result cells.
//!
//! Databases and student programs print the same number in many ways (`7`, `7.0`,
//! `7.000000`, `+7`). Cells that are plain decimal numbers are reduced to one canonical
//! spelling; everything else is left exactly as it was.

use crate::types::Value;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, then digits with an optional fraction. The whole cell must match.
static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("decimal pattern is valid")
});

/// Significant digits kept for values with a fractional part.
const SIGNIFICANT_DIGITS: i32 = 10;
/// Upper bound on decimal places, reached only by very small magnitudes.
const MAX_DECIMALS: i32 = 20;
/// Integral values below this magnitude print through `i64`.
const I64_SAFE: f64 = 9.0e18;

/// Parses `raw` as a plain decimal number.
///
/// No whitespace, exponents, `inf`/`NaN`, or digit separators: `"1,000"` is not a number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    if !DECIMAL.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Canonical text of a finite number: minimal integer form when integral, otherwise
/// fixed-point with ten significant digits and no trailing zeros.
pub fn canonical_number(number: f64) -> String {
    if number.fract() == 0.0 {
        if number == 0.0 {
            return "0".to_string();
        }
        if number.abs() < I64_SAFE {
            return (number as i64).to_string();
        }
        return format!("{number:.0}");
    }

    let magnitude = number.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).clamp(1, MAX_DECIMALS) as usize;
    let fixed = format!("{number:.decimals$}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Classifies a raw cell, computing its canonical text once.
pub fn normalize(raw: &str) -> Value {
    match parse_decimal(raw) {
        Some(number) => Value::Numeric {
            number,
            canonical: canonical_number(number),
        },
        None => Value::Opaque(raw.to_string()),
    }
}

/// Canonical comparison text for a raw cell.
pub fn canonicalize(raw: &str) -> String {
    match normalize(raw) {
        Value::Numeric { canonical, .. } => canonical,
        Value::Opaque(raw) => raw,
    }
}
