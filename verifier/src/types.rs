//! # Types Module
//!
//! Core data structures shared by the comparators and the verification facade.

use crate::error::Mismatch;
use serde::Serialize;
use std::fmt;

/// One two-column result record, exactly as the driver read it.
pub type Row = [String; 2];

/// A result cell after numeric detection.
///
/// Produced once by [`normalize`](crate::utilities::normalization::normalize) and compared
/// by its canonical text, so `"7"`, `"7.0"` and `"+7.000"` are all the same value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A decimal number. `canonical` is the minimal integer form or fixed-point text.
    Numeric { number: f64, canonical: String },
    /// Anything that is not a plain decimal number, kept byte-for-byte.
    Opaque(String),
}

impl Value {
    /// The text this value compares by.
    pub fn canonical(&self) -> &str {
        match self {
            Value::Numeric { canonical, .. } => canonical,
            Value::Opaque(raw) => raw,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numeric { .. })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Numeric { canonical: a, .. }, Value::Numeric { canonical: b, .. }) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Outcome of one verification call.
///
/// On failure `message` points at the first defect found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub pass: bool,
    pub message: String,
}

impl Verdict {
    pub fn passed() -> Self {
        Self {
            pass: true,
            message: "result matches".to_string(),
        }
    }

    pub fn failed(reason: &Mismatch) -> Self {
        Self {
            pass: false,
            message: reason.to_string(),
        }
    }
}

impl From<Result<(), Mismatch>> for Verdict {
    fn from(result: Result<(), Mismatch>) -> Self {
        match result {
            Ok(()) => Verdict::passed(),
            Err(reason) => Verdict::failed(&reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_ok() {
        let verdict = Verdict::from(Ok(()));
        assert!(verdict.pass);
    }

    #[test]
    fn test_verdict_from_mismatch_carries_message() {
        let verdict = Verdict::from(Err(Mismatch::Cardinality {
            expected: 2,
            actual: 1,
        }));
        assert!(!verdict.pass);
        assert_eq!(verdict.message, "result mismatch: expected 2 rows, got 1 row");
    }

    #[test]
    fn test_value_canonical_and_display() {
        let numeric = Value::Numeric {
            number: 7.0,
            canonical: "7".into(),
        };
        let opaque = Value::Opaque("Iron Man".into());
        assert_eq!(numeric.canonical(), "7");
        assert!(numeric.is_numeric());
        assert_eq!(opaque.to_string(), "Iron Man");
        assert!(!opaque.is_numeric());
    }
}
