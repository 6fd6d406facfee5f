//! Verifier Error Types
//!
//! Two families live here:
//!
//! - [`Mismatch`]: why a result failed verification. These are expected outcomes of
//!   grading, not faults; every comparator returns `Result<(), Mismatch>` and the facade
//!   turns them into a [`Verdict`](crate::types::Verdict).
//! - [`VerifierError`]: operational failures while preparing a run (reading or
//!   validating grading cases).
//!
//! # Example
//!
//! ```rust
//! use verifier::error::Mismatch;
//!
//! let err = Mismatch::Cardinality { expected: 4, actual: 3 };
//! assert_eq!(err.to_string(), "result mismatch: expected 4 rows, got 3 rows");
//!
//! let err = Mismatch::Cardinality { expected: 1, actual: 0 };
//! assert_eq!(err.to_string(), "result mismatch: expected 1 row, got 0 rows");
//! ```

use thiserror::Error;

/// Why an actual result did not match its expectation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Mismatch {
    /// A value that must be numeric could not be parsed.
    #[error("expected a numeric value, got {value}")]
    Format { value: String },

    /// Collections differ in length.
    #[error("result mismatch: expected {}, got {}", rows(.expected), rows(.actual))]
    Cardinality { expected: usize, actual: usize },

    /// A single value differs.
    #[error("expected {expected}, got {actual}")]
    Scalar { expected: String, actual: String },

    /// Same length, but the item at `row` (1-based) differs.
    #[error("row {row} mismatch: expected {expected}, got {actual}")]
    Content {
        row: usize,
        expected: String,
        actual: String,
    },

    /// Same items, different order, in a check where order matters.
    #[error("result contains the expected rows in the wrong order: row {row} expected {expected}, got {actual}")]
    Order {
        row: usize,
        expected: String,
        actual: String,
    },

    /// Same length, but at least one expected item has no counterpart.
    #[error("result mismatch: expected {}, got {}; {} is missing", rows(.count), rows(.count), .missing)]
    Missing { count: usize, missing: String },

    /// A numeric value fell outside the allowed tolerance.
    #[error("result mismatch: expected {expected:.5} (±{tolerance}), got {actual:.5}")]
    Tolerance {
        expected: f64,
        tolerance: f64,
        actual: f64,
    },

    /// None of the accepted answers matched.
    #[error("result does not match any accepted answer")]
    NoAlternativeMatched,

    /// The actual result has the wrong shape for the check (e.g. pairs for a column check).
    #[error("expected a {expected} result, got a {actual} result")]
    Shape {
        expected: &'static str,
        actual: &'static str,
    },

    /// The driver supplied no result for a case.
    #[error("no result supplied")]
    NoResult,
}

fn rows(n: &usize) -> String {
    if *n == 1 {
        "1 row".to_string()
    } else {
        format!("{n} rows")
    }
}

/// Failures while loading or validating grading cases.
#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid case JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate case name '{0}'")]
    DuplicateCase(String),
    #[error("case '{name}' has an invalid tolerance {tolerance}")]
    InvalidTolerance { name: String, tolerance: f64 },
    #[error("case '{0}' declares no accepted answers")]
    NoAlternatives(String),
    #[error("case '{name}' has unknown field '{field}'")]
    UnknownField { name: String, field: String },
    #[error("invalid default tolerance {0}")]
    InvalidDefaultTolerance(f64),
}
