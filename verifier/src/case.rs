//! # Grading Cases
//!
//! A [`GradingCase`] pairs a name (usually the artifact it checks, e.g. `"5.sql"`) with a
//! [`Check`]: the expected result tagged with the equivalence mode to apply. Cases are
//! plain data; they are built by the caller or read from a JSON file with [`load_cases`],
//! and are passed explicitly to the engine rather than kept in global tables.
//!
//! ## JSON shape
//!
//! ```json
//! [
//!   { "name": "1.sql", "mode": "unordered", "expected": ["Iron Man", "Kung Fu Panda"] },
//!   { "name": "2.sql", "mode": "single_value", "expected": "1988" },
//!   { "name": "6.sql", "mode": "numeric", "expected": 7.74, "tolerance": 0.01 },
//!   { "name": "7.sql", "mode": "table", "expected": [["Inception", "8.8"]] },
//!   { "name": "12.sql", "mode": "any_of", "alternatives": [["A", "B"], ["C", "D"]] }
//! ]
//! ```

use crate::error::{Mismatch, VerifierError};
use crate::types::{Row, Verdict};
use crate::verify::Verifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::error;

/// The expected result of a case and how to compare against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Check {
    /// One value, exact string equality.
    Scalar { expected: String },
    /// A single-column result of exactly one row, exact string equality.
    SingleValue { expected: String },
    /// One real value within `tolerance` (the configured default when absent).
    Numeric {
        expected: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },
    /// A single-column result in exactly this order.
    Ordered { expected: Vec<String> },
    /// A single-column result in any order.
    Unordered { expected: Vec<String> },
    /// A two-column result, rows in order, columns in either order.
    Table { expected: Vec<Row> },
    /// A single-column result matching any one of several accepted answers.
    AnyOf { alternatives: Vec<Vec<String>> },
}

impl Check {
    /// Serialized name of the equivalence mode.
    pub fn mode(&self) -> &'static str {
        match self {
            Check::Scalar { .. } => "scalar",
            Check::SingleValue { .. } => "single_value",
            Check::Numeric { .. } => "numeric",
            Check::Ordered { .. } => "ordered",
            Check::Unordered { .. } => "unordered",
            Check::Table { .. } => "table",
            Check::AnyOf { .. } => "any_of",
        }
    }

    /// Keys a case file may set for this mode, besides `name` and `mode`.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Check::Numeric { .. } => &["expected", "tolerance"],
            Check::AnyOf { .. } => &["alternatives"],
            _ => &["expected"],
        }
    }
}

/// A named check, as listed in a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingCase {
    pub name: String,
    #[serde(flatten)]
    pub check: Check,
}

/// What the driver collected by running the student's artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum ActualResult {
    /// One value read directly (e.g. a float column scanned from the first row).
    Scalar(String),
    /// A single-column result set.
    Column(Vec<String>),
    /// A two-column result set.
    Pairs(Vec<Row>),
}

impl ActualResult {
    pub fn shape(&self) -> &'static str {
        match self {
            ActualResult::Scalar(_) => "scalar",
            ActualResult::Column(_) => "single-column",
            ActualResult::Pairs(_) => "two-column",
        }
    }
}

fn shape_mismatch(expected: &'static str, actual: &ActualResult) -> Verdict {
    Verdict::failed(&Mismatch::Shape {
        expected,
        actual: actual.shape(),
    })
}

impl GradingCase {
    pub fn new(name: impl Into<String>, check: Check) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }

    /// Rejects checks that can never be evaluated meaningfully.
    ///
    /// # Errors
    ///
    /// - [`VerifierError::InvalidTolerance`] for a negative or non-finite tolerance.
    /// - [`VerifierError::NoAlternatives`] for an `any_of` check with no answers.
    pub fn validate(&self) -> Result<(), VerifierError> {
        match &self.check {
            Check::Numeric {
                tolerance: Some(tolerance),
                ..
            } if !tolerance.is_finite() || *tolerance < 0.0 => {
                Err(VerifierError::InvalidTolerance {
                    name: self.name.clone(),
                    tolerance: *tolerance,
                })
            }
            Check::AnyOf { alternatives } if alternatives.is_empty() => {
                Err(VerifierError::NoAlternatives(self.name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Verifies `actual` against this case.
    ///
    /// `default_tolerance` applies to numeric checks without their own tolerance. A result
    /// of the wrong shape fails with [`Mismatch::Shape`] instead of being coerced.
    pub fn verify(
        &self,
        actual: &ActualResult,
        verifier: &Verifier,
        default_tolerance: f64,
    ) -> Verdict {
        match (&self.check, actual) {
            (Check::Scalar { expected }, ActualResult::Scalar(value)) => {
                verifier.scalar(value, expected)
            }
            (Check::SingleValue { expected }, ActualResult::Column(values)) => {
                verifier.single_value(values, expected)
            }
            (Check::Numeric { expected, tolerance }, ActualResult::Scalar(value)) => {
                verifier.scalar_numeric(value, *expected, tolerance.unwrap_or(default_tolerance))
            }
            (Check::Numeric { expected, tolerance }, ActualResult::Column(values)) => {
                match values.as_slice() {
                    [value] => verifier.scalar_numeric(
                        value,
                        *expected,
                        tolerance.unwrap_or(default_tolerance),
                    ),
                    _ => Verdict::failed(&Mismatch::Cardinality {
                        expected: 1,
                        actual: values.len(),
                    }),
                }
            }
            (Check::Ordered { expected }, ActualResult::Column(values)) => {
                verifier.sequence_ordered(values, expected)
            }
            (Check::Unordered { expected }, ActualResult::Column(values)) => {
                verifier.sequence_unordered(values, expected)
            }
            (Check::Table { expected }, ActualResult::Pairs(rows)) => {
                verifier.table_ordered(rows, expected)
            }
            (Check::AnyOf { alternatives }, ActualResult::Column(values)) => {
                verifier.any_of(values, alternatives)
            }
            (Check::Scalar { .. }, other) => shape_mismatch("scalar", other),
            (Check::Numeric { .. }, other) => shape_mismatch("scalar", other),
            (Check::Table { .. }, other) => shape_mismatch("two-column", other),
            (
                Check::SingleValue { .. }
                | Check::Ordered { .. }
                | Check::Unordered { .. }
                | Check::AnyOf { .. },
                other,
            ) => shape_mismatch("single-column", other),
        }
    }
}

/// Parses and validates a JSON array of cases.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, a case sets a key its mode does not know,
/// a case fails [`GradingCase::validate`], or two cases share a name.
pub fn parse_cases(json: &str) -> Result<Vec<GradingCase>, VerifierError> {
    let entries: Vec<Map<String, JsonValue>> = serde_json::from_str(json)?;

    let mut cases = Vec::with_capacity(entries.len());
    for entry in entries {
        let keys: Vec<String> = entry.keys().cloned().collect();
        let case: GradingCase = serde_json::from_value(JsonValue::Object(entry))?;

        // Serde ignores keys it does not know, so a misspelt "tolerence" is caught here.
        if let Some(field) = keys
            .into_iter()
            .find(|k| k != "name" && k != "mode" && !case.check.fields().contains(&k.as_str()))
        {
            return Err(VerifierError::UnknownField {
                name: case.name,
                field,
            });
        }

        case.validate()?;
        cases.push(case);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for case in &cases {
        if !seen.insert(case.name.as_str()) {
            return Err(VerifierError::DuplicateCase(case.name.clone()));
        }
    }

    Ok(cases)
}

/// Reads and validates a case file.
///
/// # Errors
///
/// Returns [`VerifierError::Io`] if the file cannot be read, otherwise see [`parse_cases`].
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<GradingCase>, VerifierError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read case file {}: {e}", path.display());
        VerifierError::Io(e)
    })?;
    parse_cases(&content).inspect_err(|e| {
        error!("Rejected case file {}: {e}", path.display());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn to_string_vec(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    const CASES: &str = r#"
[
  { "name": "1.sql", "mode": "unordered", "expected": ["Iron Man", "Kung Fu Panda"] },
  { "name": "2.sql", "mode": "single_value", "expected": "1988" },
  { "name": "3.sql", "mode": "ordered", "expected": ["Black Panther", "Roma"] },
  { "name": "4.sql", "mode": "scalar", "expected": "2" },
  { "name": "6.sql", "mode": "numeric", "expected": 7.74, "tolerance": 0.01 },
  { "name": "6b.sql", "mode": "numeric", "expected": 7.74 },
  { "name": "7.sql", "mode": "table", "expected": [["Inception", "8.8"]] },
  { "name": "12.sql", "mode": "any_of", "alternatives": [["A", "B"], ["C", "D"]] }
]
"#;

    #[test]
    fn test_parse_all_modes() -> Result<(), Box<dyn std::error::Error>> {
        let cases = parse_cases(CASES)?;
        assert_eq!(cases.len(), 8);
        assert_eq!(
            cases[0],
            GradingCase::new(
                "1.sql",
                Check::Unordered {
                    expected: to_string_vec(&["Iron Man", "Kung Fu Panda"])
                }
            )
        );
        assert_eq!(
            cases[5].check,
            Check::Numeric {
                expected: 7.74,
                tolerance: None
            }
        );
        let modes: Vec<&str> = cases.iter().map(|c| c.check.mode()).collect();
        assert_eq!(
            modes,
            vec![
                "unordered",
                "single_value",
                "ordered",
                "scalar",
                "numeric",
                "numeric",
                "table",
                "any_of"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = r#"[
            { "name": "1.sql", "mode": "scalar", "expected": "1" },
            { "name": "1.sql", "mode": "scalar", "expected": "2" }
        ]"#;
        let err = parse_cases(json).unwrap_err();
        assert!(matches!(err, VerifierError::DuplicateCase(ref name) if name == "1.sql"));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let json = r#"[{ "name": "6.sql", "mode": "numeric", "expected": 1.0, "tolerance": -0.1 }]"#;
        assert!(matches!(
            parse_cases(json),
            Err(VerifierError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn test_empty_alternatives_rejected() {
        let json = r#"[{ "name": "12.sql", "mode": "any_of", "alternatives": [] }]"#;
        assert!(matches!(
            parse_cases(json),
            Err(VerifierError::NoAlternatives(_))
        ));
    }

    #[test]
    fn test_misspelt_field_rejected() {
        let json = r#"[{ "name": "6.sql", "mode": "numeric", "expected": 7.74, "tolerence": 0.5 }]"#;
        match parse_cases(json) {
            Err(VerifierError::UnknownField { name, field }) => {
                assert_eq!(name, "6.sql");
                assert_eq!(field, "tolerence");
            }
            other => panic!("expected an unknown field error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_of_another_mode_rejected() {
        let json = r#"[{ "name": "4.sql", "mode": "scalar", "expected": "2", "tolerance": 0.1 }]"#;
        assert!(matches!(
            parse_cases(json),
            Err(VerifierError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_verify_uses_verifier_limit() {
        let case = GradingCase::new(
            "4.sql",
            Check::Scalar {
                expected: "Harry Potter".into(),
            },
        );
        let actual = ActualResult::Scalar("Hermione Granger".into());
        let verdict = case.verify(&actual, &Verifier::new(4), 0.01);
        assert_eq!(verdict.message, "expected \"Harr\"..., got \"Herm\"...");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let json = r#"[{ "name": "x", "mode": "fuzzy", "expected": "1" }]"#;
        assert!(matches!(parse_cases(json), Err(VerifierError::Json(_))));
    }

    #[test]
    fn test_load_cases_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cases.json");
        fs::write(&path, CASES)?;
        let cases = load_cases(&path)?;
        assert_eq!(cases.len(), 8);
        Ok(())
    }

    #[test]
    fn test_load_cases_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let err = load_cases(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, VerifierError::Io(_)));
        Ok(())
    }

    #[test]
    fn test_verify_dispatches_by_mode() {
        let case = GradingCase::new(
            "7.sql",
            Check::Table {
                expected: vec![["Inception".to_string(), "8.8".to_string()]],
            },
        );
        let actual = ActualResult::Pairs(vec![["8.80".to_string(), "Inception".to_string()]]);
        assert!(case.verify(&actual, &Verifier::default(), 0.01).pass);
    }

    #[test]
    fn test_verify_wrong_shape() {
        let case = GradingCase::new(
            "7.sql",
            Check::Table {
                expected: vec![["Inception".to_string(), "8.8".to_string()]],
            },
        );
        let verdict = case.verify(
            &ActualResult::Column(to_string_vec(&["Inception"])),
            &Verifier::default(),
            0.01,
        );
        assert!(!verdict.pass);
        assert_eq!(
            verdict.message,
            "expected a two-column result, got a single-column result"
        );
    }

    #[test]
    fn test_numeric_uses_default_tolerance() {
        let case = GradingCase::new(
            "6.sql",
            Check::Numeric {
                expected: 7.74,
                tolerance: None,
            },
        );
        let actual = ActualResult::Scalar("7.79".into());
        assert!(!case.verify(&actual, &Verifier::default(), 0.01).pass);
        assert!(case.verify(&actual, &Verifier::default(), 0.1).pass);
    }

    #[test]
    fn test_numeric_accepts_single_row_column() {
        let case = GradingCase::new(
            "6.sql",
            Check::Numeric {
                expected: 7.74,
                tolerance: Some(0.01),
            },
        );
        assert!(case.verify(
            &ActualResult::Column(to_string_vec(&["7.744"])),
            &Verifier::default(),
            0.0,
        ).pass);
        assert!(!case.verify(&ActualResult::Column(vec![]), &Verifier::default(), 0.0).pass);
    }
}
