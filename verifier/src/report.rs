//! # Verification Report Module
//!
//! Serializable summaries of a grading run, for the driver to print, store, or send on.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "generated_at": "2025-01-01T00:00:00Z",
//!   "passed": 1,
//!   "failed": 1,
//!   "pass_rate": 50,
//!   "cases": [
//!     { "name": "1.sql", "mode": "unordered", "pass": true, "message": "result matches" },
//!     { "name": "3.sql", "mode": "ordered", "pass": false, "message": "row 1 mismatch: ..." }
//!   ]
//! }
//! ```

use crate::scorer::compute_pass_rate;
use crate::types::Verdict;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one grading case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub mode: String,
    pub pass: bool,
    pub message: String,
}

impl CaseReport {
    pub fn new(name: impl Into<String>, mode: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            mode: mode.into(),
            pass: verdict.pass,
            message: verdict.message,
        }
    }
}

/// Outcome of a whole grading run, in case order.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub generated_at: DateTime<Utc>,
    pub passed: usize,
    pub failed: usize,
    /// Percentage of passing cases (0-100).
    pub pass_rate: u32,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn from_cases(cases: Vec<CaseReport>) -> Self {
        let passed = cases.iter().filter(|c| c.pass).count();
        Self {
            generated_at: Utc::now(),
            passed,
            failed: cases.len() - passed,
            pass_rate: compute_pass_rate(&cases),
            cases,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// The first failing case, which is what a stop-at-first-error driver reports.
    pub fn first_failure(&self) -> Option<&CaseReport> {
        self.cases.iter().find(|c| !c.pass)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Mismatch;
    use serde_json::Value;

    fn sample() -> SuiteReport {
        SuiteReport::from_cases(vec![
            CaseReport::new("1.sql", "unordered", Verdict::passed()),
            CaseReport::new(
                "3.sql",
                "ordered",
                Verdict::failed(&Mismatch::Cardinality {
                    expected: 11,
                    actual: 10,
                }),
            ),
        ])
    }

    #[test]
    fn test_counts_and_rate() {
        let report = sample();
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.pass_rate, 50);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_first_failure() {
        let report = sample();
        let failure = report.first_failure().map(|c| c.name.as_str());
        assert_eq!(failure, Some("3.sql"));
    }

    #[test]
    fn test_serialization() -> Result<(), Box<dyn std::error::Error>> {
        let report = sample();
        let value: Value = serde_json::from_str(&report.to_json_pretty()?)?;
        assert_eq!(value["passed"], 1);
        assert_eq!(value["pass_rate"], 50);
        assert_eq!(value["cases"][0]["name"], "1.sql");
        assert_eq!(value["cases"][1]["mode"], "ordered");
        assert_eq!(
            value["cases"][1]["message"],
            "result mismatch: expected 11 rows, got 10 rows"
        );
        assert!(value["generated_at"].is_string());
        Ok(())
    }

    #[test]
    fn test_empty_report() {
        let report = SuiteReport::from_cases(vec![]);
        assert!(report.all_passed());
        assert_eq!(report.pass_rate, 0);
        assert!(report.first_failure().is_none());
    }
}
