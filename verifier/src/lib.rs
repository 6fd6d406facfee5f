//! # Verifier Library
//!
//! Result verification for automated grading. A driver runs a student's artifact (a SQL
//! query, a compiled program), collects the raw output as strings, and asks this crate
//! whether it matches the reference answer under a given equivalence mode.
//!
//! ## Key Concepts
//! - **Facade**: [`verify`] holds one function per equivalence mode, each returning a
//!   [`Verdict`](types::Verdict) with a diagnostic message.
//! - **Comparators**: the strategies behind the facade (ordered, unordered, table with
//!   column swap, numeric tolerance, multiple accepted answers).
//! - **Normalization**: numeric cells are canonicalized so `7`, `7.0` and `7.000000`
//!   compare equal where the mode allows it.
//! - **GradingRun**: verifies a batch of [`GradingCase`](case::GradingCase)s, one failure
//!   never stopping the others, and produces a [`SuiteReport`](report::SuiteReport).

pub mod case;
pub mod comparators;
pub mod error;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;
pub mod verify;

use crate::case::{ActualResult, GradingCase};
use crate::error::{Mismatch, VerifierError};
use crate::report::{CaseReport, SuiteReport};
use crate::types::Verdict;
use crate::verify::Verifier;

use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use util::config::AppConfig;

/// A batch of grading cases verified against one submission's results.
///
/// Cases are independent: each one gets its own verdict, and a missing or mismatching
/// result is recorded as a failure without affecting the rest. Settings are read from
/// [`AppConfig`] once, when the run is built; verification itself never consults it.
#[derive(Debug, Clone)]
pub struct GradingRun {
    cases: Vec<GradingCase>,
    default_tolerance: f64,
    verifier: Verifier,
}

fn check_default_tolerance(tolerance: f64) -> Result<f64, VerifierError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(VerifierError::InvalidDefaultTolerance(tolerance))
    }
}

impl GradingRun {
    /// Create a run over `cases` with the default tolerance and message preview limit
    /// taken from the global [`AppConfig`].
    ///
    /// # Errors
    /// [`VerifierError::InvalidDefaultTolerance`] if the configured tolerance is negative
    /// or not finite.
    pub fn new(cases: Vec<GradingCase>) -> Result<Self, VerifierError> {
        let config = AppConfig::global().clone();
        Self::with_config(cases, &config)
    }

    /// Create a run over `cases` using an explicit configuration snapshot.
    ///
    /// # Errors
    /// See [`GradingRun::new`].
    pub fn with_config(cases: Vec<GradingCase>, config: &AppConfig) -> Result<Self, VerifierError> {
        Ok(Self {
            cases,
            default_tolerance: check_default_tolerance(config.default_tolerance)?,
            verifier: Verifier::new(config.message_preview_chars),
        })
    }

    /// Load cases from a JSON case file.
    ///
    /// # Errors
    /// See [`case::load_cases`] and [`GradingRun::new`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VerifierError> {
        Self::new(case::load_cases(path)?)
    }

    /// Override the tolerance used by numeric cases that do not declare one.
    ///
    /// # Errors
    /// [`VerifierError::InvalidDefaultTolerance`] for a negative or non-finite tolerance,
    /// the same values a case's own tolerance is rejected for.
    pub fn with_default_tolerance(mut self, tolerance: f64) -> Result<Self, VerifierError> {
        self.default_tolerance = check_default_tolerance(tolerance)?;
        Ok(self)
    }

    /// Override how many characters of a value failure messages quote.
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.verifier = Verifier::new(preview_chars);
        self
    }

    pub fn cases(&self) -> &[GradingCase] {
        &self.cases
    }

    pub fn default_tolerance(&self) -> f64 {
        self.default_tolerance
    }

    /// Verify every case against the result the driver collected for it, keyed by case name.
    pub fn run(&self, results: &HashMap<String, ActualResult>) -> SuiteReport {
        let reports = self
            .cases
            .iter()
            .map(|case| {
                let verdict = match results.get(&case.name) {
                    Some(actual) => case.verify(actual, &self.verifier, self.default_tolerance),
                    None => Verdict::failed(&Mismatch::NoResult),
                };

                if verdict.pass {
                    info!(case = %case.name, mode = case.check.mode(), "case passed");
                } else {
                    warn!(case = %case.name, mode = case.check.mode(), "case failed: {}", verdict.message);
                }

                CaseReport::new(case.name.clone(), case.check.mode(), verdict)
            })
            .collect();

        SuiteReport::from_cases(reports)
    }
}
