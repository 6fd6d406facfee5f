//! A comparator for single values where **every byte matters**.
//!
//! The `ExactComparator` applies no numeric normalization: `"2.0"` and `"2"` are different
//! answers. It is meant for counts, years and other scalars the reference prints in one
//! canonical way.

use crate::error::Mismatch;
use crate::utilities::preview::render;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Compares scalars by exact string equality.
#[derive(Debug, Clone, Copy)]
pub struct ExactComparator {
    pub preview_chars: usize,
}

impl Default for ExactComparator {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_PREVIEW_CHARS)
    }
}

impl ExactComparator {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Compares one actual value against the expected value.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the two strings are identical, otherwise [`Mismatch::Scalar`] quoting both.
    pub fn compare(&self, expected: &str, actual: &str) -> Result<(), Mismatch> {
        if expected == actual {
            return Ok(());
        }
        Err(Mismatch::Scalar {
            expected: render(expected, self.preview_chars),
            actual: render(actual, self.preview_chars),
        })
    }

    /// Compares a single-column result that must hold exactly one row.
    ///
    /// A result with zero or several rows is a [`Mismatch::Cardinality`] before the value
    /// itself is looked at.
    pub fn compare_single(&self, expected: &str, actual: &[String]) -> Result<(), Mismatch> {
        match actual {
            [only] => self.compare(expected, only),
            _ => Err(Mismatch::Cardinality {
                expected: 1,
                actual: actual.len(),
            }),
        }
    }
}
