//! # Verification Facade
//!
//! The entry points a grading driver calls once it has run a student's artifact and
//! collected the raw output. Every function takes the actual result first, the reference
//! second, and returns a [`Verdict`]; none of them panic, block, or touch shared state, so
//! they can be called from any number of threads at once.
//!
//! | Function | Equivalence |
//! |---|---|
//! | [`verify_scalar`] | exact string equality |
//! | [`verify_single_value`] | exactly one row, then exact string equality |
//! | [`verify_scalar_numeric`] | real value within a tolerance |
//! | [`verify_sequence_ordered`] | byte-exact, position by position |
//! | [`verify_sequence_unordered`] | byte-exact multiset equality |
//! | [`verify_table_ordered`] | row order significant, column order and number format not |
//! | [`verify_any_of`] | unordered match against any accepted answer |
//!
//! The free functions quote at most [`DEFAULT_MESSAGE_PREVIEW_CHARS`] characters of a value
//! in their messages. A [`Verifier`] offers the same operations with a caller-chosen limit.

use crate::comparators::any_of_comparator::AnyOfComparator;
use crate::comparators::exact_comparator::ExactComparator;
use crate::comparators::numeric_comparator::NumericComparator;
use crate::comparators::ordered_comparator::OrderedComparator;
use crate::comparators::table_comparator::TableComparator;
use crate::comparators::unordered_comparator::UnorderedComparator;
use crate::traits::comparator::OutputComparator;
use crate::types::{Row, Verdict};
use tracing::debug;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Runs any collection comparator and wraps its outcome.
pub fn verify_with<C: OutputComparator>(
    comparator: &C,
    actual: &[C::Item],
    expected: &[C::Item],
) -> Verdict {
    debug!(
        mode = comparator.mode(),
        expected_rows = expected.len(),
        actual_rows = actual.len(),
        "comparing result"
    );
    comparator.compare(expected, actual).into()
}

/// The verification operations bound to one message preview limit.
///
/// A `Verifier` is a plain value: the limit is fixed at construction, so the same inputs
/// always produce the same verdict and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    preview_chars: usize,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_PREVIEW_CHARS)
    }
}

impl Verifier {
    /// A limit of zero is raised to one character.
    pub fn new(preview_chars: usize) -> Self {
        Self {
            preview_chars: preview_chars.max(1),
        }
    }

    pub fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    pub fn scalar(&self, actual: &str, expected: &str) -> Verdict {
        ExactComparator::new(self.preview_chars)
            .compare(expected, actual)
            .into()
    }

    pub fn single_value(&self, actual: &[String], expected: &str) -> Verdict {
        ExactComparator::new(self.preview_chars)
            .compare_single(expected, actual)
            .into()
    }

    pub fn scalar_numeric(&self, actual: &str, expected: f64, tolerance: f64) -> Verdict {
        NumericComparator::new(tolerance)
            .with_preview_chars(self.preview_chars)
            .compare(expected, actual)
            .into()
    }

    pub fn sequence_ordered(&self, actual: &[String], expected: &[String]) -> Verdict {
        verify_with(&OrderedComparator::new(self.preview_chars), actual, expected)
    }

    pub fn sequence_unordered(&self, actual: &[String], expected: &[String]) -> Verdict {
        verify_with(&UnorderedComparator::new(self.preview_chars), actual, expected)
    }

    pub fn table_ordered(&self, actual: &[Row], expected: &[Row]) -> Verdict {
        verify_with(&TableComparator::new(self.preview_chars), actual, expected)
    }

    /// The any-of failure message quotes no values, so the limit does not apply.
    pub fn any_of(&self, actual: &[String], alternatives: &[Vec<String>]) -> Verdict {
        AnyOfComparator.compare(alternatives, actual).into()
    }
}

/// Exact string equality, no normalization: `"2.0"` is not `"2"`.
pub fn verify_scalar(actual: &str, expected: &str) -> Verdict {
    Verifier::default().scalar(actual, expected)
}

/// A single-column result must hold exactly one row equal to `expected`.
pub fn verify_single_value(actual: &[String], expected: &str) -> Verdict {
    Verifier::default().single_value(actual, expected)
}

/// Parses `actual` as a real number and checks `|actual - expected| <= tolerance`.
pub fn verify_scalar_numeric(actual: &str, expected: f64, tolerance: f64) -> Verdict {
    Verifier::default().scalar_numeric(actual, expected, tolerance)
}

pub fn verify_sequence_ordered(actual: &[String], expected: &[String]) -> Verdict {
    Verifier::default().sequence_ordered(actual, expected)
}

pub fn verify_sequence_unordered(actual: &[String], expected: &[String]) -> Verdict {
    Verifier::default().sequence_unordered(actual, expected)
}

pub fn verify_table_ordered(actual: &[Row], expected: &[Row]) -> Verdict {
    Verifier::default().table_ordered(actual, expected)
}

/// Passes if `actual` unordered-matches at least one of `alternatives`.
pub fn verify_any_of(actual: &[String], alternatives: &[Vec<String>]) -> Verdict {
    Verifier::default().any_of(actual, alternatives)
}
