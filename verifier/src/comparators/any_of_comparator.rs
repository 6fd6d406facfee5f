//! Acceptance of a result that matches any one of several correct answers.
//!
//! Some questions have more than one academically valid answer (two actor pairs that both
//! satisfy the prompt, say). Each accepted answer is an unordered single-column result;
//! the first one that matches wins.

use crate::comparators::unordered_comparator::UnorderedComparator;
use crate::error::Mismatch;
use crate::traits::comparator::OutputComparator;
use tracing::debug;

/// Tries each accepted answer in registration order.
pub struct AnyOfComparator;

impl AnyOfComparator {
    /// Returns `Ok(())` as soon as `actual` unordered-matches one of `alternatives`.
    ///
    /// The failure never hints at which answer was "intended"; it is always
    /// [`Mismatch::NoAlternativeMatched`]. An empty `alternatives` list cannot match.
    pub fn compare(&self, alternatives: &[Vec<String>], actual: &[String]) -> Result<(), Mismatch> {
        let unordered = UnorderedComparator::default();
        match alternatives
            .iter()
            .position(|alternative| unordered.compare(alternative, actual).is_ok())
        {
            Some(index) => {
                debug!(alternative = index + 1, "accepted answer matched");
                Ok(())
            }
            None => Err(Mismatch::NoAlternativeMatched),
        }
    }
}
