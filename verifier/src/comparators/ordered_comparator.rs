//! A comparator for single-column results where **line order matters**.
//!
//! The `OrderedComparator` is used when the query must sort its output (an `ORDER BY`
//! check). Values are compared byte-for-byte at the same index; no numeric normalization
//! is applied.

use crate::comparators::unordered_comparator::UnorderedComparator;
use crate::error::Mismatch;
use crate::traits::comparator::OutputComparator;
use crate::utilities::preview::render;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Awards a match only if both sequences have the same length and identical values at
/// every position.
///
/// When the sequences hold the same values in a different order the failure says so,
/// so a student who forgot to sort is told exactly that.
#[derive(Debug, Clone, Copy)]
pub struct OrderedComparator {
    /// Longest value quoted verbatim in a failure message.
    pub preview_chars: usize,
}

impl OrderedComparator {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl Default for OrderedComparator {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_PREVIEW_CHARS)
    }
}

impl OutputComparator for OrderedComparator {
    type Item = String;

    fn mode(&self) -> &'static str {
        "ordered"
    }

    fn compare(&self, expected: &[String], actual: &[String]) -> Result<(), Mismatch> {
        if expected.len() != actual.len() {
            return Err(Mismatch::Cardinality {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let Some(index) = expected.iter().zip(actual).position(|(e, a)| e != a) else {
            return Ok(());
        };

        let row = index + 1;
        let expected_value = render(&expected[index], self.preview_chars);
        let actual_value = render(&actual[index], self.preview_chars);

        let same_items = UnorderedComparator::new(self.preview_chars)
            .compare(expected, actual)
            .is_ok();

        if same_items {
            Err(Mismatch::Order {
                row,
                expected: expected_value,
                actual: actual_value,
            })
        } else {
            Err(Mismatch::Content {
                row,
                expected: expected_value,
                actual: actual_value,
            })
        }
    }
}
