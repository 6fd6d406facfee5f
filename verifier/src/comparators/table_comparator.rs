//! A comparator for two-column results where **row order matters** but column order
//! within a row does not.
//!
//! Each row is checked with the [`RowComparator`], so numeric formatting differences and
//! swapped columns are forgiven while a wrong `ORDER BY` is not.

use crate::comparators::row_comparator::RowComparator;
use crate::error::Mismatch;
use crate::traits::comparator::OutputComparator;
use crate::types::Row;
use crate::utilities::preview::render_row;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Matches tables of equal length whose rows match pairwise at every index.
#[derive(Debug, Clone, Copy)]
pub struct TableComparator {
    /// Longest cell quoted verbatim in a failure message.
    pub preview_chars: usize,
}

impl TableComparator {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl Default for TableComparator {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_PREVIEW_CHARS)
    }
}

impl OutputComparator for TableComparator {
    type Item = Row;

    fn mode(&self) -> &'static str {
        "table"
    }

    fn compare(&self, expected: &[Row], actual: &[Row]) -> Result<(), Mismatch> {
        if expected.len() != actual.len() {
            return Err(Mismatch::Cardinality {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        match expected
            .iter()
            .zip(actual)
            .position(|(e, a)| !RowComparator.matches(e, a))
        {
            None => Ok(()),
            Some(index) => Err(Mismatch::Content {
                row: index + 1,
                expected: render_row(&expected[index], self.preview_chars),
                actual: render_row(&actual[index], self.preview_chars),
            }),
        }
    }
}
