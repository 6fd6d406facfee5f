//! Matching of one two-column row, tolerant of column order and number formatting.
//!
//! Students may select `(title, year)` or `(year, title)`, and a database may print a
//! rating as `8.8` or `8.80`. Both cells of each row are normalized, then the row matches
//! if the cells pair up either straight or swapped.

use crate::types::Row;
use crate::utilities::normalization::normalize;

/// Decides whether two rows hold the same pair of values.
pub struct RowComparator;

impl RowComparator {
    /// True if `actual` equals `expected` after normalization, in either column order.
    pub fn matches(&self, expected: &Row, actual: &Row) -> bool {
        let [e0, e1] = [normalize(&expected[0]), normalize(&expected[1])];
        let [a0, a1] = [normalize(&actual[0]), normalize(&actual[1])];

        (a0 == e0 && a1 == e1) || (a0 == e1 && a1 == e0)
    }
}
