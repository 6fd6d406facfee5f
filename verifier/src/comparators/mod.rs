//! # Comparators
//!
//! The equivalence modes a grading case can ask for. Each comparator decides one notion
//! of "same result" and reports the first reason two results differ.
//!
//! Collection comparators implement [`OutputComparator`](crate::traits::comparator::OutputComparator):
//! - [`ordered_comparator`]: byte-exact, position by position.
//! - [`unordered_comparator`]: byte-exact multiset equality.
//! - [`table_comparator`]: row order matters, column order within a row does not.
//!
//! The rest have their own shapes:
//! - [`exact_comparator`]: one scalar, byte-exact.
//! - [`numeric_comparator`]: one real value within a tolerance.
//! - [`row_comparator`]: one two-column row, numeric-aware and swap-tolerant.
//! - [`any_of_comparator`]: unordered match against any of several accepted answers.

pub mod any_of_comparator;
pub mod exact_comparator;
pub mod numeric_comparator;
pub mod ordered_comparator;
pub mod row_comparator;
pub mod table_comparator;
pub mod unordered_comparator;
