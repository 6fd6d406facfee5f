use crate::error::Mismatch;

/// OutputComparator is a strategy trait for comparing one collection result.
/// Each implementation decides what "equal" means for its equivalence mode
/// (ordered, unordered, row-by-row with column swap).
pub trait OutputComparator: Send + Sync {
    /// The element type of the compared collections.
    type Item;

    /// Short name of the equivalence mode, used in logs.
    fn mode(&self) -> &'static str;

    /// Compare the driver's `actual` result against the reference `expected` result.
    ///
    /// Returns the first reason the two differ. Implementations must be symmetric:
    /// swapping the arguments never turns a match into a mismatch.
    fn compare(&self, expected: &[Self::Item], actual: &[Self::Item]) -> Result<(), Mismatch>;
}
