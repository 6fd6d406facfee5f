//! A comparator for single-column results where **line order does not matter**.
//!
//! The `UnorderedComparator` treats both results as multisets: duplicates count, order
//! does not. Values are compared byte-for-byte after sorting.

use crate::error::Mismatch;
use crate::traits::comparator::OutputComparator;
use crate::utilities::preview::render;
use std::collections::HashMap;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Matches if both sequences contain the same values the same number of times.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedComparator {
    pub preview_chars: usize,
}

impl UnorderedComparator {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl Default for UnorderedComparator {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_PREVIEW_CHARS)
    }
}

fn sorted(items: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = items.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}

/// First expected value (in expected order) left over once `actual` is used up.
fn first_unmatched<'a>(expected: &'a [String], actual: &[String]) -> Option<&'a str> {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for a in actual {
        *available.entry(a.as_str()).or_default() += 1;
    }
    for e in expected {
        match available.get_mut(e.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Some(e.as_str()),
        }
    }
    None
}

impl OutputComparator for UnorderedComparator {
    type Item = String;

    fn mode(&self) -> &'static str {
        "unordered"
    }

    fn compare(&self, expected: &[String], actual: &[String]) -> Result<(), Mismatch> {
        if expected.len() != actual.len() {
            return Err(Mismatch::Cardinality {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        if sorted(expected) == sorted(actual) {
            return Ok(());
        }

        let missing = first_unmatched(expected, actual).unwrap_or_default();
        Err(Mismatch::Missing {
            count: expected.len(),
            missing: render(missing, self.preview_chars),
        })
    }
}
