//! A comparator for a single real-valued result checked within a tolerance.
//!
//! Used for aggregates such as averages, where the exact digits depend on the engine's
//! floating-point formatting. The actual value must parse as a plain decimal number;
//! anything else is a hard failure, never silently read as zero.

use crate::error::Mismatch;
use crate::types::Value;
use crate::utilities::normalization::normalize;
use crate::utilities::preview::render;
use util::config::DEFAULT_MESSAGE_PREVIEW_CHARS;

/// Passes when `|actual - expected| <= tolerance`.
#[derive(Debug, Clone, Copy)]
pub struct NumericComparator {
    pub tolerance: f64,
    pub preview_chars: usize,
}

impl NumericComparator {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            preview_chars: DEFAULT_MESSAGE_PREVIEW_CHARS,
        }
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Parses `actual` (surrounding whitespace ignored) and checks it against `expected`.
    pub fn compare(&self, expected: f64, actual: &str) -> Result<(), Mismatch> {
        let Value::Numeric { number, .. } = normalize(actual.trim()) else {
            return Err(Mismatch::Format {
                value: render(actual, self.preview_chars),
            });
        };

        if (number - expected).abs() <= self.tolerance {
            Ok(())
        } else {
            Err(Mismatch::Tolerance {
                expected,
                tolerance: self.tolerance,
                actual: number,
            })
        }
    }
}
