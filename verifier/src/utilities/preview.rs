//! Bounded rendering of result values for failure messages.
//!
//! The limit is always passed in by the caller; the engine never reads it from
//! process-wide configuration.

use crate::types::Row;

/// Quotes `value`, cutting it at `max_chars` characters.
pub fn render(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return format!("{value:?}");
    }
    let cut: String = value.chars().take(max_chars).collect();
    format!("{cut:?}...")
}

/// Renders a row as `{"a", "b"}`, each cell cut at `max_chars` characters.
pub fn render_row(row: &Row, max_chars: usize) -> String {
    format!(
        "{{{}, {}}}",
        render(&row[0], max_chars),
        render(&row[1], max_chars)
    )
}
