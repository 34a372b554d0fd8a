use std::fmt::Write;

use nono_core::ClueSet;

/// Renders row and column clues into the canonical text block.
///
/// ```text
/// Row clues:
///   Row 1: 3 1
///   ...
///
/// Column clues:
///   Column 1: 1 2
///   ...
/// ```
///
/// Labels are 1-indexed, empty lines render as `-`, and the block has no
/// trailing newline. Downstream fixtures compare this text byte for byte.
pub fn render(rows: &[ClueSet], columns: &[ClueSet]) -> String {
    let mut text = String::from("Row clues:");
    for (idx, clues) in rows.iter().enumerate() {
        let _ = write!(text, "\n  Row {}: {}", idx + 1, clues);
    }
    text.push_str("\n\nColumn clues:");
    for (idx, clues) in columns.iter().enumerate() {
        let _ = write!(text, "\n  Column {}: {}", idx + 1, clues);
    }
    text
}
