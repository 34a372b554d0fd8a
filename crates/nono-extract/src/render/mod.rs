//! Output adapters turning extracted puzzles into concrete listings.
//!
//! The core only guarantees the [`Puzzle`] values and their canonical text;
//! each adapter owns the quoting rules of its container.

use nono_core::{NonoError, Puzzle};

use crate::serde::to_pretty_json;

/// Plain text display with solution pictures.
pub mod text;
/// TypeScript embedded-source listings.
pub mod typescript;

/// Concrete listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// TypeScript module embedding canonical clue text.
    TypeScript,
    /// Pretty-printed JSON array of puzzle objects.
    Json,
    /// Human readable text with solution pictures.
    Text,
}

impl OutputFormat {
    /// File extension used when the listing is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::TypeScript => "ts",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// File name of the listing for `grid_size`.
    pub fn file_name(&self, grid_size: usize) -> String {
        format!("puzzles-{grid_size}x{grid_size}.{}", self.extension())
    }

    /// Renders the puzzles of one grid size.
    pub fn render(&self, grid_size: usize, puzzles: &[Puzzle]) -> Result<String, NonoError> {
        match self {
            OutputFormat::TypeScript => Ok(typescript::render_module(grid_size, puzzles)),
            OutputFormat::Json => to_json_listing(puzzles),
            OutputFormat::Text => Ok(text::render_listing(puzzles)),
        }
    }
}

/// Renders puzzles as an indented JSON array.
pub fn to_json_listing(puzzles: &[Puzzle]) -> Result<String, NonoError> {
    to_pretty_json(&puzzles)
}
