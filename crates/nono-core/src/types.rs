use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, NonoError};
use crate::provenance::SchemaVersion;

/// Schema version of the serialized puzzle listing.
pub const PUZZLE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Run lengths of filled cells for one row or column, in reading order.
///
/// Every value is strictly positive. An empty set describes a line without
/// filled cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ClueSet(Vec<u32>);

impl ClueSet {
    /// Builds a clue set, rejecting zero-length runs.
    pub fn new(runs: Vec<u32>) -> Result<Self, NonoError> {
        if let Some(position) = runs.iter().position(|&run| run == 0) {
            return Err(NonoError::Shape(
                ErrorInfo::new("zero-run", "clue groups must be positive")
                    .with_context("position", position),
            ));
        }
        Ok(Self(runs))
    }

    /// Empty clue set for a line without filled cells.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the run lengths.
    pub fn runs(&self) -> &[u32] {
        &self.0
    }

    /// Number of clue groups in the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the line has no filled cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the run lengths.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<u32>> for ClueSet {
    type Error = NonoError;

    fn try_from(runs: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(runs)
    }
}

impl From<ClueSet> for Vec<u32> {
    fn from(clues: ClueSet) -> Self {
        clues.0
    }
}

impl fmt::Display for ClueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        for (idx, run) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// Clue payload of a [`Puzzle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleClues {
    /// Canonical text rendering of `rows` and `columns`.
    pub canonical: String,
    /// Row clues, top to bottom.
    pub rows: Vec<ClueSet>,
    /// Column clues, left to right.
    pub columns: Vec<ClueSet>,
}

/// A validated puzzle selected from a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Position of the puzzle in the source dataset.
    pub index: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Structured and canonical clues.
    pub clues: PuzzleClues,
    /// Row-major solution as `'0'`/`'1'` characters without separators.
    pub solution: String,
}

impl Puzzle {
    /// Iterates over the solution rows as strings of `'0'`/`'1'`.
    pub fn solution_rows(&self) -> impl Iterator<Item = &str> + '_ {
        let width = self.width.max(1);
        (0..self.height).filter_map(move |row| self.solution.get(row * width..(row + 1) * width))
    }

    /// Fraction of filled cells in the solution.
    pub fn fill_ratio(&self) -> f64 {
        if self.solution.is_empty() {
            return 0.0;
        }
        let filled = self.solution.bytes().filter(|&cell| cell == b'1').count();
        filled as f64 / self.solution.len() as f64
    }
}
