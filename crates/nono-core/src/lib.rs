#![deny(missing_docs)]
#![doc = "Core data types, grid configuration, errors and deterministic RNG for nonogram extraction."]

pub mod errors;
pub mod grid;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, NonoError};
pub use grid::{GridConfig, GridSelector, GridTable};
pub use provenance::{ExtractionProvenance, SchemaVersion};
pub use rng::{RngFactory, RngHandle, StdRngFactory};
pub use types::{ClueSet, Puzzle, PuzzleClues, PUZZLE_SCHEMA};
