//! Provenance and schema descriptors attached to extraction artefacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance recorded for one grid-size extraction run.
///
/// Together with the dataset files, the fields are enough to reproduce the
/// exact puzzle selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtractionProvenance {
    /// Schema of the puzzle listing this provenance describes.
    pub schema_version: SchemaVersion,
    /// Seed used for both the candidate pool and the final draw.
    pub seed: u64,
    /// Edge length of the extracted grids.
    pub grid_size: usize,
    /// Clue slot width used to decode the source rows.
    pub max_clue_len: usize,
    /// Number of rows in the source dataset.
    pub dataset_rows: usize,
    /// Number of puzzles requested and emitted.
    pub requested: usize,
    /// SHA-256 of the canonical JSON encoding of the emitted puzzles.
    pub output_hash: String,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
