use std::collections::BTreeMap;

use log::info;
use nono_core::{ExtractionProvenance, GridConfig, NonoError, Puzzle, RngFactory, PUZZLE_SCHEMA};
use serde::{Deserialize, Serialize};

use crate::dataset::PuzzleSource;
use crate::hash::stable_hash_string;
use crate::record::load_puzzle;
use crate::sampler::{SampleStats, Sampler};

/// Parameters of one grid-size extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Number of puzzles to emit.
    pub count: usize,
    /// Seed shared by the candidate pool and the final draw.
    pub seed: u64,
}

impl Default for ExtractRequest {
    fn default() -> Self {
        Self { count: 5, seed: 42 }
    }
}

/// Result of extracting puzzles for one grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Grid configuration of the extracted puzzles.
    pub grid: GridConfig,
    /// Puzzles in final draw order.
    pub puzzles: Vec<Puzzle>,
    /// Sampling statistics.
    pub stats: SampleStats,
    /// Reproducibility record for the emitted listing.
    pub provenance: ExtractionProvenance,
}

/// Samples `request.count` valid puzzles from `source` and builds their records.
///
/// Either every requested puzzle is returned or the run fails; partial
/// listings are never produced.
pub fn extract<S, F>(
    source: &S,
    sampler: &Sampler<F>,
    request: &ExtractRequest,
) -> Result<Extraction, NonoError>
where
    S: PuzzleSource + ?Sized,
    F: RngFactory,
{
    let grid = source.grid();
    info!(
        "{}x{}: extracting {} of {} puzzles (seed {})",
        grid.grid_size,
        grid.grid_size,
        request.count,
        source.len(),
        request.seed
    );
    let outcome = sampler.sample(source, request.count, request.seed)?;
    let puzzles = outcome
        .selected
        .iter()
        .map(|&index| load_puzzle(source, index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    let provenance = ExtractionProvenance {
        schema_version: PUZZLE_SCHEMA,
        seed: request.seed,
        grid_size: grid.grid_size,
        max_clue_len: grid.max_clue_len,
        dataset_rows: source.len(),
        requested: request.count,
        output_hash: stable_hash_string(&puzzles)?,
        tool_versions,
    };
    Ok(Extraction {
        grid,
        puzzles,
        stats: outcome.stats,
        provenance,
    })
}
