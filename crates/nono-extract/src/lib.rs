#![deny(missing_docs)]
#![doc = "Decoding, filtering, reproducible sampling and rendering of nonogram puzzles."]

/// Canonical clue text formatter.
pub mod canonical;
/// Packed clue row decoder.
pub mod codec;
/// Dataset access trait and in-memory storage.
pub mod dataset;
/// Canonical hashing helpers.
pub mod hash;
/// End-to-end extraction for one grid size.
pub mod pipeline;
/// Puzzle record assembly.
pub mod record;
/// Output adapters.
pub mod render;
/// Two-stage candidate sampler.
pub mod sampler;
/// Canonical JSON serde helpers.
pub mod serde;
/// Quality acceptance criteria.
pub mod validate;

pub use canonical::render as render_canonical;
pub use codec::{line_runs, ClueCodec, DecodedClues};
pub use dataset::{PackedArrays, PuzzleSource};
pub use pipeline::{extract, ExtractRequest, Extraction};
pub use record::{build_puzzle, load_puzzle, solution_to_string};
pub use render::OutputFormat;
pub use sampler::{
    CandidatePool, PoolStrategy, RejectionCounts, SampleOutcome, SampleStats, Sampler,
    SamplerConfig,
};
pub use validate::{fill_ratio, is_valid, QualityCriteria, QualityVerdict, Rejection};
