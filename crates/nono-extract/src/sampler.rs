use std::ops::Range;
use std::vec;

use log::{debug, info};
use nono_core::{ErrorInfo, NonoError, RngFactory, StdRngFactory};
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::codec::ClueCodec;
use crate::dataset::PuzzleSource;
use crate::validate::{QualityCriteria, Rejection};

/// Tuning knobs for candidate selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Datasets with more rows than this are scanned through a random subset.
    #[serde(default = "SamplerConfig::default_large_dataset_threshold")]
    pub large_dataset_threshold: usize,
    /// Size of the random subset drawn from large datasets.
    #[serde(default = "SamplerConfig::default_candidate_pool")]
    pub candidate_pool: usize,
    /// Scanning stops once `overcollect_factor * requested` valid rows are found.
    #[serde(default = "SamplerConfig::default_overcollect_factor")]
    pub overcollect_factor: usize,
}

impl SamplerConfig {
    fn default_large_dataset_threshold() -> usize {
        100_000
    }
    fn default_candidate_pool() -> usize {
        50_000
    }
    fn default_overcollect_factor() -> usize {
        10
    }

    /// Rejects settings that would make every run degenerate.
    pub fn validate(&self) -> Result<(), NonoError> {
        if self.candidate_pool == 0 || self.overcollect_factor == 0 {
            return Err(NonoError::Config(
                ErrorInfo::new("sampler-config", "pool size and over-collection factor must be positive")
                    .with_context("candidate_pool", self.candidate_pool)
                    .with_context("overcollect_factor", self.overcollect_factor),
            ));
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            large_dataset_threshold: Self::default_large_dataset_threshold(),
            candidate_pool: Self::default_candidate_pool(),
            overcollect_factor: Self::default_overcollect_factor(),
        }
    }
}

/// How the candidate indices were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolStrategy {
    /// Every index in order.
    FullScan,
    /// A seeded random subset drawn without replacement.
    RandomSubset,
}

/// Ordered stream of candidate indices for one run.
#[derive(Debug, Clone)]
pub enum CandidatePool {
    /// All rows, in dataset order.
    Sequential(Range<usize>),
    /// Randomly drawn rows, in draw order.
    Sampled(vec::IntoIter<usize>),
}

impl CandidatePool {
    /// Strategy that produced the pool.
    pub fn strategy(&self) -> PoolStrategy {
        match self {
            CandidatePool::Sequential(_) => PoolStrategy::FullScan,
            CandidatePool::Sampled(_) => PoolStrategy::RandomSubset,
        }
    }
}

impl Iterator for CandidatePool {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            CandidatePool::Sequential(range) => range.next(),
            CandidatePool::Sampled(indices) => indices.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            CandidatePool::Sequential(range) => range.size_hint(),
            CandidatePool::Sampled(indices) => indices.size_hint(),
        }
    }
}

impl ExactSizeIterator for CandidatePool {}

/// Rejections attributed to the first failing criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RejectionCounts {
    /// Candidates with an empty row or column.
    pub incomplete: usize,
    /// Candidates outside the fill-ratio window.
    pub density: usize,
    /// Candidates without any multi-group line.
    pub simple: usize,
}

impl RejectionCounts {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Incomplete => self.incomplete += 1,
            Rejection::Density => self.density += 1,
            Rejection::Simple => self.simple += 1,
        }
    }

    /// Total number of rejected candidates.
    pub fn total(&self) -> usize {
        self.incomplete + self.density + self.simple
    }
}

/// Counters describing one sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Edge length of the sampled grids.
    pub grid_size: usize,
    /// Rows in the source dataset.
    pub dataset_rows: usize,
    /// Candidate selection strategy.
    pub strategy: PoolStrategy,
    /// Number of indices in the candidate pool.
    pub pool_size: usize,
    /// Candidates decoded and evaluated before stopping.
    pub candidates_scanned: usize,
    /// Candidates that passed every criterion.
    pub valid_found: usize,
    /// Breakdown of rejected candidates.
    pub rejected: RejectionCounts,
}

/// Selected indices together with the statistics of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOutcome {
    /// Dataset indices in final draw order.
    pub selected: Vec<usize>,
    /// Run statistics.
    pub stats: SampleStats,
}

/// Reproducible two-stage sampler over a [`PuzzleSource`].
///
/// Stage one walks a candidate pool (the whole dataset, or a seeded random
/// subset of a large one) and keeps rows that pass the quality criteria,
/// stopping early once enough have been collected. Stage two draws the
/// requested number of rows from the survivors with a generator restarted from
/// the same seed.
///
/// Stopping early favours candidates that appear first in the pool. This is a
/// known approximation and is kept for parity with existing fixtures.
#[derive(Debug, Clone)]
pub struct Sampler<F = StdRngFactory> {
    criteria: QualityCriteria,
    config: SamplerConfig,
    factory: F,
}

impl Sampler<StdRngFactory> {
    /// Creates a sampler backed by the default seeded generator.
    pub fn new(criteria: QualityCriteria, config: SamplerConfig) -> Self {
        Self::with_factory(criteria, config, StdRngFactory)
    }
}

impl Default for Sampler<StdRngFactory> {
    fn default() -> Self {
        Self::new(QualityCriteria::default(), SamplerConfig::default())
    }
}

impl<F: RngFactory> Sampler<F> {
    /// Creates a sampler drawing randomness from `factory`.
    pub fn with_factory(criteria: QualityCriteria, config: SamplerConfig, factory: F) -> Self {
        Self {
            criteria,
            config,
            factory,
        }
    }

    /// Quality criteria applied to each candidate.
    pub fn criteria(&self) -> &QualityCriteria {
        &self.criteria
    }

    /// Sampling configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Chooses the candidate indices for a dataset of `dataset_rows` rows.
    pub fn candidate_pool(&self, dataset_rows: usize, seed: u64) -> CandidatePool {
        if dataset_rows > self.config.large_dataset_threshold {
            let amount = self.config.candidate_pool.min(dataset_rows);
            let mut rng = self.factory.seeded(seed);
            let drawn = index::sample(&mut rng, dataset_rows, amount).into_vec();
            CandidatePool::Sampled(drawn.into_iter())
        } else {
            CandidatePool::Sequential(0..dataset_rows)
        }
    }

    /// Selects `requested` valid puzzle indices from `source`.
    pub fn sample<S>(&self, source: &S, requested: usize, seed: u64) -> Result<SampleOutcome, NonoError>
    where
        S: PuzzleSource + ?Sized,
    {
        let grid = source.grid();
        if requested == 0 {
            return Err(NonoError::Config(
                ErrorInfo::new("requested-count", "at least one puzzle must be requested")
                    .with_context("grid_size", grid.grid_size),
            ));
        }
        self.config.validate()?;

        let codec = ClueCodec::new(grid);
        let dataset_rows = source.len();
        let pool = self.candidate_pool(dataset_rows, seed);
        let strategy = pool.strategy();
        let pool_size = pool.len();
        debug!(
            "{}x{}: scanning {pool_size} of {dataset_rows} rows ({strategy:?})",
            grid.grid_size, grid.grid_size
        );

        let cap = requested.saturating_mul(self.config.overcollect_factor);
        let mut valid = Vec::new();
        let mut rejected = RejectionCounts::default();
        let mut scanned = 0usize;
        for candidate in pool {
            scanned += 1;
            let (rows, columns) = codec
                .decode(source.clue_row(candidate)?)
                .map_err(|err| with_index(err, candidate))?;
            let solution = source.solution_row(candidate)?;
            if solution.len() != grid.solution_width() {
                return Err(NonoError::row_length(
                    "solution",
                    Some(candidate),
                    grid.solution_width(),
                    solution.len(),
                ));
            }
            if let Some(cell) = solution.iter().position(|&value| value > 1) {
                return Err(NonoError::Shape(
                    ErrorInfo::new("solution-cell", "solution cells must be 0 or 1")
                        .with_context("index", candidate)
                        .with_context("cell", cell)
                        .with_context("value", solution[cell]),
                ));
            }
            match self.criteria.evaluate(&rows, &columns, solution).rejection() {
                None => {
                    valid.push(candidate);
                    if valid.len() >= cap {
                        break;
                    }
                }
                Some(reason) => rejected.record(reason),
            }
        }

        info!(
            "{}x{}: found {} valid puzzles after scanning {scanned} candidates",
            grid.grid_size,
            grid.grid_size,
            valid.len()
        );
        let stats = SampleStats {
            grid_size: grid.grid_size,
            dataset_rows,
            strategy,
            pool_size,
            candidates_scanned: scanned,
            valid_found: valid.len(),
            rejected,
        };
        if valid.len() < requested {
            return Err(NonoError::insufficient(grid.grid_size, valid.len(), requested));
        }

        let mut rng = self.factory.seeded(seed);
        let selected = index::sample(&mut rng, valid.len(), requested)
            .into_iter()
            .map(|position| valid[position])
            .collect();
        Ok(SampleOutcome { selected, stats })
    }
}

fn with_index(err: NonoError, index: usize) -> NonoError {
    match err {
        NonoError::Shape(info) => NonoError::Shape(info.with_context("index", index)),
        other => other,
    }
}
