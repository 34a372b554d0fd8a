use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use nono_core::{ErrorInfo, GridConfig, GridTable, NonoError};
use nono_extract::{ExtractRequest, PackedArrays, QualityCriteria, Sampler, SamplerConfig};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::npz::{load_matrix, DEFAULT_MEMBER};

fn yaml_error(code: &str, err: impl ToString) -> NonoError {
    NonoError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, NonoError> {
    serde_yaml::to_string(value).map_err(|err| yaml_error("yaml-serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, NonoError> {
    serde_yaml::from_slice(data).map_err(|err| yaml_error("yaml-deserialize", err))
}

/// Location and packing of the paired arrays for one grid size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Edge length of the square grid.
    pub grid_size: usize,
    /// Clue slots per line in the packed clue rows.
    pub max_clue_len: usize,
    /// Clue array file, relative to the data directory.
    pub clues: PathBuf,
    /// Solution array file, relative to the data directory.
    pub solutions: PathBuf,
    /// Archive member holding the array in `.npz` files.
    #[serde(default = "DatasetEntry::default_array")]
    pub array: String,
}

impl DatasetEntry {
    fn default_array() -> String {
        DEFAULT_MEMBER.to_string()
    }

    fn reference(grid_size: usize, max_clue_len: usize, clues: &str, solutions: &str) -> Self {
        Self {
            grid_size,
            max_clue_len,
            clues: PathBuf::from(clues),
            solutions: PathBuf::from(solutions),
            array: Self::default_array(),
        }
    }

    /// Grid configuration the arrays are packed with.
    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.grid_size, self.max_clue_len)
    }
}

/// Extraction settings, typically read from a YAML file.
///
/// Every field is optional; an empty document yields the reference setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Seed for the candidate pool and the final draw.
    #[serde(default = "ExtractConfig::default_seed")]
    pub seed: u64,
    /// Puzzles emitted per grid size.
    #[serde(default = "ExtractConfig::default_count")]
    pub count: usize,
    /// Acceptance thresholds.
    #[serde(default)]
    pub criteria: QualityCriteria,
    /// Candidate pool tuning.
    #[serde(default)]
    pub sampler: SamplerConfig,
    /// One entry per supported grid size.
    #[serde(default = "ExtractConfig::default_datasets")]
    pub datasets: Vec<DatasetEntry>,
}

impl ExtractConfig {
    fn default_seed() -> u64 {
        42
    }
    fn default_count() -> usize {
        5
    }
    fn default_datasets() -> Vec<DatasetEntry> {
        vec![
            DatasetEntry::reference(5, 3, "5x5/train_combined.npz", "5x5/target_combined.npz"),
            DatasetEntry::reference(
                10,
                5,
                "10x10/x_train_dataset.npz",
                "10x10/y_train_dataset.npz",
            ),
            DatasetEntry::reference(
                15,
                8,
                "15x15/x_test_15x15_ok.npz",
                "15x15/y_test_15x15_ok.npz",
            ),
        ]
    }

    /// Checks thresholds, sampler settings and the dataset registry.
    pub fn validate(&self) -> Result<(), NonoError> {
        if self.count == 0 {
            return Err(NonoError::Config(ErrorInfo::new(
                "requested-count",
                "count must be at least 1",
            )));
        }
        self.sampler.validate()?;
        self.grid_table()?;
        Ok(())
    }

    /// Grid table derived from the dataset entries.
    pub fn grid_table(&self) -> Result<GridTable, NonoError> {
        GridTable::new(self.datasets.iter().map(DatasetEntry::grid))
    }

    /// Dataset entry for `grid_size`.
    pub fn dataset(&self, grid_size: usize) -> Result<&DatasetEntry, NonoError> {
        self.datasets
            .iter()
            .find(|entry| entry.grid_size == grid_size)
            .ok_or_else(|| {
                let supported: Vec<String> = self
                    .datasets
                    .iter()
                    .map(|entry| entry.grid_size.to_string())
                    .collect();
                NonoError::Config(
                    ErrorInfo::new("unsupported-grid-size", "no dataset configured for grid size")
                        .with_context("grid_size", grid_size)
                        .with_context("supported", supported.join(",")),
                )
            })
    }

    /// Sampler built from the configured criteria and pool settings.
    pub fn sampler(&self) -> Sampler {
        Sampler::new(self.criteria.clone(), self.sampler.clone())
    }

    /// Extraction request for the configured count and seed.
    pub fn request(&self) -> ExtractRequest {
        ExtractRequest {
            count: self.count,
            seed: self.seed,
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            count: Self::default_count(),
            criteria: QualityCriteria::default(),
            sampler: SamplerConfig::default(),
            datasets: Self::default_datasets(),
        }
    }
}

/// Reads and validates an [`ExtractConfig`] from a YAML file.
pub fn load_config(path: &Path) -> Result<ExtractConfig, NonoError> {
    let bytes = fs::read(path).map_err(|err| {
        NonoError::Config(
            ErrorInfo::new("config-read", err.to_string()).with_context("path", path.display()),
        )
    })?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ExtractConfig::default());
    }
    let config: ExtractConfig = from_yaml_slice(&bytes).map_err(|err| {
        NonoError::Config(
            ErrorInfo::new("config-parse", err.info().message.clone())
                .with_context("path", path.display()),
        )
    })?;
    config.validate()?;
    Ok(config)
}

fn check_width(path: &Path, kind: &str, expected: usize, actual: usize) -> Result<(), NonoError> {
    if expected == actual {
        return Ok(());
    }
    Err(NonoError::Shape(
        ErrorInfo::new(
            format!("{kind}-row-shape"),
            format!("{kind} array rows have {actual} values, expected {expected}"),
        )
        .with_context("expected", expected)
        .with_context("actual", actual)
        .with_context("path", path.display()),
    ))
}

/// Loads the clue and solution arrays of `entry` from `data_dir`.
pub fn load_dataset(entry: &DatasetEntry, data_dir: &Path) -> Result<PackedArrays, NonoError> {
    let grid = entry.grid();
    let clue_path = data_dir.join(&entry.clues);
    let solution_path = data_dir.join(&entry.solutions);
    debug!(
        "{}x{}: loading {} and {}",
        grid.grid_size,
        grid.grid_size,
        clue_path.display(),
        solution_path.display()
    );
    let (clues, clue_width) = load_matrix(&clue_path, &entry.array)?;
    check_width(&clue_path, "clue", grid.clue_width(), clue_width)?;
    let (solutions, solution_width) = load_matrix(&solution_path, &entry.array)?;
    check_width(&solution_path, "solution", grid.solution_width(), solution_width)?;
    PackedArrays::new(grid, clues.data, solutions.data)
}
