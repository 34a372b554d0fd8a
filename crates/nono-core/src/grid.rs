//! Grid-size configuration table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, NonoError};

/// Layout parameters for one supported grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    /// Edge length of the square grid.
    pub grid_size: usize,
    /// Number of clue slots reserved per line in the packed clue rows.
    pub max_clue_len: usize,
}

impl GridConfig {
    /// Creates a new configuration entry.
    pub const fn new(grid_size: usize, max_clue_len: usize) -> Self {
        Self {
            grid_size,
            max_clue_len,
        }
    }

    /// Length of one packed clue row (row block followed by column block).
    pub const fn clue_width(&self) -> usize {
        2 * self.grid_size * self.max_clue_len
    }

    /// Length of one flattened, row-major solution row.
    pub const fn solution_width(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

/// Immutable mapping from grid size to its [`GridConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTable {
    entries: BTreeMap<usize, GridConfig>,
}

impl GridTable {
    /// Builds a table from the provided entries.
    ///
    /// Zero sizes and duplicate grid sizes are configuration errors.
    pub fn new(configs: impl IntoIterator<Item = GridConfig>) -> Result<Self, NonoError> {
        let mut entries = BTreeMap::new();
        for config in configs {
            if config.grid_size == 0 || config.max_clue_len == 0 {
                return Err(NonoError::Config(
                    ErrorInfo::new("degenerate-grid", "grid and clue sizes must be positive")
                        .with_context("grid_size", config.grid_size)
                        .with_context("max_clue_len", config.max_clue_len),
                ));
            }
            if entries.insert(config.grid_size, config).is_some() {
                return Err(NonoError::Config(
                    ErrorInfo::new("duplicate-grid-size", "grid size configured twice")
                        .with_context("grid_size", config.grid_size),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with the reference datasets: 5→3, 10→5, 15→8.
    pub fn reference() -> Self {
        let entries = [
            GridConfig::new(5, 3),
            GridConfig::new(10, 5),
            GridConfig::new(15, 8),
        ]
        .into_iter()
        .map(|config| (config.grid_size, config))
        .collect();
        Self { entries }
    }

    /// Looks up the configuration for `grid_size`.
    pub fn get(&self, grid_size: usize) -> Result<GridConfig, NonoError> {
        self.entries.get(&grid_size).copied().ok_or_else(|| {
            NonoError::Config(
                ErrorInfo::new("unsupported-grid-size", "grid size is not configured")
                    .with_context("grid_size", grid_size)
                    .with_context("supported", self.describe_sizes()),
            )
        })
    }

    /// Supported grid sizes in ascending order.
    pub fn sizes(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over the configured entries in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = &GridConfig> {
        self.entries.values()
    }

    /// Finds the entry whose packed clue row has the given width.
    pub fn by_clue_width(&self, width: usize) -> Option<GridConfig> {
        self.iter().find(|config| config.clue_width() == width).copied()
    }

    /// Finds the entry whose solution row has the given width.
    pub fn by_solution_width(&self, width: usize) -> Option<GridConfig> {
        self.iter()
            .find(|config| config.solution_width() == width)
            .copied()
    }

    /// Resolves a selector into concrete configurations, rejecting unknown sizes.
    pub fn select(&self, selector: GridSelector) -> Result<Vec<GridConfig>, NonoError> {
        match selector {
            GridSelector::All => Ok(self.iter().copied().collect()),
            GridSelector::Size(size) => Ok(vec![self.get(size)?]),
        }
    }

    fn describe_sizes(&self) -> String {
        self.sizes()
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for GridTable {
    fn default() -> Self {
        Self::reference()
    }
}

/// Grid sizes requested for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSelector {
    /// Every configured size.
    #[default]
    All,
    /// A single grid size.
    Size(usize),
}

impl FromStr for GridSelector {
    type Err = NonoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(GridSelector::All);
        }
        trimmed.parse::<usize>().map(GridSelector::Size).map_err(|_| {
            NonoError::Config(
                ErrorInfo::new("grid-selector", "expected a grid size or `all`")
                    .with_context("value", trimmed),
            )
        })
    }
}

impl fmt::Display for GridSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSelector::All => write!(f, "all"),
            GridSelector::Size(size) => write!(f, "{size}"),
        }
    }
}
