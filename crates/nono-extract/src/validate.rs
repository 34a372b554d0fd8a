use nono_core::ClueSet;
use serde::{Deserialize, Serialize};

/// Acceptance thresholds for candidate puzzles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCriteria {
    /// Smallest accepted fraction of filled cells (inclusive).
    #[serde(default = "QualityCriteria::default_min_fill_ratio")]
    pub min_fill_ratio: f64,
    /// Largest accepted fraction of filled cells (inclusive).
    #[serde(default = "QualityCriteria::default_max_fill_ratio")]
    pub max_fill_ratio: f64,
    /// Number of clue groups at least one line must reach.
    #[serde(default = "QualityCriteria::default_min_groups")]
    pub min_groups: usize,
}

impl QualityCriteria {
    fn default_min_fill_ratio() -> f64 {
        0.30
    }
    fn default_max_fill_ratio() -> f64 {
        0.70
    }
    fn default_min_groups() -> usize {
        2
    }

    /// Applies every criterion to the candidate and reports each outcome.
    pub fn evaluate<T>(&self, rows: &[ClueSet], columns: &[ClueSet], solution: &[T]) -> QualityVerdict
    where
        T: Copy + Into<u32>,
    {
        let complete = rows.iter().chain(columns).all(|clues| !clues.is_empty());
        let fill_ratio = fill_ratio(solution);
        let density = fill_ratio >= self.min_fill_ratio && fill_ratio <= self.max_fill_ratio;
        let complex = rows
            .iter()
            .chain(columns)
            .any(|clues| clues.len() >= self.min_groups);
        QualityVerdict {
            complete,
            density,
            complex,
            fill_ratio,
        }
    }

    /// Returns true when the candidate passes all criteria.
    pub fn is_valid<T>(&self, rows: &[ClueSet], columns: &[ClueSet], solution: &[T]) -> bool
    where
        T: Copy + Into<u32>,
    {
        self.evaluate(rows, columns, solution).passes()
    }
}

impl Default for QualityCriteria {
    fn default() -> Self {
        Self {
            min_fill_ratio: Self::default_min_fill_ratio(),
            max_fill_ratio: Self::default_max_fill_ratio(),
            min_groups: Self::default_min_groups(),
        }
    }
}

/// Per-criterion outcome of [`QualityCriteria::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct QualityVerdict {
    /// Every row and column carries at least one clue group.
    pub complete: bool,
    /// Fill ratio lies inside the accepted window.
    pub density: bool,
    /// Some line has enough clue groups.
    pub complex: bool,
    /// Measured fraction of filled cells.
    pub fill_ratio: f64,
}

impl QualityVerdict {
    /// Returns true when all predicates succeed.
    pub fn passes(&self) -> bool {
        self.complete && self.density && self.complex
    }

    /// First failing criterion in check order, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        if !self.complete {
            Some(Rejection::Incomplete)
        } else if !self.density {
            Some(Rejection::Density)
        } else if !self.complex {
            Some(Rejection::Simple)
        } else {
            None
        }
    }
}

/// Reason a candidate was filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// At least one row or column has no clue.
    Incomplete,
    /// Too sparse or too dense.
    Density,
    /// No line has multiple clue groups.
    Simple,
}

/// Checks a candidate against the default criteria.
pub fn is_valid<T>(rows: &[ClueSet], columns: &[ClueSet], solution: &[T]) -> bool
where
    T: Copy + Into<u32>,
{
    QualityCriteria::default().is_valid(rows, columns, solution)
}

/// Fraction of cells equal to 1; zero for an empty grid.
pub fn fill_ratio<T>(solution: &[T]) -> f64
where
    T: Copy + Into<u32>,
{
    if solution.is_empty() {
        return 0.0;
    }
    let filled = solution.iter().filter(|&&cell| cell.into() == 1).count();
    filled as f64 / solution.len() as f64
}
