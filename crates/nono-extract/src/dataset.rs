use nono_core::{ErrorInfo, GridConfig, NonoError};

/// Read-only access to the paired clue and solution arrays of one grid size.
///
/// Row `i` of both arrays describes the same puzzle.
pub trait PuzzleSource {
    /// Grid configuration the rows were packed with.
    fn grid(&self) -> GridConfig;

    /// Number of puzzles in the dataset.
    fn len(&self) -> usize;

    /// True when the dataset holds no puzzles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Packed clue row `index`.
    fn clue_row(&self, index: usize) -> Result<&[u8], NonoError>;

    /// Row-major solution row `index`.
    fn solution_row(&self, index: usize) -> Result<&[u8], NonoError>;
}

/// Dense in-memory storage for one grid size, one byte per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArrays {
    grid: GridConfig,
    rows: usize,
    clues: Vec<u8>,
    solutions: Vec<u8>,
}

impl PackedArrays {
    /// Wraps flat row-major buffers.
    ///
    /// Both buffers must hold a whole number of rows of the configured widths
    /// and the same number of rows.
    pub fn new(grid: GridConfig, clues: Vec<u8>, solutions: Vec<u8>) -> Result<Self, NonoError> {
        let clue_width = grid.clue_width();
        let solution_width = grid.solution_width();
        if clues.len() % clue_width != 0 {
            return Err(NonoError::row_length(
                "clue",
                None,
                clue_width,
                clues.len() % clue_width,
            ));
        }
        if solutions.len() % solution_width != 0 {
            return Err(NonoError::row_length(
                "solution",
                None,
                solution_width,
                solutions.len() % solution_width,
            ));
        }
        let rows = clues.len() / clue_width;
        let solution_rows = solutions.len() / solution_width;
        if rows != solution_rows {
            return Err(NonoError::Shape(
                ErrorInfo::new("row-count-mismatch", "clue and solution arrays differ in length")
                    .with_context("clue_rows", rows)
                    .with_context("solution_rows", solution_rows)
                    .with_context("grid_size", grid.grid_size),
            ));
        }
        Ok(Self {
            grid,
            rows,
            clues,
            solutions,
        })
    }

    /// Builds storage from individual rows, checking every row length.
    pub fn from_rows(
        grid: GridConfig,
        clue_rows: &[Vec<u8>],
        solution_rows: &[Vec<u8>],
    ) -> Result<Self, NonoError> {
        let mut clues = Vec::with_capacity(clue_rows.len() * grid.clue_width());
        for (index, row) in clue_rows.iter().enumerate() {
            if row.len() != grid.clue_width() {
                return Err(NonoError::row_length(
                    "clue",
                    Some(index),
                    grid.clue_width(),
                    row.len(),
                ));
            }
            clues.extend_from_slice(row);
        }
        let mut solutions = Vec::with_capacity(solution_rows.len() * grid.solution_width());
        for (index, row) in solution_rows.iter().enumerate() {
            if row.len() != grid.solution_width() {
                return Err(NonoError::row_length(
                    "solution",
                    Some(index),
                    grid.solution_width(),
                    row.len(),
                ));
            }
            solutions.extend_from_slice(row);
        }
        Self::new(grid, clues, solutions)
    }

    fn out_of_range(&self, index: usize) -> NonoError {
        NonoError::Dataset(
            ErrorInfo::new("row-out-of-range", "row index beyond dataset length")
                .with_context("index", index)
                .with_context("rows", self.rows),
        )
    }
}

impl PuzzleSource for PackedArrays {
    fn grid(&self) -> GridConfig {
        self.grid
    }

    fn len(&self) -> usize {
        self.rows
    }

    fn clue_row(&self, index: usize) -> Result<&[u8], NonoError> {
        if index >= self.rows {
            return Err(self.out_of_range(index));
        }
        let width = self.grid.clue_width();
        Ok(&self.clues[index * width..(index + 1) * width])
    }

    fn solution_row(&self, index: usize) -> Result<&[u8], NonoError> {
        if index >= self.rows {
            return Err(self.out_of_range(index));
        }
        let width = self.grid.solution_width();
        Ok(&self.solutions[index * width..(index + 1) * width])
    }
}
