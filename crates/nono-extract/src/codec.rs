use nono_core::{ClueSet, ErrorInfo, GridConfig, NonoError};

/// Row clues followed by column clues, as decoded from one packed row.
pub type DecodedClues = (Vec<ClueSet>, Vec<ClueSet>);

/// Decoder for zero-padded clue rows of a single grid size.
///
/// A packed row holds `grid_size` row slots followed by `grid_size` column
/// slots, each `max_clue_len` wide. Within a slot the positive values are the
/// clue groups in reading order and zeros are padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueCodec {
    grid: GridConfig,
}

impl ClueCodec {
    /// Creates a codec for the provided grid configuration.
    pub fn new(grid: GridConfig) -> Self {
        Self { grid }
    }

    /// Grid configuration the codec was built for.
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Splits a packed clue row into row and column clue sets.
    ///
    /// The row must be exactly [`GridConfig::clue_width`] long.
    pub fn decode<T>(&self, raw: &[T]) -> Result<DecodedClues, NonoError>
    where
        T: Copy + Into<u32>,
    {
        let expected = self.grid.clue_width();
        if raw.len() != expected {
            return Err(NonoError::row_length("clue", None, expected, raw.len()));
        }
        let (row_block, column_block) = raw.split_at(expected / 2);
        Ok((self.decode_block(row_block), self.decode_block(column_block)))
    }

    fn decode_block<T>(&self, block: &[T]) -> Vec<ClueSet>
    where
        T: Copy + Into<u32>,
    {
        block
            .chunks_exact(self.grid.max_clue_len)
            .map(|slot| {
                let runs = slot
                    .iter()
                    .map(|&value| value.into())
                    .filter(|&value| value > 0)
                    .collect();
                // Zeros were filtered, so construction cannot fail.
                ClueSet::new(runs).unwrap_or_default()
            })
            .collect()
    }

    /// Packs row and column clue sets back into a zero-padded row.
    pub fn encode(&self, rows: &[ClueSet], columns: &[ClueSet]) -> Result<Vec<u8>, NonoError> {
        let size = self.grid.grid_size;
        if rows.len() != size || columns.len() != size {
            return Err(NonoError::Shape(
                ErrorInfo::new("clue-line-count", "expected one clue set per line")
                    .with_context("grid_size", size)
                    .with_context("rows", rows.len())
                    .with_context("columns", columns.len()),
            ));
        }
        let mut packed = Vec::with_capacity(self.grid.clue_width());
        for (line, clues) in rows.iter().chain(columns).enumerate() {
            if clues.len() > self.grid.max_clue_len {
                return Err(NonoError::Shape(
                    ErrorInfo::new("clue-slot-overflow", "line has more groups than slots")
                        .with_context("line", line)
                        .with_context("groups", clues.len())
                        .with_context("max_clue_len", self.grid.max_clue_len),
                ));
            }
            for run in clues.iter() {
                let value = u8::try_from(run).map_err(|_| {
                    NonoError::Shape(
                        ErrorInfo::new("clue-value-range", "clue group does not fit in u8")
                            .with_context("line", line)
                            .with_context("value", run),
                    )
                })?;
                packed.push(value);
            }
            packed.resize(packed.len() + self.grid.max_clue_len - clues.len(), 0);
        }
        Ok(packed)
    }

    /// Derives the clues of a row-major solution grid.
    pub fn clues_from_solution(&self, solution: &[u8]) -> Result<DecodedClues, NonoError> {
        let size = self.grid.grid_size;
        if solution.len() != self.grid.solution_width() {
            return Err(NonoError::row_length(
                "solution",
                None,
                self.grid.solution_width(),
                solution.len(),
            ));
        }
        let rows = solution.chunks_exact(size).map(line_runs).collect();
        let columns = (0..size)
            .map(|column| {
                let cells: Vec<u8> = (0..size).map(|row| solution[row * size + column]).collect();
                line_runs(&cells)
            })
            .collect();
        Ok((rows, columns))
    }
}

/// Computes the run lengths of non-zero cells in one line.
pub fn line_runs(cells: &[u8]) -> ClueSet {
    let mut runs = Vec::new();
    let mut current = 0u32;
    for &cell in cells {
        if cell != 0 {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    ClueSet::new(runs).unwrap_or_default()
}
