use nono_core::{ClueSet, ErrorInfo, GridConfig, NonoError, Puzzle, PuzzleClues};

use crate::canonical::render;
use crate::codec::ClueCodec;
use crate::dataset::PuzzleSource;

/// Converts solution cells into a string of `'0'`/`'1'` characters.
///
/// Cells other than 0 and 1 are shape errors.
pub fn solution_to_string(solution: &[u8]) -> Result<String, NonoError> {
    solution
        .iter()
        .enumerate()
        .map(|(cell, &value)| match value {
            0 => Ok('0'),
            1 => Ok('1'),
            other => Err(NonoError::Shape(
                ErrorInfo::new("solution-cell", "solution cells must be 0 or 1")
                    .with_context("cell", cell)
                    .with_context("value", other),
            )),
        })
        .collect()
}

/// Assembles a [`Puzzle`] from decoded clues and the raw solution row.
pub fn build_puzzle(
    index: usize,
    grid: GridConfig,
    rows: Vec<ClueSet>,
    columns: Vec<ClueSet>,
    solution: &[u8],
) -> Result<Puzzle, NonoError> {
    let size = grid.grid_size;
    if solution.len() != grid.solution_width() {
        return Err(NonoError::row_length(
            "solution",
            Some(index),
            grid.solution_width(),
            solution.len(),
        ));
    }
    if rows.len() != size || columns.len() != size {
        return Err(NonoError::Shape(
            ErrorInfo::new("clue-line-count", "expected one clue set per line")
                .with_context("index", index)
                .with_context("rows", rows.len())
                .with_context("columns", columns.len()),
        ));
    }
    let solution = solution_to_string(solution)
        .map_err(|err| NonoError::Shape(err.info().clone().with_context("index", index)))?;
    let canonical = render(&rows, &columns);
    Ok(Puzzle {
        index,
        height: size,
        width: size,
        clues: PuzzleClues {
            canonical,
            rows,
            columns,
        },
        solution,
    })
}

/// Re-reads row `index` of `source` and builds its record.
pub fn load_puzzle<S>(source: &S, index: usize) -> Result<Puzzle, NonoError>
where
    S: PuzzleSource + ?Sized,
{
    let grid = source.grid();
    let (rows, columns) = ClueCodec::new(grid).decode(source.clue_row(index)?)?;
    build_puzzle(index, grid, rows, columns, source.solution_row(index)?)
}
