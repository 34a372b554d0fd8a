#![allow(dead_code)]

use nono_core::{ClueSet, GridConfig, NonoError, RngHandle};
use nono_extract::{ClueCodec, PackedArrays, PuzzleSource};
use rand::Rng;

/// Solution of the first 5x5 fixture puzzle, row-major.
pub const FIXTURE_SOLUTION: &str = "1110101011110101110101101";

pub fn grid5() -> GridConfig {
    GridConfig::new(5, 3)
}

pub fn bits(text: &str) -> Vec<u8> {
    text.bytes().map(|cell| u8::from(cell == b'1')).collect()
}

pub fn clue_sets(lines: &[&[u32]]) -> Vec<ClueSet> {
    lines
        .iter()
        .map(|line| ClueSet::new(line.to_vec()).expect("positive runs"))
        .collect()
}

/// Packs solutions into a dataset whose clues are derived from the solutions.
pub fn dataset_from_solutions(grid: GridConfig, solutions: &[Vec<u8>]) -> PackedArrays {
    let codec = ClueCodec::new(grid);
    let clue_rows: Vec<Vec<u8>> = solutions
        .iter()
        .map(|solution| {
            let (rows, columns) = codec.clues_from_solution(solution).expect("solution shape");
            codec.encode(&rows, &columns).expect("encode clues")
        })
        .collect();
    PackedArrays::from_rows(grid, &clue_rows, solutions).expect("packed arrays")
}

/// Uniformly random 5x5 solutions; most of them pass the quality criteria.
pub fn random_solutions(count: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = RngHandle::from_seed(seed);
    (0..count)
        .map(|_| (0..25).map(|_| u8::from(rng.gen_bool(0.5))).collect())
        .collect()
}

/// Source of `len` identical rows that never materialises them.
pub struct RepeatingSource {
    pub grid: GridConfig,
    pub len: usize,
    pub clues: Vec<u8>,
    pub solution: Vec<u8>,
}

impl RepeatingSource {
    pub fn fixture(len: usize) -> Self {
        let grid = grid5();
        let codec = ClueCodec::new(grid);
        let solution = bits(FIXTURE_SOLUTION);
        let (rows, columns) = codec.clues_from_solution(&solution).unwrap();
        let clues = codec.encode(&rows, &columns).unwrap();
        Self {
            grid,
            len,
            clues,
            solution,
        }
    }
}

impl PuzzleSource for RepeatingSource {
    fn grid(&self) -> GridConfig {
        self.grid
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clue_row(&self, index: usize) -> Result<&[u8], NonoError> {
        assert!(index < self.len, "index {index} out of range");
        Ok(&self.clues)
    }

    fn solution_row(&self, index: usize) -> Result<&[u8], NonoError> {
        assert!(index < self.len, "index {index} out of range");
        Ok(&self.solution)
    }
}
