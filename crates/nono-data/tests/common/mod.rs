#![allow(dead_code)]

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use nono_core::GridConfig;
use nono_extract::ClueCodec;
use npyz::WriterBuilder;

/// Solution of the 5x5 fixture puzzle, row-major.
pub const FIXTURE_SOLUTION: &str = "1110101011110101110101101";

pub fn bits(text: &str) -> Vec<u8> {
    text.bytes().map(|cell| u8::from(cell == b'1')).collect()
}

/// Writes `values` as an `.npy` array with the provided shape.
pub fn write_npy<T>(path: &Path, shape: &[u64], values: &[T])
where
    T: npyz::AutoSerialize + Copy,
{
    let file = File::create(path).unwrap();
    let mut writer = npyz::WriteOptions::<T>::new()
        .default_dtype()
        .shape(shape)
        .writer(BufWriter::new(file))
        .begin_nd()
        .unwrap();
    writer.extend(values.iter().copied()).unwrap();
    writer.finish().unwrap();
}

/// Packed clue row of the fixture puzzle, as `i64` the way numpy stores it.
pub fn fixture_clues() -> Vec<i64> {
    let codec = ClueCodec::new(GridConfig::new(5, 3));
    let (rows, columns) = codec.clues_from_solution(&bits(FIXTURE_SOLUTION)).unwrap();
    codec
        .encode(&rows, &columns)
        .unwrap()
        .into_iter()
        .map(i64::from)
        .collect()
}

/// Writes `rows` copies of the fixture puzzle as a 5x5 clue/solution pair.
pub fn write_fixture_pair(dir: &Path, clue_name: &str, solution_name: &str, rows: usize) {
    let clues: Vec<i64> = (0..rows).flat_map(|_| fixture_clues()).collect();
    let solutions: Vec<i64> = (0..rows)
        .flat_map(|_| bits(FIXTURE_SOLUTION))
        .map(i64::from)
        .collect();
    write_npy(&dir.join(clue_name), &[rows as u64, 30], &clues);
    write_npy(&dir.join(solution_name), &[rows as u64, 25], &solutions);
}
