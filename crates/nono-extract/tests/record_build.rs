mod common;

use common::{bits, clue_sets, dataset_from_solutions, grid5, FIXTURE_SOLUTION};
use nono_core::NonoError;
use nono_extract::{build_puzzle, load_puzzle, solution_to_string, PackedArrays};

fn fixture_clues() -> (Vec<nono_core::ClueSet>, Vec<nono_core::ClueSet>) {
    (
        clue_sets(&[&[3, 1], &[1, 2], &[2, 1], &[3, 1], &[2, 1]]),
        clue_sets(&[&[1, 2], &[5], &[1, 2], &[2], &[2, 2]]),
    )
}

#[test]
fn builds_record_with_metadata() {
    let (rows, columns) = fixture_clues();
    let puzzle = build_puzzle(3, grid5(), rows.clone(), columns.clone(), &bits(FIXTURE_SOLUTION))
        .unwrap();
    assert_eq!(puzzle.index, 3);
    assert_eq!((puzzle.height, puzzle.width), (5, 5));
    assert_eq!(puzzle.solution, FIXTURE_SOLUTION);
    assert_eq!(puzzle.clues.rows, rows);
    assert_eq!(puzzle.clues.columns, columns);
}

#[test]
fn non_binary_cells_are_shape_errors() {
    assert_eq!(solution_to_string(&[0, 1, 1]).unwrap(), "011");
    let err = solution_to_string(&[0, 2]).unwrap_err();
    assert_eq!(err.info().code, "solution-cell");
    assert_eq!(err.info().context["cell"], "1");

    let (rows, columns) = fixture_clues();
    let mut solution = bits(FIXTURE_SOLUTION);
    solution[4] = 7;
    let err = build_puzzle(9, grid5(), rows, columns, &solution).unwrap_err();
    assert!(matches!(err, NonoError::Shape(_)));
    assert_eq!(err.info().context["index"], "9");
}

#[test]
fn wrong_solution_length_is_rejected() {
    let (rows, columns) = fixture_clues();
    let err = build_puzzle(0, grid5(), rows, columns, &[1, 0, 1]).unwrap_err();
    assert_eq!(err.info().code, "solution-row-shape");
}

#[test]
fn load_puzzle_rereads_dataset_row() {
    let dataset = dataset_from_solutions(grid5(), &[vec![0; 25], bits(FIXTURE_SOLUTION)]);
    let puzzle = load_puzzle(&dataset, 1).unwrap();
    assert_eq!(puzzle.solution, FIXTURE_SOLUTION);
    assert_eq!(puzzle.clues.rows, fixture_clues().0);

    let err = load_puzzle(&dataset, 2).unwrap_err();
    assert!(matches!(err, NonoError::Dataset(_)));
}

#[test]
fn packed_arrays_check_shapes() {
    let err = PackedArrays::new(grid5(), vec![0; 60], vec![0; 25]).unwrap_err();
    assert_eq!(err.info().code, "row-count-mismatch");

    let err = PackedArrays::new(grid5(), vec![0; 31], vec![0; 25]).unwrap_err();
    assert_eq!(err.info().code, "clue-row-shape");

    let err = PackedArrays::from_rows(grid5(), &[vec![0; 30]], &[vec![0; 24]]).unwrap_err();
    assert_eq!(err.info().code, "solution-row-shape");
    assert_eq!(err.info().context["index"], "0");
}
