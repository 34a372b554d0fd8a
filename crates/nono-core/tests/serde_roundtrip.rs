use nono_core::{ClueSet, ExtractionProvenance, Puzzle, PuzzleClues};

fn clues(runs: &[&[u32]]) -> Vec<ClueSet> {
    runs.iter()
        .map(|line| ClueSet::new(line.to_vec()).unwrap())
        .collect()
}

fn sample_puzzle() -> Puzzle {
    Puzzle {
        index: 17,
        height: 2,
        width: 2,
        clues: PuzzleClues {
            canonical: "Row clues:\n  Row 1: 2\n  Row 2: 1\n\nColumn clues:\n  Column 1: 2\n  Column 2: 1"
                .to_string(),
            rows: clues(&[&[2], &[1]]),
            columns: clues(&[&[2], &[1]]),
        },
        solution: "1110".to_string(),
    }
}

#[test]
fn puzzle_roundtrip_preserves_layout() {
    let puzzle = sample_puzzle();
    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["clues"]["rows"], serde_json::json!([[2], [1]]));
    assert_eq!(json["solution"], "1110");
    let back: Puzzle = serde_json::from_value(json).unwrap();
    assert_eq!(back, puzzle);
}

#[test]
fn zero_runs_are_rejected_on_deserialize() {
    let err = serde_json::from_str::<ClueSet>("[1, 0, 2]");
    assert!(err.is_err());
    assert!(ClueSet::new(vec![0]).is_err());
}

#[test]
fn clue_set_display_uses_dash_for_empty_lines() {
    assert_eq!(ClueSet::empty().to_string(), "-");
    assert_eq!(ClueSet::new(vec![3, 1, 2]).unwrap().to_string(), "3 1 2");
}

#[test]
fn puzzle_helpers_split_solution() {
    let puzzle = sample_puzzle();
    let rows: Vec<&str> = puzzle.solution_rows().collect();
    assert_eq!(rows, vec!["11", "10"]);
    assert!((puzzle.fill_ratio() - 0.75).abs() < 1e-12);
}

#[test]
fn provenance_defaults_roundtrip() {
    let provenance = ExtractionProvenance {
        seed: 42,
        grid_size: 5,
        max_clue_len: 3,
        dataset_rows: 40,
        requested: 5,
        output_hash: "abc".into(),
        ..ExtractionProvenance::default()
    };
    let json = serde_json::to_string(&provenance).unwrap();
    let back: ExtractionProvenance = serde_json::from_str(&json).unwrap();
    assert_eq!(back, provenance);
}
