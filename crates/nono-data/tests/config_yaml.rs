mod common;

use std::fs;
use std::path::PathBuf;

use common::{bits, write_fixture_pair, write_npy, FIXTURE_SOLUTION};
use nono_core::NonoError;
use nono_data::config::{from_yaml_slice, to_yaml_string};
use nono_data::{load_config, load_dataset, DatasetEntry, ExtractConfig};
use nono_extract::{extract, PuzzleSource};
use tempfile::tempdir;

#[test]
fn empty_mapping_yields_reference_setup() {
    let config: ExtractConfig = from_yaml_slice(b"{}").unwrap();
    assert_eq!(config, ExtractConfig::default());
    assert_eq!(config.seed, 42);
    assert_eq!(config.count, 5);
    assert_eq!(config.grid_table().unwrap().sizes(), vec![5, 10, 15]);
    let ten = config.dataset(10).unwrap();
    assert_eq!(ten.max_clue_len, 5);
    assert_eq!(ten.clues, PathBuf::from("10x10/x_train_dataset.npz"));
    assert_eq!(ten.solutions, PathBuf::from("10x10/y_train_dataset.npz"));
    assert_eq!(ten.array, "arr_0");
}

#[test]
fn partial_documents_override_only_named_fields() {
    let yaml = b"seed: 7\ncriteria:\n  min_groups: 3\nsampler:\n  candidate_pool: 1000\n";
    let config: ExtractConfig = from_yaml_slice(yaml).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.count, 5);
    assert_eq!(config.criteria.min_groups, 3);
    assert_eq!(config.criteria.min_fill_ratio, 0.30);
    assert_eq!(config.sampler.candidate_pool, 1000);
    assert_eq!(config.sampler.overcollect_factor, 10);
    assert_eq!(config.datasets.len(), 3);
}

#[test]
fn yaml_output_parses_back() {
    let config = ExtractConfig::default();
    let text = to_yaml_string(&config).unwrap();
    assert!(text.contains("5x5/train_combined.npz"));
    let parsed: ExtractConfig = from_yaml_slice(text.as_bytes()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn load_config_reports_read_and_parse_failures() {
    let dir = tempdir().unwrap();
    let missing = load_config(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(missing, NonoError::Config(_)));
    assert_eq!(missing.info().code, "config-read");

    let broken = dir.path().join("broken.yaml");
    fs::write(&broken, "seed: [not, a, number]\n").unwrap();
    let err = load_config(&broken).unwrap_err();
    assert!(matches!(err, NonoError::Config(_)));
    assert_eq!(err.info().code, "config-parse");

    let blank = dir.path().join("blank.yaml");
    fs::write(&blank, "\n").unwrap();
    assert_eq!(load_config(&blank).unwrap(), ExtractConfig::default());
}

#[test]
fn zero_count_and_unknown_sizes_are_config_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.yaml");
    fs::write(&path, "count: 0\n").unwrap();
    let err = load_config(&path).unwrap_err();
    assert_eq!(err.info().code, "requested-count");

    let err = ExtractConfig::default().dataset(7).unwrap_err();
    assert!(matches!(err, NonoError::Config(_)));
    assert_eq!(err.info().context["supported"], "5,10,15");
}

#[test]
fn duplicate_dataset_sizes_fail_validation() {
    let yaml = b"datasets:\n  - {grid_size: 5, max_clue_len: 3, clues: a.npy, solutions: b.npy}\n  - {grid_size: 5, max_clue_len: 3, clues: c.npy, solutions: d.npy}\n";
    let config: ExtractConfig = from_yaml_slice(yaml).unwrap();
    assert!(matches!(config.validate(), Err(NonoError::Config(_))));
}

fn fixture_entry() -> DatasetEntry {
    DatasetEntry {
        grid_size: 5,
        max_clue_len: 3,
        clues: PathBuf::from("clues.npy"),
        solutions: PathBuf::from("solutions.npy"),
        array: "arr_0".to_string(),
    }
}

#[test]
fn load_dataset_pairs_clues_with_solutions() {
    let dir = tempdir().unwrap();
    write_fixture_pair(dir.path(), "clues.npy", "solutions.npy", 12);

    let dataset = load_dataset(&fixture_entry(), dir.path()).unwrap();
    assert_eq!(dataset.len(), 12);
    assert_eq!(dataset.solution_row(11).unwrap(), &bits(FIXTURE_SOLUTION)[..]);

    let config = ExtractConfig {
        count: 3,
        datasets: vec![fixture_entry()],
        ..ExtractConfig::default()
    };
    let extraction = extract(&dataset, &config.sampler(), &config.request()).unwrap();
    assert_eq!(extraction.puzzles.len(), 3);
    assert!(extraction
        .puzzles
        .iter()
        .all(|puzzle| puzzle.solution == FIXTURE_SOLUTION));
}

#[test]
fn load_dataset_rejects_wrong_widths() {
    let dir = tempdir().unwrap();
    write_fixture_pair(dir.path(), "clues.npy", "solutions.npy", 2);
    write_npy(&dir.path().join("narrow.npy"), &[2, 24], &[0u8; 48]);

    let entry = DatasetEntry {
        solutions: PathBuf::from("narrow.npy"),
        ..fixture_entry()
    };
    let err = load_dataset(&entry, dir.path()).unwrap_err();
    assert!(matches!(err, NonoError::Shape(_)));
    assert_eq!(err.info().code, "solution-row-shape");
    assert_eq!(err.info().context["expected"], "25");
    assert_eq!(err.info().context["actual"], "24");
}

#[test]
fn load_dataset_rejects_mismatched_row_counts() {
    let dir = tempdir().unwrap();
    write_fixture_pair(dir.path(), "clues.npy", "unused.npy", 3);
    write_fixture_pair(dir.path(), "unused_clues.npy", "solutions.npy", 2);
    let err = load_dataset(&fixture_entry(), dir.path()).unwrap_err();
    assert_eq!(err.info().code, "row-count-mismatch");
}
