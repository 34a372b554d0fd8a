mod common;

use common::{bits, clue_sets, grid5, FIXTURE_SOLUTION};
use nono_core::Puzzle;
use nono_extract::render::{text, typescript, to_json_listing};
use nono_extract::{build_puzzle, OutputFormat};

fn fixture_puzzle() -> Puzzle {
    build_puzzle(
        0,
        grid5(),
        clue_sets(&[&[3, 1], &[1, 2], &[2, 1], &[3, 1], &[2, 1]]),
        clue_sets(&[&[1, 2], &[5], &[1, 2], &[2], &[2, 2]]),
        &bits(FIXTURE_SOLUTION),
    )
    .unwrap()
}

const EXPECTED_MODULE: &str = r#"import { codeBlock } from "common-tags";
import type { Puzzle } from "./types";

export const PUZZLES_5X5: Puzzle[] = [
  {
    clues: {
      canonical: codeBlock`
        Row clues:
          Row 1: 3 1
          Row 2: 1 2
          Row 3: 2 1
          Row 4: 3 1
          Row 5: 2 1
        
        Column clues:
          Column 1: 1 2
          Column 2: 5
          Column 3: 1 2
          Column 4: 2
          Column 5: 2 2
      `,
    },
    height: 5,
    width: 5,
    solution: "1110101011110101110101101",
  },
];
"#;

#[test]
fn typescript_module_matches_fixture_layout() {
    let module = typescript::render_module(5, &[fixture_puzzle()]);
    assert_eq!(module, EXPECTED_MODULE);
}

#[test]
fn empty_listing_is_still_a_module() {
    let module = typescript::render_module(10, &[]);
    assert!(module.contains("export const PUZZLES_10X10: Puzzle[] = [\n];\n"));
}

#[test]
fn template_literal_escaping() {
    assert_eq!(typescript::escape_template_literal("a`b"), "a\\`b");
    assert_eq!(typescript::escape_template_literal("${x}"), "\\${x}");
    assert_eq!(typescript::escape_template_literal("c\\d"), "c\\\\d");
    assert_eq!(typescript::escape_template_literal("Row 1: 3 1"), "Row 1: 3 1");
}

#[test]
fn index_module_reexports_every_size() {
    let index = typescript::render_index(&[5, 10, 15]);
    let expected = r#"export { PUZZLES_5X5 } from "./puzzles-5x5";
export { PUZZLES_10X10 } from "./puzzles-10x10";
export { PUZZLES_15X15 } from "./puzzles-15x15";
export type { Puzzle } from "./types";

import { PUZZLES_5X5 } from "./puzzles-5x5";
import { PUZZLES_10X10 } from "./puzzles-10x10";
import { PUZZLES_15X15 } from "./puzzles-15x15";

export const PUZZLES = [...PUZZLES_5X5, ...PUZZLES_10X10, ...PUZZLES_15X15];
"#;
    assert_eq!(index, expected);
}

#[test]
fn json_listing_parses_back() {
    let puzzles = vec![fixture_puzzle()];
    let json = to_json_listing(&puzzles).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["index"], 0);
    assert_eq!(value[0]["clues"]["columns"][1], serde_json::json!([5]));
    let back: Vec<Puzzle> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, puzzles);
}

#[test]
fn text_listing_draws_solution() {
    let puzzle = fixture_puzzle();
    assert_eq!(
        text::solution_picture(&puzzle).lines().next(),
        Some("  █ █ █ · █")
    );
    let rendered = text::render_puzzle(&puzzle);
    assert!(rendered.starts_with("Puzzle #0 (5x5, fill 68%)\nRow clues:"));
    assert!(rendered.contains("\n\nSolution:\n"));
}

#[test]
fn output_formats_name_their_files() {
    assert_eq!(OutputFormat::TypeScript.file_name(5), "puzzles-5x5.ts");
    assert_eq!(OutputFormat::Json.file_name(10), "puzzles-10x10.json");
    assert_eq!(OutputFormat::Text.file_name(15), "puzzles-15x15.txt");
    let rendered = OutputFormat::TypeScript.render(5, &[fixture_puzzle()]).unwrap();
    assert_eq!(rendered, EXPECTED_MODULE);
}
