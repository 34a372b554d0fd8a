use nono_core::Puzzle;

/// Name of the exported listing constant for `grid_size`.
pub fn listing_name(grid_size: usize) -> String {
    format!("PUZZLES_{grid_size}X{grid_size}")
}

/// Escapes text for use inside a template literal.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Renders a module exporting the puzzles of one grid size.
///
/// Canonical text is embedded through `codeBlock` template literals, which
/// strip the common indentation again on the consumer side.
pub fn render_module(grid_size: usize, puzzles: &[Puzzle]) -> String {
    let mut lines = vec![
        r#"import { codeBlock } from "common-tags";"#.to_string(),
        r#"import type { Puzzle } from "./types";"#.to_string(),
        String::new(),
        format!("export const {}: Puzzle[] = [", listing_name(grid_size)),
    ];
    for puzzle in puzzles {
        lines.push("  {".into());
        lines.push("    clues: {".into());
        lines.push("      canonical: codeBlock`".into());
        for line in escape_template_literal(&puzzle.clues.canonical).split('\n') {
            lines.push(format!("        {line}"));
        }
        lines.push("      `,".into());
        lines.push("    },".into());
        lines.push(format!("    height: {},", puzzle.height));
        lines.push(format!("    width: {},", puzzle.width));
        lines.push(format!("    solution: \"{}\",", puzzle.solution));
        lines.push("  },".into());
    }
    lines.push("];".into());
    lines.push(String::new());
    lines.join("\n")
}

/// Renders the index module re-exporting every per-size listing.
pub fn render_index(grid_sizes: &[usize]) -> String {
    let mut lines = Vec::new();
    for &size in grid_sizes {
        lines.push(format!(
            "export {{ {} }} from \"./puzzles-{size}x{size}\";",
            listing_name(size)
        ));
    }
    lines.push(r#"export type { Puzzle } from "./types";"#.to_string());
    lines.push(String::new());
    for &size in grid_sizes {
        lines.push(format!(
            "import {{ {} }} from \"./puzzles-{size}x{size}\";",
            listing_name(size)
        ));
    }
    lines.push(String::new());
    let spread = grid_sizes
        .iter()
        .map(|&size| format!("...{}", listing_name(size)))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("export const PUZZLES = [{spread}];"));
    lines.push(String::new());
    lines.join("\n")
}
