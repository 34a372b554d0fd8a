use nono_core::Puzzle;

const FILLED: char = '█';
const EMPTY: char = '·';

/// Draws a solution as rows of `█` and `·` separated by spaces.
pub fn solution_picture(puzzle: &Puzzle) -> String {
    puzzle
        .solution_rows()
        .map(|row| {
            let cells = row
                .chars()
                .map(|cell| if cell == '1' { FILLED } else { EMPTY })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            format!("  {cells}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one puzzle with its clues and solution picture.
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    format!(
        "Puzzle #{} ({}x{}, fill {:.0}%)\n{}\n\nSolution:\n{}\n",
        puzzle.index,
        puzzle.height,
        puzzle.width,
        puzzle.fill_ratio() * 100.0,
        puzzle.clues.canonical,
        solution_picture(puzzle)
    )
}

/// Renders every puzzle, separated by blank lines.
pub fn render_listing(puzzles: &[Puzzle]) -> String {
    puzzles
        .iter()
        .map(render_puzzle)
        .collect::<Vec<_>>()
        .join("\n")
}
