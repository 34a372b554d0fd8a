use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use log::warn;
use nono_core::{ErrorInfo, GridConfig, GridTable, NonoError};
use nono_extract::ClueCodec;
use walkdir::WalkDir;

use crate::npz::{format_shape, load_all, NdArray};

const SAMPLE_ROWS: usize = 5;
const UNIQUE_LIMIT: usize = 20;
const RAW_ROW_LIMIT: usize = 100;
const RAW_EDGE: usize = 50;

/// What the rows of an array hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayRole {
    /// Packed clue rows.
    Clues,
    /// Row-major binary solutions.
    Solutions,
}

/// Role suggested by the file name, following the dataset naming scheme
/// (`x_*`/`*train*` hold clues, `y_*`/`*target*` hold solutions).
pub fn role_hint(file_name: &str) -> Option<ArrayRole> {
    let lower = file_name.to_lowercase();
    if lower.contains("y_") || lower.contains("target") {
        Some(ArrayRole::Solutions)
    } else if lower.contains("x_") || lower.contains("train") {
        Some(ArrayRole::Clues)
    } else {
        None
    }
}

/// Matches an array against the grid table by row width.
///
/// The file name decides the role when it carries a hint. Otherwise a width
/// that fits both roles (10x10 rows are 100 wide either way) is read as
/// solutions when every value is 0 or 1.
pub fn detect_layout(
    array: &NdArray<i64>,
    file_name: &str,
    table: &GridTable,
) -> Option<(ArrayRole, GridConfig)> {
    let width = match array.ndim() {
        0 => return None,
        1 => array.rows(),
        _ => array.row_width(),
    };
    match role_hint(file_name) {
        Some(ArrayRole::Solutions) => table
            .by_solution_width(width)
            .map(|grid| (ArrayRole::Solutions, grid)),
        Some(ArrayRole::Clues) => table
            .by_clue_width(width)
            .map(|grid| (ArrayRole::Clues, grid)),
        None => {
            let binary = array.data.iter().all(|&value| value == 0 || value == 1);
            match (table.by_clue_width(width), table.by_solution_width(width)) {
                (_, Some(grid)) if binary => Some((ArrayRole::Solutions, grid)),
                (Some(grid), _) => Some((ArrayRole::Clues, grid)),
                (None, Some(grid)) => Some((ArrayRole::Solutions, grid)),
                (None, None) => None,
            }
        }
    }
}

/// Formats an integer with `,` thousands separators.
pub fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Numpy's name for a type string, e.g. `<i8` is `int64`.
pub fn dtype_name(type_str: &str) -> String {
    let kind = type_str.chars().nth(1);
    let bits = type_str
        .get(2..)
        .and_then(|size| size.parse::<u32>().ok())
        .map(|bytes| bytes * 8);
    match (kind, bits) {
        (Some('b'), _) => "bool".to_string(),
        (Some('u'), Some(bits)) => format!("uint{bits}"),
        (Some('i'), Some(bits)) => format!("int{bits}"),
        (Some('f'), Some(bits)) => format!("float{bits}"),
        _ => type_str.to_string(),
    }
}

fn numpy_list(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", parts.join(" "))
}

/// Indices of up to five rows spread evenly over the rows that hold any
/// non-zero value, or the leading rows when every row is zero.
pub fn sample_indices(array: &NdArray<i64>) -> Vec<usize> {
    let rows = array.rows();
    let wanted = SAMPLE_ROWS.min(rows);
    let non_zero: Vec<usize> = (0..rows)
        .filter(|&idx| {
            array
                .row(idx)
                .map_or(false, |row| row.iter().any(|&value| value != 0))
        })
        .collect();
    if non_zero.is_empty() {
        return (0..wanted).collect();
    }
    if wanted <= 1 {
        return vec![non_zero[0]];
    }
    let last = non_zero.len() - 1;
    (0..wanted)
        .map(|step| non_zero[step * last / (wanted - 1)])
        .collect()
}

/// Draws a solution row as a grid of `█` and `·`.
pub fn grid_picture(cells: &[i64], grid_size: usize) -> String {
    if grid_size == 0 || cells.len() != grid_size * grid_size {
        return format!(
            "  Cannot format as {grid_size}x{grid_size} grid (got {} elements)",
            cells.len()
        );
    }
    cells
        .chunks_exact(grid_size)
        .map(|line| {
            let drawn: Vec<&str> = line
                .iter()
                .map(|&cell| if cell != 0 { "█" } else { "·" })
                .collect();
            format!("  {}", drawn.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists the clues of one packed row with 0-indexed labels.
///
/// Values below 1 count as padding.
pub fn clue_listing(row: &[i64], grid: GridConfig) -> String {
    let runs: Vec<u32> = row
        .iter()
        .map(|&value| u32::try_from(value.max(0)).unwrap_or(u32::MAX))
        .collect();
    let (rows, columns) = match ClueCodec::new(grid).decode(&runs) {
        Ok(decoded) => decoded,
        Err(_) => {
            return format!(
                "  Cannot parse clues (expected {}, got {})",
                grid.clue_width(),
                row.len()
            )
        }
    };
    let mut text = String::from("  Row clues:");
    for (idx, clues) in rows.iter().enumerate() {
        let _ = write!(text, "\n    Row {idx}: {clues}");
    }
    text.push_str("\n  Column clues:");
    for (idx, clues) in columns.iter().enumerate() {
        let _ = write!(text, "\n    Col {idx}: {clues}");
    }
    text
}

/// Describes one array: shape, value statistics, detected layout and samples.
pub fn describe_array(
    name: &str,
    array: &NdArray<i64>,
    file_name: &str,
    table: &GridTable,
) -> String {
    let mut lines = vec![
        format!("## Array: '{name}'"),
        format!("- Shape: {}", format_shape(&array.shape)),
        format!("- Dtype: {}", dtype_name(&array.dtype)),
    ];
    if array.ndim() == 0 {
        let value = array.data.first().copied().unwrap_or_default();
        lines.push(format!("- Value: {value}"));
        return lines.join("\n");
    }

    lines.push(format!("- Total elements: {}", with_thousands(array.data.len())));
    match (array.data.iter().min(), array.data.iter().max()) {
        (Some(min), Some(max)) => lines.push(format!("- Value range: [{min}, {max}]")),
        _ => lines.push("- Value range: empty".to_string()),
    }
    let unique: BTreeSet<i64> = array.data.iter().copied().collect();
    if unique.len() <= UNIQUE_LIMIT {
        let values: Vec<i64> = unique.into_iter().collect();
        lines.push(format!("- Unique values: {}", numpy_list(&values)));
    } else {
        lines.push(format!("- Unique values count: {}", unique.len()));
    }

    let layout = detect_layout(array, file_name, table);
    if let Some((role, grid)) = layout {
        let role = match role {
            ArrayRole::Clues => "clues",
            ArrayRole::Solutions => "solutions",
        };
        lines.push(format!(
            "- Detected grid size: {0}x{0} ({role})",
            grid.grid_size
        ));
    }

    if array.ndim() >= 2 {
        let indices = sample_indices(array);
        lines.push(String::new());
        lines.push(format!("### Sample rows ({} examples):", indices.len()));
        for idx in indices {
            let row = array.row(idx).unwrap_or_default();
            lines.push(String::new());
            lines.push(format!("#### Row {}:", with_thousands(idx)));
            match layout {
                Some((ArrayRole::Solutions, grid)) => {
                    lines.push(grid_picture(row, grid.grid_size))
                }
                Some((ArrayRole::Clues, grid)) => lines.push(clue_listing(row, grid)),
                None if row.len() <= RAW_ROW_LIMIT => lines.push(format!("  {}", numpy_list(row))),
                None => {
                    lines.push(format!("  First 50: {}", numpy_list(&row[..RAW_EDGE])));
                    lines.push(format!(
                        "  Last 50:  {}",
                        numpy_list(&row[row.len() - RAW_EDGE..])
                    ));
                }
            }
        }
    }
    lines.join("\n")
}

/// Builds the full report for one `.npz` or `.npy` file.
///
/// Load failures are written into the report instead of aborting, so one
/// corrupt archive does not hide the others.
pub fn inspect_file(path: &Path, table: &GridTable) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let kind = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| "ARRAY".to_string());
    let mut lines = vec![
        format!("# {kind} File: {file_name}"),
        format!("Path: {}", path.display()),
        String::new(),
    ];
    match load_all(path) {
        Ok(arrays) => {
            let names: Vec<String> = arrays.iter().map(|(name, _)| format!("'{name}'")).collect();
            lines.push(format!(
                "Contains {} array(s): [{}]",
                arrays.len(),
                names.join(", ")
            ));
            lines.push(String::new());
            for (name, array) in &arrays {
                lines.push(describe_array(name, array, &file_name, table));
                lines.push(String::new());
            }
        }
        Err(err) => {
            warn!("{}: {}", path.display(), err);
            lines.push(format!("Error loading file: {err}"));
        }
    }
    lines.join("\n")
}

/// Every `.npz` and `.npy` file below `dir`, sorted by path.
pub fn find_array_files(dir: &Path) -> Result<Vec<PathBuf>, NonoError> {
    if !dir.is_dir() {
        return Err(NonoError::Dataset(
            ErrorInfo::new("data-dir", "data directory does not exist")
                .with_context("path", dir.display()),
        ));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension().map_or(false, |ext| {
                ext.eq_ignore_ascii_case("npz") || ext.eq_ignore_ascii_case("npy")
            })
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Path of the text report written next to `array_file`.
pub fn report_path(array_file: &Path) -> PathBuf {
    array_file.with_extension("txt")
}
