use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use nono_core::{ErrorInfo, NonoError};
use npyz::npz::NpzArchive;
use npyz::{DType, NpyFile};

/// Member name numpy assigns to the first positional array of `savez`.
pub const DEFAULT_MEMBER: &str = "arr_0";

/// A dense array read from disk.
///
/// Dataset loading reads values as bytes (`NdArray<u8>`); inspection keeps
/// them as `i64` so out-of-range values can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdArray<T = u8> {
    /// Dimensions as stored in the file header.
    pub shape: Vec<u64>,
    /// Numpy type string of the stored values, e.g. `<i8` or `|u1`.
    pub dtype: String,
    /// Row-major values.
    pub data: Vec<T>,
}

impl<T> NdArray<T> {
    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the leading axis, or 1 for a scalar.
    pub fn rows(&self) -> usize {
        self.shape.first().map_or(1, |&rows| rows as usize)
    }

    /// Number of values in one row along the leading axis.
    pub fn row_width(&self) -> usize {
        self.shape.iter().skip(1).product::<u64>() as usize
    }

    /// Values of row `index` along the leading axis.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        let width = self.row_width();
        let start = index.checked_mul(width)?;
        self.data.get(start..start + width)
    }

    /// Returns the row width, failing unless the array is two dimensional.
    pub fn matrix_width(&self, path: &Path) -> Result<usize, NonoError> {
        if self.ndim() != 2 {
            return Err(NonoError::Shape(
                ErrorInfo::new("array-rank", "expected a two dimensional array")
                    .with_context("path", path.display())
                    .with_context("shape", format_shape(&self.shape)),
            ));
        }
        Ok(self.row_width())
    }
}

/// Renders a shape the way numpy prints tuples: `(100, 30)` or `(7,)`.
pub fn format_shape(shape: &[u64]) -> String {
    match shape {
        [] => "()".to_string(),
        [single] => format!("({single},)"),
        dims => {
            let parts: Vec<String> = dims.iter().map(u64::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

fn dataset_error(code: &str, path: &Path, err: impl ToString) -> NonoError {
    NonoError::Dataset(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

fn is_npz(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("npz"))
}

fn range_error(path: &Path, value: impl ToString) -> NonoError {
    NonoError::Shape(
        ErrorInfo::new("value-range", "array value does not fit the element type")
            .with_context("path", path.display())
            .with_context("value", value),
    )
}

fn convert<S, T>(values: Vec<S>, path: &Path) -> Result<Vec<T>, NonoError>
where
    S: Copy + std::fmt::Display,
    i64: TryFrom<S>,
    T: TryFrom<i64>,
{
    values
        .into_iter()
        .map(|value| {
            i64::try_from(value)
                .ok()
                .and_then(|wide| T::try_from(wide).ok())
                .ok_or_else(|| range_error(path, value))
        })
        .collect()
}

fn convert_float<T>(values: Vec<f64>, path: &Path) -> Result<Vec<T>, NonoError>
where
    T: TryFrom<i64>,
{
    values
        .into_iter()
        .map(|value| {
            let whole = value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64;
            whole
                .then(|| T::try_from(value as i64).ok())
                .flatten()
                .ok_or_else(|| range_error(path, value))
        })
        .collect()
}

fn read_array<T, R>(npy: NpyFile<R>, path: &Path) -> Result<NdArray<T>, NonoError>
where
    T: TryFrom<i64>,
    R: Read,
{
    let shape = npy.shape().to_vec();
    let dtype = match npy.dtype() {
        DType::Plain(type_str) => type_str.to_string(),
        other => {
            return Err(dataset_error(
                "unsupported-dtype",
                path,
                format!("structured dtype {} is not supported", other.descr()),
            ))
        }
    };
    let kind = dtype.chars().nth(1).unwrap_or('?');
    let size = dtype.get(2..).and_then(|size| size.parse::<u32>().ok());
    let read_err = |err: std::io::Error| dataset_error("array-read", path, err);
    let data = match (kind, size) {
        ('b', Some(1)) => convert(npy.into_vec::<bool>().map_err(read_err)?, path)?,
        ('u', Some(1)) => convert(npy.into_vec::<u8>().map_err(read_err)?, path)?,
        ('u', Some(2)) => convert(npy.into_vec::<u16>().map_err(read_err)?, path)?,
        ('u', Some(4)) => convert(npy.into_vec::<u32>().map_err(read_err)?, path)?,
        ('u', Some(8)) => convert(npy.into_vec::<u64>().map_err(read_err)?, path)?,
        ('i', Some(1)) => convert(npy.into_vec::<i8>().map_err(read_err)?, path)?,
        ('i', Some(2)) => convert(npy.into_vec::<i16>().map_err(read_err)?, path)?,
        ('i', Some(4)) => convert(npy.into_vec::<i32>().map_err(read_err)?, path)?,
        ('i', Some(8)) => convert(npy.into_vec::<i64>().map_err(read_err)?, path)?,
        ('f', Some(4)) => {
            let values = npy.into_vec::<f32>().map_err(read_err)?;
            convert_float(values.into_iter().map(f64::from).collect(), path)?
        }
        ('f', Some(8)) => convert_float(npy.into_vec::<f64>().map_err(read_err)?, path)?,
        _ => {
            return Err(dataset_error(
                "unsupported-dtype",
                path,
                format!("dtype {dtype} is not supported"),
            ))
        }
    };
    Ok(NdArray { shape, dtype, data })
}

fn open_npz(path: &Path) -> Result<NpzArchive<BufReader<File>>, NonoError> {
    NpzArchive::open(path).map_err(|err| dataset_error("archive-open", path, err))
}

/// Reads a standalone `.npy` file.
pub fn load_npy<T: TryFrom<i64>>(path: &Path) -> Result<NdArray<T>, NonoError> {
    let file = File::open(path).map_err(|err| dataset_error("file-open", path, err))?;
    let mut reader = BufReader::new(file);
    let npy = NpyFile::new(&mut reader).map_err(|err| dataset_error("array-header", path, err))?;
    read_array(npy, path)
}

/// Reads one named member of a `.npz` archive.
pub fn load_npz_member<T: TryFrom<i64>>(
    path: &Path,
    member: &str,
) -> Result<NdArray<T>, NonoError> {
    let mut archive = open_npz(path)?;
    let npy = archive
        .by_name(member)
        .map_err(|err| dataset_error("archive-read", path, err))?
        .ok_or_else(|| {
            NonoError::Dataset(
                ErrorInfo::new("archive-member", format!("archive has no array named '{member}'"))
                    .with_context("path", path.display())
                    .with_context("member", member),
            )
        })?;
    read_array(npy, path)
}

/// Reads every array stored in `path`, in archive order, at full width.
///
/// A `.npy` file yields a single array named after the file stem.
pub fn load_all(path: &Path) -> Result<Vec<(String, NdArray<i64>)>, NonoError> {
    if !is_npz(path) {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Ok(vec![(name, load_npy(path)?)]);
    }
    let mut archive = open_npz(path)?;
    let names: Vec<String> = archive.array_names().map(str::to_string).collect();
    let mut arrays = Vec::with_capacity(names.len());
    for name in names {
        let npy = archive
            .by_name(&name)
            .map_err(|err| dataset_error("archive-read", path, err))?
            .ok_or_else(|| dataset_error("archive-member", path, format!("missing array '{name}'")))?;
        arrays.push((name, read_array(npy, path)?));
    }
    Ok(arrays)
}

/// Loads a two dimensional array from a `.npz` member or a `.npy` file.
///
/// Returns the array together with its row width.
pub fn load_matrix(path: &Path, member: &str) -> Result<(NdArray<u8>, usize), NonoError> {
    let array = if is_npz(path) {
        load_npz_member(path, member)?
    } else {
        load_npy(path)?
    };
    let width = array.matrix_width(path)?;
    Ok((array, width))
}
