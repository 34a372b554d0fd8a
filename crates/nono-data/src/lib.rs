#![deny(missing_docs)]
#![doc = "Dataset files, extraction configuration and inspection reports for nonogram archives."]

/// YAML extraction configuration and dataset registry.
pub mod config;
/// Archive inspection reports.
pub mod inspect;
/// `.npz` and `.npy` array loading.
pub mod npz;

pub use config::{load_config, load_dataset, DatasetEntry, ExtractConfig};
pub use inspect::{detect_layout, find_array_files, inspect_file, report_path, ArrayRole};
pub use npz::{load_all, load_matrix, NdArray, DEFAULT_MEMBER};
