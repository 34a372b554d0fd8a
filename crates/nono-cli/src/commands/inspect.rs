use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use log::info;
use nono_core::GridTable;
use nono_data::{find_array_files, inspect_file, load_config, report_path, ExtractConfig};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory searched recursively for `.npz` and `.npy` files.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Optional YAML configuration whose datasets define the known grid sizes.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print reports instead of writing a `.txt` next to each file.
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: &InspectArgs) -> Result<(), Box<dyn Error>> {
    let table: GridTable = match &args.config {
        Some(path) => load_config(path)?.grid_table()?,
        None => ExtractConfig::default().grid_table()?,
    };
    let files = find_array_files(&args.data_dir)?;
    info!("found {} array files under {}", files.len(), args.data_dir.display());

    let mut stdout = std::io::stdout().lock();
    for path in &files {
        let report = inspect_file(path, &table);
        if args.stdout {
            writeln!(stdout, "{report}")?;
            continue;
        }
        let target = report_path(path);
        fs::write(&target, report)?;
        info!("{} -> {}", path.display(), target.display());
    }
    info!("done, inspected {} files", files.len());
    Ok(())
}
