use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use log::info;
use nono_core::{ExtractionProvenance, GridSelector};
use nono_data::{load_config, load_dataset, ExtractConfig};
use nono_extract::render::typescript::render_index;
use nono_extract::serde::to_pretty_json;
use nono_extract::{extract, OutputFormat, SampleStats};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// TypeScript modules embedding the canonical clue text.
    Ts,
    /// JSON arrays of puzzle objects.
    Json,
    /// Plain text with solution pictures.
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Ts => OutputFormat::TypeScript,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Grid size to extract (5, 10 or 15) or `all`.
    #[arg(long, default_value = "all")]
    pub size: GridSelector,
    /// Puzzles per grid size; overrides the configuration file.
    #[arg(long)]
    pub count: Option<usize>,
    /// Sampling seed; overrides the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Optional YAML configuration (datasets, criteria, sampler tuning).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory the dataset paths are resolved against.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Write one listing per grid size here instead of printing to stdout.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Listing format.
    #[arg(long, value_enum, default_value_t = FormatArg::Ts)]
    pub format: FormatArg,
}

#[derive(Debug, Serialize)]
struct ListingManifest<'a> {
    file: &'a str,
    provenance: &'a ExtractionProvenance,
    stats: &'a SampleStats,
}

fn resolve_config(args: &ExtractArgs) -> Result<ExtractConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ExtractConfig::default(),
    };
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

pub fn run(args: &ExtractArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    // Unsupported sizes fail here, before any dataset is opened.
    let grids = config.grid_table()?.select(args.size)?;
    let format = OutputFormat::from(args.format);
    let sampler = config.sampler();
    let request = config.request();
    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut written = Vec::new();
    for grid in grids {
        let entry = config.dataset(grid.grid_size)?;
        let dataset = load_dataset(entry, &args.data_dir)?;
        let extraction = extract(&dataset, &sampler, &request)?;
        let stats = &extraction.stats;
        info!(
            "{0}x{0}: {1} valid of {2} scanned ({3:?} pool of {4}), rejected {5}",
            grid.grid_size,
            stats.valid_found,
            stats.candidates_scanned,
            stats.strategy,
            stats.pool_size,
            stats.rejected.total()
        );
        let listing = format.render(grid.grid_size, &extraction.puzzles)?;

        let Some(dir) = &args.output_dir else {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{listing}")?;
            continue;
        };
        let file_name = format.file_name(grid.grid_size);
        let path = dir.join(&file_name);
        fs::write(&path, &listing)?;
        let manifest = ListingManifest {
            file: &file_name,
            provenance: &extraction.provenance,
            stats,
        };
        fs::write(
            dir.join(format!("manifest-{0}x{0}.json", grid.grid_size)),
            to_pretty_json(&manifest)?,
        )?;
        info!("written to {}", path.display());
        written.push(grid.grid_size);
    }

    if let (Some(dir), OutputFormat::TypeScript) = (&args.output_dir, format) {
        if !written.is_empty() {
            fs::write(dir.join("index.ts"), render_index(&written))?;
        }
    }
    Ok(())
}
