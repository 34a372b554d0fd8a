use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    extract::{self, ExtractArgs},
    inspect::{self, InspectArgs},
};
use env_logger::Env;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "nono", version, about = "Nonogram puzzle extraction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample valid puzzles from the packed datasets and render listings.
    Extract(ExtractArgs),
    /// Write a text report describing every array file under a directory.
    Inspect(InspectArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => extract::run(&args),
        Command::Inspect(args) => inspect::run(&args),
    }
}
