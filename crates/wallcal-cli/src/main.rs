//! wallcal CLI - Photo Wall Calendar Generator
//!
//! Reads a data directory and writes a 14-sheet XLSX wall calendar.

mod report;
mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use report::ConsoleReporter;
use run::{execute, Mode, RunOptions};

#[derive(Parser)]
#[command(name = "wallcal")]
#[command(author, version, about = "Photo wall calendar generator", long_about = None)]
struct Cli {
    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the manifest, text inputs and photos
    #[arg(long, value_name = "DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Manifest file [default: data.txt in the data directory]
    #[arg(long, value_name = "FILE", global = true)]
    manifest: Option<PathBuf>,

    /// Directory the workbook is written to
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    output_dir: PathBuf,

    /// TOML layout overrides (font, file name, back page text)
    #[arg(long, value_name = "FILE", global = true)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the calendar workbook (default)
    Build,

    /// Validate inputs and photos without writing anything
    Check,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = match cli.command {
        Some(Commands::Check) => Mode::Check,
        Some(Commands::Build) | None => Mode::Build,
    };
    let options = RunOptions {
        data_dir: cli.data_dir,
        manifest: cli.manifest,
        output_dir: cli.output_dir,
        layout: cli.layout,
    };

    execute(mode, &options, &mut ConsoleReporter).into()
}
