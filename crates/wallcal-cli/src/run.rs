//! Build and check pipelines

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wallcal_core::{Reporter, PAGE_COUNT};
use wallcal_parser::load_sources;
use wallcal_render::{CalendarRenderer, LayoutConfig};

use crate::report::ExitCode;

/// What a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write the workbook
    Build,
    /// Load and compose everything, write nothing
    Check,
}

/// Resolved command-line options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    /// Defaults to `data.txt` inside the data directory
    pub manifest: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub layout: Option<PathBuf>,
}

impl RunOptions {
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.data_dir.join("data.txt"))
    }
}

fn load_layout(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading layout file");
            Ok(LayoutConfig::load(path)?)
        }
        None => Ok(LayoutConfig::default()),
    }
}

/// Run the pipeline and return the success message
pub fn run(mode: Mode, options: &RunOptions) -> Result<String> {
    let layout = load_layout(options.layout.as_deref())?;
    let sources = load_sources(&options.data_dir, &options.manifest_path())?;
    let renderer = CalendarRenderer::with_layout(layout);

    match mode {
        Mode::Build => {
            let path = renderer.render_to_file(&sources, &options.output_dir)?;
            Ok(format!(
                "Calendar for {} written to {}",
                sources.year,
                path.display()
            ))
        }
        Mode::Check => {
            let document = renderer.render_to_memory(&sources)?;
            info!(pages = document.sheets.len(), "composed all pages");
            Ok(format!(
                "Calendar for {} is valid ({} pages)",
                sources.year, PAGE_COUNT
            ))
        }
    }
}

/// Run and report the outcome; the return value is the process exit code
pub fn execute(mode: Mode, options: &RunOptions, reporter: &mut impl Reporter) -> ExitCode {
    match run(mode, options) {
        Ok(message) => {
            reporter.success(&message);
            ExitCode::Success
        }
        Err(error) => {
            let code = ExitCode::from_error(&error);
            debug!(code = code.code(), "run failed");
            reporter.failure(&error.to_string());
            code
        }
    }
}
