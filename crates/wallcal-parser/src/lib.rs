//! # wallcal-parser
//!
//! Loaders for the plain-text inputs of a calendar run.
//!
//! This crate provides:
//! - Manifest parsing (year and the four data file names)
//! - Record loaders for holidays, birthdays, month quotes and photo assignments
//! - `load_sources`, which reads everything a run needs and fails on the
//!   first invalid line
//!
//! ## Example
//!
//! ```rust
//! use wallcal_core::{CalendarYear, DayMonth};
//! use wallcal_parser::{parse_birthdays, parse_holidays};
//!
//! let holidays = parse_holidays(["1.1.\tNový rok", "17.1.\tDrahoslav"]).unwrap();
//! assert_eq!(holidays.get(DayMonth::new(17, 1).unwrap()), Some("Drahoslav"));
//!
//! let year = CalendarYear::new(2024).unwrap();
//! let birthdays = parse_birthdays(["Jana\t1.1.2000"], year).unwrap();
//! assert_eq!(birthdays.len(), 1);
//! ```

pub mod manifest;
pub mod records;

pub use manifest::Manifest;
pub use records::{parse_birthdays, parse_holidays, parse_photos, parse_quotes};

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use wallcal_core::CalendarSources;

/// Loading error
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error(
        "Malformed {} line '{}'\n\tExpected format: {}\n\tExample: {}",
        .kind, .line, .kind.format(), .kind.example()
    )]
    MalformedRecord { kind: RecordKind, line: String },

    #[error("File '{file}' has {found} lines, expected {expected}:\n{layout}")]
    WrongLineCount {
        file: String,
        expected: usize,
        found: usize,
        layout: &'static str,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn malformed(kind: RecordKind, line: &str) -> Self {
        LoadError::MalformedRecord {
            kind,
            line: line.to_string(),
        }
    }
}

/// Kind of a tab-separated input record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Holiday,
    Birthday,
    Photo,
}

impl RecordKind {
    /// Human-readable record layout
    pub fn format(self) -> &'static str {
        match self {
            RecordKind::Holiday => "day.month.<TAB>name",
            RecordKind::Birthday => "name<TAB>day.month.year",
            RecordKind::Photo => "file.ext<TAB>caption",
        }
    }

    /// A valid sample line
    pub fn example(self) -> &'static str {
        match self {
            RecordKind::Holiday => "17.1.\tDrahoslav",
            RecordKind::Birthday => "Vašek B.\t6.6.2008",
            RecordKind::Photo => "foto1.jpg\tVýprava na Sněžku",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Holiday => "holiday",
            RecordKind::Birthday => "birthday",
            RecordKind::Photo => "photo",
        })
    }
}

/// Read a text file as lines.
///
/// A leading byte-order mark and trailing carriage returns are removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

/// Load every input named by the manifest at `manifest_path`.
///
/// File names inside the manifest are resolved against `data_dir`.
pub fn load_sources(data_dir: &Path, manifest_path: &Path) -> Result<CalendarSources, LoadError> {
    let manifest = Manifest::load(manifest_path)?;
    let year = manifest.year;
    info!(%year, "generating calendar");

    let quotes_path = data_dir.join(&manifest.quotes_file);
    let quotes = parse_quotes(read_lines(&quotes_path)?, &manifest.quotes_file)?;
    info!(file = %manifest.quotes_file, "loaded month quotes");

    let holidays = parse_holidays(read_lines(&data_dir.join(&manifest.holidays_file))?)?;
    info!(file = %manifest.holidays_file, count = holidays.len(), "loaded holidays");

    let birthdays = parse_birthdays(read_lines(&data_dir.join(&manifest.birthdays_file))?, year)?;
    info!(file = %manifest.birthdays_file, count = birthdays.len(), "loaded birthdays");

    let photos = parse_photos(
        read_lines(&data_dir.join(&manifest.photos_file))?,
        &manifest.photos_file,
    )?;
    info!(file = %manifest.photos_file, "loaded photo assignments");

    Ok(CalendarSources {
        year,
        quotes,
        holidays,
        birthdays,
        photos,
        data_dir: data_dir.to_path_buf(),
    })
}
