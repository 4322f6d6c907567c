//! Run manifest: the year and the names of the four data files

use crate::{read_lines, LoadError};
use std::path::Path;
use wallcal_core::CalendarYear;

const MANIFEST_LAYOUT: &str = "Expected lines:\n\
    \tyear\n\
    \tfile with month quotes\n\
    \tfile with holidays\n\
    \tfile with birthdays\n\
    \tfile with photo assignments";

/// Parsed manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub year: CalendarYear,
    pub quotes_file: String,
    pub holidays_file: String,
    pub birthdays_file: String,
    pub photos_file: String,
}

impl Manifest {
    /// Parse manifest lines; lines after the fifth are ignored
    pub fn parse<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .take(5)
            .map(|l| l.as_ref().to_string())
            .collect();
        let [year, quotes_file, holidays_file, birthdays_file, photos_file] =
            <[String; 5]>::try_from(lines).map_err(|_| LoadError::Config(MANIFEST_LAYOUT.into()))?;

        let year = year
            .parse::<i32>()
            .ok()
            .and_then(CalendarYear::new)
            .ok_or_else(|| {
                LoadError::Config(format!("Year '{}' is malformed, it must be an integer", year))
            })?;

        let labels = ["quotes", "holidays", "birthdays", "photo assignments"];
        let names = [&quotes_file, &holidays_file, &birthdays_file, &photos_file];
        for (label, name) in labels.iter().zip(names) {
            if name.trim().is_empty() {
                return Err(LoadError::Config(format!(
                    "Manifest names no {} file\n{}",
                    label, MANIFEST_LAYOUT
                )));
            }
        }

        Ok(Self {
            year,
            quotes_file,
            holidays_file,
            birthdays_file,
            photos_file,
        })
    }

    /// Read and parse a manifest file; a missing manifest is a configuration error
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        match read_lines(path) {
            Ok(lines) => Self::parse(lines),
            Err(LoadError::MissingFile(p)) => Err(LoadError::Config(format!(
                "Manifest {} does not exist",
                p.display()
            ))),
            Err(e) => Err(e),
        }
    }
}
