//! Exit codes and console reporting
//!
//! ## Exit Code Contract
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Calendar written (or checked) |
//! | 2 | Configuration: manifest, year, layout file, command line |
//! | 3 | Missing input file or photo |
//! | 4 | Malformed holiday, birthday or photo line |
//! | 5 | Wrong number of quotes or photo assignments |
//! | 6 | Reading, serializing or writing failed |

use std::process;

use wallcal_core::{RenderError, Reporter};
use wallcal_parser::LoadError;
use wallcal_render::LayoutError;

// ============================================================================
// Exit Code
// ============================================================================

/// Exit codes for CLI runs. Stable API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Config = 2,
    MissingFile = 3,
    MalformedRecord = 4,
    WrongCount = 5,
    Output = 6,
}

impl ExitCode {
    /// Category of a failed run
    pub fn from_error(error: &anyhow::Error) -> Self {
        if let Some(e) = error.downcast_ref::<LoadError>() {
            return match e {
                LoadError::Config(_) => ExitCode::Config,
                LoadError::MissingFile(_) => ExitCode::MissingFile,
                LoadError::MalformedRecord { .. } => ExitCode::MalformedRecord,
                LoadError::WrongLineCount { .. } => ExitCode::WrongCount,
                LoadError::Io { .. } => ExitCode::Output,
            };
        }
        if let Some(e) = error.downcast_ref::<RenderError>() {
            return match e {
                RenderError::MissingImage(_) => ExitCode::MissingFile,
                RenderError::Io(_) | RenderError::Format(_) | RenderError::InvalidData(_) => {
                    ExitCode::Output
                }
            };
        }
        if error.downcast_ref::<LayoutError>().is_some() {
            return ExitCode::Config;
        }
        ExitCode::Output
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code as u8)
    }
}

// ============================================================================
// Console Reporter
// ============================================================================

/// Success to stdout, failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn failure(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn success(&mut self, message: &str) {
        println!("{message}");
    }
}
