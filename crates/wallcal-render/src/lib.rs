//! # wallcal-render
//!
//! Renders a loaded calendar into a 14-sheet spreadsheet.
//!
//! ## Backends
//!
//! - **XLSX**: the printable workbook, via `rust_xlsxwriter`
//! - **Memory**: records cells, merges and images for inspection
//!
//! ## Example
//!
//! ```rust,ignore
//! use wallcal_render::CalendarRenderer;
//!
//! let renderer = CalendarRenderer::new();
//! let path = renderer.render_to_file(&sources, Path::new("."))?;
//! ```

pub mod compose;
pub mod layout;
pub mod memory;
pub mod xlsx;

pub use compose::PageComposer;
pub use layout::{BlockStyle, LayoutConfig, LayoutError, TextBlock};
pub use memory::{MemoryDocument, MemorySheet};
pub use xlsx::{XlsxDocument, XlsxSheet};

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wallcal_core::{CalendarSources, RenderError, SpreadsheetDocument};

/// Calendar renderer
#[derive(Clone, Debug, Default)]
pub struct CalendarRenderer {
    pub layout: LayoutConfig,
}

impl CalendarRenderer {
    /// Create a renderer with the built-in layout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Set the font face
    pub fn font_name(mut self, font_name: impl Into<String>) -> Self {
        self.layout.font_name = font_name.into();
        self
    }

    /// Print captions under month photos
    pub fn with_photo_captions(mut self, show: bool) -> Self {
        self.layout.show_photo_captions = show;
        self
    }

    /// Compose every page into an arbitrary document
    pub fn compose<D: SpreadsheetDocument>(
        &self,
        sources: &CalendarSources,
        document: &mut D,
    ) -> Result<(), RenderError> {
        PageComposer::new(sources, &self.layout).compose(document)
    }

    /// Compose into the in-memory backend without producing a workbook
    pub fn render_to_memory(&self, sources: &CalendarSources) -> Result<MemoryDocument, RenderError> {
        let mut document = MemoryDocument::new();
        self.compose(sources, &mut document)?;
        Ok(document)
    }

    /// Compose into a workbook that has not been serialized yet
    pub fn render_to_xlsx(&self, sources: &CalendarSources) -> Result<XlsxDocument, RenderError> {
        let mut document = XlsxDocument::new(&self.layout.font_name);
        self.compose(sources, &mut document)?;
        Ok(document)
    }

    /// Render to XLSX bytes
    pub fn render_to_bytes(&self, sources: &CalendarSources) -> Result<Vec<u8>, RenderError> {
        self.render_to_xlsx(sources)?.to_bytes()
    }

    /// Where the workbook for these sources is written
    pub fn output_path(&self, sources: &CalendarSources, output_dir: &Path) -> PathBuf {
        output_dir.join(self.layout.file_name_for(sources.year))
    }

    /// Render and write the workbook into `output_dir`
    ///
    /// Nothing is written unless the whole document rendered successfully,
    /// and an existing file is only replaced once the new one is complete.
    pub fn render_to_file(
        &self,
        sources: &CalendarSources,
        output_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        let bytes = self.render_to_bytes(sources)?;
        let path = self.output_path(sources, output_dir);
        write_atomically(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote calendar");
        Ok(path)
    }
}

/// Write through a temporary file in the target directory, then rename
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    debug!(temp = %file.path().display(), "writing temporary workbook");
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| RenderError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_layout() {
        let renderer = CalendarRenderer::new()
            .font_name("Georgia")
            .with_photo_captions(true);
        assert_eq!(renderer.layout.font_name, "Georgia");
        assert!(renderer.layout.show_photo_captions);
        assert_eq!(renderer.layout.back_page.len(), 14);
    }

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cal.xlsx");
        std::fs::write(&path, b"old").unwrap();
        write_atomically(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn atomic_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cal.xlsx");
        assert!(matches!(
            write_atomically(&path, b"x"),
            Err(RenderError::Io(_))
        ));
        assert!(!path.exists());
    }
}
