//! In-memory spreadsheet document
//!
//! Records every cell, merge and image instead of encoding a workbook. Used by
//! the `check` command and by tests that inspect page contents. Merges are
//! checked for overlap the same way the XLSX backend does.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use wallcal_core::{
    CellRange, CellRef, CellValue, RenderError, SheetCanvas, SpreadsheetDocument, TextStyle,
};

/// A written cell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordedCell {
    pub value: CellValue,
    pub style: TextStyle,
}

/// An embedded image
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordedImage {
    pub region: CellRange,
    pub path: PathBuf,
}

fn cells_as_list<S: Serializer>(
    cells: &BTreeMap<CellRef, RecordedCell>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(cells.iter())
}

/// One recorded page
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MemorySheet {
    pub name: String,
    #[serde(serialize_with = "cells_as_list")]
    pub cells: BTreeMap<CellRef, RecordedCell>,
    pub merges: Vec<CellRange>,
    pub images: Vec<RecordedImage>,
    pub column_widths: BTreeMap<u16, f64>,
    pub row_heights: BTreeMap<u32, f64>,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&RecordedCell> {
        self.cells.get(&CellRef::new(row, col))
    }

    pub fn value(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cell(row, col).map(|c| &c.value)
    }

    pub fn text(&self, row: u32, col: u16) -> Option<&str> {
        match self.value(row, col)? {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, row: u32, col: u16) -> Option<f64> {
        match self.value(row, col)? {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The merged region whose top-left cell is `(row, col)`
    pub fn merge_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        self.merges
            .iter()
            .find(|m| m.top_left() == CellRef::new(row, col))
    }
}

impl SheetCanvas for MemorySheet {
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<(), RenderError> {
        self.column_widths.insert(col, width);
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<(), RenderError> {
        self.row_heights.insert(row, height);
        Ok(())
    }

    fn write(&mut self, at: CellRef, value: CellValue, style: &TextStyle) -> Result<(), RenderError> {
        self.cells.insert(
            at,
            RecordedCell {
                value,
                style: *style,
            },
        );
        Ok(())
    }

    fn merge(
        &mut self,
        range: CellRange,
        value: CellValue,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        if range.is_single_cell() {
            return Err(RenderError::Format(format!(
                "cannot merge single cell {}",
                range
            )));
        }
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(&range)) {
            return Err(RenderError::Format(format!(
                "merge {} overlaps {} on sheet '{}'",
                range, existing, self.name
            )));
        }
        self.merges.push(range);
        self.write(range.top_left(), value, style)
    }

    fn embed_image(&mut self, region: CellRange, image: &Path) -> Result<(), RenderError> {
        if !image.exists() {
            return Err(RenderError::MissingImage(image.to_path_buf()));
        }
        self.images.push(RecordedImage {
            region,
            path: image.to_path_buf(),
        });
        Ok(())
    }
}

/// Document that keeps its pages in memory
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MemoryDocument {
    pub sheets: Vec<MemorySheet>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl SpreadsheetDocument for MemoryDocument {
    type Sheet = MemorySheet;

    fn new_sheet(&mut self, name: &str) -> Result<MemorySheet, RenderError> {
        Ok(MemorySheet::new(name))
    }

    fn push_sheet(&mut self, sheet: MemorySheet) -> Result<(), RenderError> {
        if self.sheets.iter().any(|s| s.name == sheet.name) {
            return Err(RenderError::Format(format!(
                "duplicate sheet name '{}'",
                sheet.name
            )));
        }
        self.sheets.push(sheet);
        Ok(())
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// JSON dump of every recorded page
    fn to_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        serde_json::to_vec_pretty(self).map_err(|e| RenderError::Format(e.to_string()))
    }
}
