//! XLSX backend built on rust_xlsxwriter
//!
//! Images are stretched over their cell region. The region size in pixels is
//! derived from the column widths and row heights set on the sheet, using the
//! same conversions Excel applies (7 px per character plus 5 px padding,
//! 4/3 px per point).

use crate::layout::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
use rust_xlsxwriter::{Format, FormatAlign, Image, ObjectMovement, Workbook, Worksheet, XlsxError};
use std::collections::HashMap;
use std::path::Path;
use wallcal_core::{
    CellRange, CellRef, CellValue, HAlign, RenderError, SheetCanvas, SpreadsheetDocument,
    TextStyle,
};

fn xlsx_error(e: XlsxError) -> RenderError {
    RenderError::Format(e.to_string())
}

/// Column width in character units to pixels
fn column_pixels(width: f64) -> f64 {
    if width < 1.0 {
        (width * 12.0 + 0.5).floor()
    } else {
        (width * 7.0 + 0.5).floor() + 5.0
    }
}

/// Row height in points to pixels
fn row_pixels(height: f64) -> f64 {
    (height * 4.0 / 3.0).round()
}

/// One worksheet under construction
pub struct XlsxSheet {
    name: String,
    worksheet: Worksheet,
    font_name: String,
    column_widths: HashMap<u16, f64>,
    row_heights: HashMap<u32, f64>,
}

impl XlsxSheet {
    fn format(&self, style: &TextStyle) -> Format {
        let mut format = Format::new()
            .set_font_name(&self.font_name)
            .set_font_size(style.size);
        if let Some(color) = style.color {
            format = format.set_font_color(color.0);
        }
        if style.italic {
            format = format.set_italic();
        }
        format = match style.align {
            HAlign::General => format,
            HAlign::Left => format.set_align(FormatAlign::Left),
            HAlign::Center => format.set_align(FormatAlign::Center),
            HAlign::Right => format.set_align(FormatAlign::Right),
        };
        if style.vcenter {
            format = format.set_align(FormatAlign::VerticalCenter);
        }
        format
    }

    /// Pixel size of a region
    fn region_size(&self, region: CellRange) -> (f64, f64) {
        let width = (region.first_col..=region.last_col)
            .map(|c| {
                column_pixels(
                    self.column_widths
                        .get(&c)
                        .copied()
                        .unwrap_or(DEFAULT_COLUMN_WIDTH),
                )
            })
            .sum();
        let height = (region.first_row..=region.last_row)
            .map(|r| row_pixels(self.row_heights.get(&r).copied().unwrap_or(DEFAULT_ROW_HEIGHT)))
            .sum();
        (width, height)
    }
}

impl SheetCanvas for XlsxSheet {
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<(), RenderError> {
        self.worksheet
            .set_column_width(col, width)
            .map_err(xlsx_error)?;
        self.column_widths.insert(col, width);
        Ok(())
    }

    fn set_row_height(&mut self, row: u32, height: f64) -> Result<(), RenderError> {
        self.worksheet
            .set_row_height(row, height)
            .map_err(xlsx_error)?;
        self.row_heights.insert(row, height);
        Ok(())
    }

    fn write(&mut self, at: CellRef, value: CellValue, style: &TextStyle) -> Result<(), RenderError> {
        let format = self.format(style);
        match value {
            CellValue::Text(text) => self
                .worksheet
                .write_string_with_format(at.row, at.col, text, &format),
            CellValue::Number(n) => self
                .worksheet
                .write_number_with_format(at.row, at.col, n, &format),
            CellValue::Blank => self.worksheet.write_blank(at.row, at.col, &format),
        }
        .map_err(xlsx_error)?;
        Ok(())
    }

    fn merge(
        &mut self,
        range: CellRange,
        value: CellValue,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let format = self.format(style);
        let text = match &value {
            CellValue::Text(text) => text.as_str(),
            CellValue::Number(_) | CellValue::Blank => "",
        };
        self.worksheet
            .merge_range(
                range.first_row,
                range.first_col,
                range.last_row,
                range.last_col,
                text,
                &format,
            )
            .map_err(xlsx_error)?;
        // merge_range only writes strings; numbers overwrite the top-left cell
        if let CellValue::Number(n) = value {
            self.worksheet
                .write_number_with_format(range.first_row, range.first_col, n, &format)
                .map_err(xlsx_error)?;
        }
        Ok(())
    }

    fn embed_image(&mut self, region: CellRange, image: &Path) -> Result<(), RenderError> {
        if !image.exists() {
            return Err(RenderError::MissingImage(image.to_path_buf()));
        }
        let (width, height) = self.region_size(region);
        let picture = Image::new(image)
            .map_err(|e| RenderError::Format(format!("{}: {}", image.display(), e)))?
            .set_scale_to_size(width, height, false)
            .set_object_movement(ObjectMovement::MoveAndSizeWithCells);
        self.worksheet
            .insert_image(region.first_row, region.first_col, &picture)
            .map_err(xlsx_error)?;
        Ok(())
    }
}

/// Workbook assembled page by page
pub struct XlsxDocument {
    workbook: Workbook,
    font_name: String,
    names: Vec<String>,
}

impl XlsxDocument {
    /// Every cell of the document uses `font_name`
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            workbook: Workbook::new(),
            font_name: font_name.into(),
            names: Vec::new(),
        }
    }
}

impl SpreadsheetDocument for XlsxDocument {
    type Sheet = XlsxSheet;

    fn new_sheet(&mut self, name: &str) -> Result<XlsxSheet, RenderError> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(name).map_err(xlsx_error)?;
        Ok(XlsxSheet {
            name: name.to_string(),
            worksheet,
            font_name: self.font_name.clone(),
            column_widths: HashMap::new(),
            row_heights: HashMap::new(),
        })
    }

    fn push_sheet(&mut self, sheet: XlsxSheet) -> Result<(), RenderError> {
        self.names.push(sheet.name);
        self.workbook.push_worksheet(sheet.worksheet);
        Ok(())
    }

    fn sheet_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn to_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        self.workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))
    }
}
