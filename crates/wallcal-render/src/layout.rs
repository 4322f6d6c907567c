//! Page geometry and the optional layout file
//!
//! Cell regions are fixed constants. The font face, the output file name,
//! photo captions and the back page text can be overridden from a TOML file:
//!
//! ```toml
//! font_name = "Georgia"
//! file_name = "Calendar {year}.xlsx"
//! show_photo_captions = true
//!
//! [[back_page]]
//! row = 0
//! rows = 3
//! text = "Our calendar"
//! style = "title"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wallcal_core::{CalendarYear, CellRange, CellValue, HAlign, Rgb, TextStyle};

// ============================================================================
// Geometry
// ============================================================================

/// Columns 0..=6 hold the weekday grid
pub const GRID_COLUMNS: u16 = 7;
/// Weekday column width in character units
pub const GRID_COLUMN_WIDTH: f64 = 3000.0 / 256.0;
/// Width of the side list day column
pub const SIDE_DAY_COLUMN_WIDTH: f64 = 1000.0 / 256.0;
/// Spreadsheet default column width in character units
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;
/// Spreadsheet default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Month name and quote row
pub const HEADER_ROW: u32 = 0;
pub const HEADER_ROW_HEIGHT: f64 = 42.0;
pub const QUOTE_RANGE: CellRange = CellRange::row_span(HEADER_ROW, 3, 9);
pub const MONTH_PHOTO: CellRange = CellRange::new(1, 0, 21, 9);
pub const PHOTO_CAPTION: CellRange = CellRange::row_span(22, 0, 9);

/// First row of the day grid
pub const GRID_TOP: u32 = 23;
/// Day number (two merged rows) and holiday name
pub const ROWS_PER_WEEK: u32 = 3;

pub const SIDE_DAY_COL: u16 = 7;
pub const SIDE_LABEL_COLS: (u16, u16) = (8, 9);
pub const SIDE_HEADER: CellRange = CellRange::row_span(GRID_TOP, 7, 9);
/// Row of the reminder header when the birthday list is short enough
pub const REMINDER_ROW: u32 = GRID_TOP + 8;

pub const COVER_PHOTO: CellRange = CellRange::new(0, 0, 38, 6);
pub const BACK_PHOTO: CellRange = CellRange::new(11, 0, 20, 6);

/// Last row index an XLSX worksheet can hold
pub const MAX_ROW: u32 = 1_048_575;

pub const BIRTHDAYS_HEADER: &str = "Narozeniny";
pub const REMINDER_HEADER: &str = "Nezapomeň!";

/// Row of the day numbers of a week block
pub const fn week_row(week: u32) -> u32 {
    GRID_TOP + ROWS_PER_WEEK * week
}

// ============================================================================
// Styles
// ============================================================================

pub const MONTH_NAME_STYLE: TextStyle = TextStyle::new(32.0).color(Rgb::BLUE);
pub const QUOTE_STYLE: TextStyle = TextStyle::new(10.0).align(HAlign::Right).vcenter();
pub const CAPTION_STYLE: TextStyle = TextStyle::centered(10.0).italic();
pub const SIDE_HEADER_STYLE: TextStyle = TextStyle::centered(12.0);
pub const SIDE_DAY_STYLE: TextStyle = TextStyle::centered(8.0).color(Rgb::DARK_RED);
pub const SIDE_LABEL_STYLE: TextStyle = TextStyle::centered(8.0);
pub const REMINDER_STYLE: TextStyle = TextStyle::centered(12.0).color(Rgb::DARK_RED);

pub fn day_number_style(weekend: bool) -> TextStyle {
    let style = TextStyle::new(28.0).align(HAlign::Center);
    if weekend {
        style.color(Rgb::GREY)
    } else {
        style
    }
}

pub fn holiday_style(weekend: bool) -> TextStyle {
    let style = TextStyle::centered(7.0);
    if weekend {
        style.color(Rgb::GREY)
    } else {
        style
    }
}

/// Named text style for back page blocks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    Title,
    Sponsor,
    Colophon,
    Notice,
    Contact,
    Link,
}

impl BlockStyle {
    pub const fn text_style(self) -> TextStyle {
        match self {
            BlockStyle::Title => TextStyle::centered(38.0).color(Rgb::BROWN),
            BlockStyle::Sponsor => TextStyle::centered(22.0).color(Rgb::DARK_GREEN),
            BlockStyle::Colophon => TextStyle::centered(12.0).color(Rgb::DARK_GREEN),
            BlockStyle::Notice => TextStyle::centered(12.0).color(Rgb::DARK_RED),
            BlockStyle::Contact => TextStyle::centered(15.0).color(Rgb::BLACK),
            BlockStyle::Link => TextStyle::centered(15.0).color(Rgb::DARK_RED),
        }
    }
}

// ============================================================================
// Back page
// ============================================================================

const fn one() -> u32 {
    1
}

/// A text line of the back page, merged across the grid columns
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextBlock {
    pub row: u32,
    #[serde(default = "one")]
    pub rows: u32,
    /// Text template; `{year}` and `{prev_year}` are substituted
    pub text: String,
    pub style: BlockStyle,
}

impl TextBlock {
    pub fn new(row: u32, rows: u32, text: impl Into<String>, style: BlockStyle) -> Self {
        Self {
            row,
            rows,
            text: text.into(),
            style,
        }
    }

    /// Region covered by the block
    pub const fn range(&self) -> CellRange {
        CellRange::new(self.row, 0, self.row + self.rows - 1, GRID_COLUMNS - 1)
    }

    /// Cell value for a year; a bare `{year}` template becomes a number
    pub fn value(&self, year: CalendarYear) -> CellValue {
        if self.text == "{year}" {
            return CellValue::from(year.value());
        }
        CellValue::Text(
            self.text
                .replace("{prev_year}", &(year.value() - 1).to_string())
                .replace("{year}", &year.to_string()),
        )
    }
}

fn default_back_page() -> Vec<TextBlock> {
    use BlockStyle::*;
    vec![
        TextBlock::new(0, 3, "Tulácký kalendář", Title),
        TextBlock::new(3, 3, "{year}", Title),
        TextBlock::new(7, 1, "Aktivity našeho oddílu jsou podporovány", Sponsor),
        TextBlock::new(8, 1, "mladými ochránci přírody z prostředků", Sponsor),
        TextBlock::new(9, 1, "MŠMT a MHMP.", Sponsor),
        TextBlock::new(22, 1, "vydáno jako 95. publikace oddílového nakladatelství NAKOLENĚ", Colophon),
        TextBlock::new(23, 1, "neprodejný materiál pro členy a příznivce oddílu TULÁCI", Colophon),
        TextBlock::new(24, 1, "prosinec {prev_year}, vydání prvé, náklad závratný (25 ks)", Colophon),
        TextBlock::new(26, 1, "Všechny fotografie pochází z fotoaparátů členů oddílu, jakákoliv podobnost", Colophon),
        TextBlock::new(27, 1, " s fotografiemi jiných autorů je čistě náhodná. ", Colophon),
        TextBlock::new(28, 1, "Neneseme odpovědnost za pohoršení při prohlížení kalendáře.", Notice),
        TextBlock::new(30, 1, "Kontakt na oddíl (působící v Praze 10)", Contact),
        TextBlock::new(
            31,
            1,
            "Klára Adámková, tel.: 728 734 009, email: oddil@tulaci.eu",
            Contact,
        ),
        TextBlock::new(33, 1, "Vše o nás najdete na http://oddil.tulaci.eu", Link),
    ]
}

// ============================================================================
// Layout file
// ============================================================================

/// Layout file error
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Cannot read layout file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid layout: {0}")]
    Invalid(String),
}

/// Overridable layout settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Font face used for every cell
    pub font_name: String,
    /// Output file name template; `{year}` is substituted
    pub file_name: String,
    /// Print the photo caption under month photos
    pub show_photo_captions: bool,
    pub back_page: Vec<TextBlock>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_name: "Castanet CE".into(),
            file_name: "Tuláci kalendář {year}.xlsx".into(),
            show_photo_captions: false,
            back_page: default_back_page(),
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, LayoutError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let input = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Output file name for a year
    pub fn file_name_for(&self, year: CalendarYear) -> String {
        self.file_name.replace("{year}", &year.to_string())
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.font_name.trim().is_empty() {
            return Err(LayoutError::Invalid("font_name must not be empty".into()));
        }
        if !self.file_name.ends_with(".xlsx") || self.file_name.contains(['/', '\\']) {
            return Err(LayoutError::Invalid(format!(
                "file_name '{}' must be a plain .xlsx file name",
                self.file_name
            )));
        }
        for block in &self.back_page {
            if block.rows == 0 {
                return Err(LayoutError::Invalid(format!(
                    "back page block '{}' spans no rows",
                    block.text
                )));
            }
            match block.row.checked_add(block.rows - 1) {
                Some(last) if last <= MAX_ROW => {}
                _ => {
                    return Err(LayoutError::Invalid(format!(
                        "back page block '{}' at row {} spanning {} rows ends past the last row {}",
                        block.text, block.row, block.rows, MAX_ROW
                    )))
                }
            }
            if block.range().overlaps(&BACK_PHOTO) {
                return Err(LayoutError::Invalid(format!(
                    "back page block '{}' overlaps the photo at rows {}-{}",
                    block.text, BACK_PHOTO.first_row, BACK_PHOTO.last_row
                )));
            }
        }
        Ok(())
    }
}
