//! # wallcal-core
//!
//! Core domain model and traits for the wallcal wall-calendar generator.
//!
//! This crate provides:
//! - Domain types: `CalendarYear`, `Page`, `HolidayTable`, `BirthdayRegistry`,
//!   `PhotoAssignments`, `MonthQuotes`
//! - The date-to-grid mapper (see [`grid`])
//! - Core traits: `SpreadsheetDocument`, `SheetCanvas`, `Reporter`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wallcal_core::{layout_month, BirthdayRegistry, CalendarYear, DayMonth, HolidayTable};
//!
//! let year = CalendarYear::new(2024).unwrap();
//!
//! let mut holidays = HolidayTable::new();
//! holidays.insert(DayMonth::new(1, 1).unwrap(), "Nový rok");
//!
//! let mut birthdays = BirthdayRegistry::new(year);
//! birthdays.insert("Jana", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
//!
//! let january = layout_month(year, 1, &holidays, &birthdays).unwrap();
//! assert_eq!(january.days[0].holiday, Some("Nový rok"));
//! assert_eq!(january.birthdays[0].label, "Jana (24)");
//! ```

pub mod grid;

pub use grid::{layout_month, DayCell, GridPosition, MonthGrid};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Calendar Year
// ============================================================================

/// The target year of a calendar run
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarYear(i32);

impl CalendarYear {
    /// Create a calendar year, or `None` if any of its days cannot be represented
    pub fn new(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1)?;
        NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self(year))
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub fn is_leap(self) -> bool {
        NaiveDate::from_ymd_opt(self.0, 2, 29).is_some()
    }

    /// First day of the given month (1-based)
    pub fn first_day(self, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, month, 1)
    }
}

impl fmt::Display for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Number of pages in every calendar document
pub const PAGE_COUNT: usize = 14;

const SHEET_NAMES: [&str; PAGE_COUNT] = [
    "První list",
    "Leden",
    "Únor",
    "Březen",
    "Duben",
    "Květen",
    "Červen",
    "Červenec",
    "Srpen",
    "Září",
    "Říjen",
    "Listopad",
    "Prosinec",
    "Poslední list",
];

/// One page (sheet) of the calendar document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Front cover, page index 0
    Cover,
    /// Month page, 1 = January .. 12 = December
    Month(u32),
    /// Back colophon page, page index 13
    Back,
}

impl Page {
    /// All pages in document order: cover, January..December, back
    pub fn all() -> impl Iterator<Item = Page> {
        (0..PAGE_COUNT).filter_map(Page::from_index)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Page::Cover),
            1..=12 => Some(Page::Month(index as u32)),
            13 => Some(Page::Back),
            _ => None,
        }
    }

    /// Index of a page that exists in the document; `None` for months outside 1..=12
    pub const fn checked_index(self) -> Option<usize> {
        match self {
            Page::Month(m) if m == 0 || m > 12 => None,
            page => Some(page.index()),
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Page::Cover => 0,
            Page::Month(m) => m as usize,
            Page::Back => PAGE_COUNT - 1,
        }
    }

    /// Sheet label shown in the workbook tab
    pub fn sheet_name(self) -> &'static str {
        SHEET_NAMES.get(self.index()).copied().unwrap_or_default()
    }

    pub const fn month(self) -> Option<u32> {
        match self {
            Page::Month(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

// ============================================================================
// Holidays
// ============================================================================

/// Year-less calendar day, the key of the holiday table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayMonth {
    pub day: u32,
    pub month: u32,
}

impl DayMonth {
    /// Create a key if the day exists in the month of a leap year
    pub fn new(day: u32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(Self { day, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
        }
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.", self.day, self.month)
    }
}

/// Fixed-date holidays keyed by day and month
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidayTable {
    entries: HashMap<DayMonth, String>,
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a holiday name; a later insert for the same key replaces the earlier one
    pub fn insert(&mut self, key: DayMonth, name: impl Into<String>) -> Option<String> {
        self.entries.insert(key, name.into())
    }

    pub fn get(&self, key: DayMonth) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<&str> {
        self.get(DayMonth::of(date))
    }

    pub fn contains(&self, key: DayMonth) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayMonth, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

// ============================================================================
// Birthdays
// ============================================================================

/// Age shown on the calendar: plain difference of calendar years.
///
/// Whether the birthday has already passed within `year` is not considered.
pub fn age_in(year: CalendarYear, birth_date: NaiveDate) -> i32 {
    year.value() - birth_date.year()
}

/// Move a birth date onto the target year. 29 February becomes 28 February
/// in non-leap years.
pub fn restamp(birth_date: NaiveDate, year: CalendarYear) -> NaiveDate {
    NaiveDate::from_ymd_opt(year.value(), birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year.value(), birth_date.month(), birth_date.day() - 1))
        .unwrap_or(birth_date)
}

/// Label rendered in the birthday side list, e.g. `Jana (24)`
pub fn birthday_label(name: &str, age: i32) -> String {
    format!("{} ({})", name, age)
}

/// Birthdays re-stamped onto the target year
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthdayRegistry {
    year: CalendarYear,
    entries: HashMap<NaiveDate, Vec<String>>,
}

impl BirthdayRegistry {
    pub fn new(year: CalendarYear) -> Self {
        Self {
            year,
            entries: HashMap::new(),
        }
    }

    pub const fn year(&self) -> CalendarYear {
        self.year
    }

    /// Register a person born on `birth_date`; returns the age shown in the label
    pub fn insert(&mut self, name: &str, birth_date: NaiveDate) -> i32 {
        let age = age_in(self.year, birth_date);
        self.entries
            .entry(restamp(birth_date, self.year))
            .or_default()
            .push(birthday_label(name, age));
        age
    }

    /// Labels for a date of the target year, in registration order
    pub fn labels_on(&self, date: NaiveDate) -> &[String] {
        self.entries.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Number of people registered
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A birthday collected while walking a month, for the side list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BirthdayEntry {
    pub day: u32,
    pub label: String,
}

// ============================================================================
// Photos and Quotes
// ============================================================================

/// Image and optional caption assigned to one page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    /// Image file name, relative to the data directory
    pub image: String,
    pub caption: Option<String>,
}

/// Exactly one photo per page, in page order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoAssignments {
    entries: Vec<PhotoEntry>,
}

impl PhotoAssignments {
    /// Returns the entries back if there is not exactly one per page
    pub fn new(entries: Vec<PhotoEntry>) -> Result<Self, Vec<PhotoEntry>> {
        if entries.len() == PAGE_COUNT {
            Ok(Self { entries })
        } else {
            Err(entries)
        }
    }

    pub fn for_page(&self, page: Page) -> Option<&PhotoEntry> {
        page.checked_index().and_then(|i| self.entries.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Page, &PhotoEntry)> {
        Page::all().zip(self.entries.iter())
    }
}

/// Number of month quotes
pub const MONTH_COUNT: usize = 12;

/// One quotation line per month, January first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthQuotes {
    quotes: Vec<String>,
}

impl MonthQuotes {
    pub fn new(quotes: Vec<String>) -> Result<Self, Vec<String>> {
        if quotes.len() == MONTH_COUNT {
            Ok(Self { quotes })
        } else {
            Err(quotes)
        }
    }

    /// Quote for a 1-based month; empty for months outside 1..=12
    pub fn for_month(&self, month: u32) -> &str {
        (month as usize)
            .checked_sub(1)
            .and_then(|i| self.quotes.get(i))
            .map_or("", String::as_str)
    }
}

/// Everything loaded for one run; read-only once built
#[derive(Clone, Debug)]
pub struct CalendarSources {
    pub year: CalendarYear,
    pub quotes: MonthQuotes,
    pub holidays: HolidayTable,
    pub birthdays: BirthdayRegistry,
    pub photos: PhotoAssignments,
    /// Directory against which photo file names are resolved
    pub data_dir: PathBuf,
}

impl CalendarSources {
    pub fn photo_path(&self, page: Page) -> Option<PathBuf> {
        self.photos
            .for_page(page)
            .map(|entry| self.data_dir.join(&entry.image))
    }
}

// ============================================================================
// Spreadsheet Document Seam
// ============================================================================

/// Zero-based cell coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangular cell region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl CellRange {
    pub const fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
        }
    }

    /// A single row spanning `first_col..=last_col`
    pub const fn row_span(row: u32, first_col: u16, last_col: u16) -> Self {
        Self::new(row, first_col, row, last_col)
    }

    pub const fn top_left(&self) -> CellRef {
        CellRef::new(self.first_row, self.first_col)
    }

    pub const fn is_single_cell(&self) -> bool {
        self.first_row == self.last_row && self.first_col == self.last_col
    }

    pub const fn contains(&self, cell: CellRef) -> bool {
        cell.row >= self.first_row
            && cell.row <= self.last_row
            && cell.col >= self.first_col
            && cell.col <= self.last_col
    }

    pub const fn overlaps(&self, other: &CellRange) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R{}C{}:R{}C{}",
            self.first_row, self.first_col, self.last_row, self.last_col
        )
    }
}

/// Value written into a cell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

/// 24-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const BLUE: Rgb = Rgb(0x0000FF);
    pub const BROWN: Rgb = Rgb(0x993300);
    pub const DARK_GREEN: Rgb = Rgb(0x003300);
    pub const DARK_RED: Rgb = Rgb(0x800000);
    pub const GREY: Rgb = Rgb(0x808080);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HAlign {
    #[default]
    General,
    Left,
    Center,
    Right,
}

/// Font and alignment of a cell; the font face is chosen by the document
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    /// Font colour, `None` for the automatic colour
    pub color: Option<Rgb>,
    pub italic: bool,
    pub align: HAlign,
    pub vcenter: bool,
}

impl TextStyle {
    pub const fn new(size: f64) -> Self {
        Self {
            size,
            color: None,
            italic: false,
            align: HAlign::General,
            vcenter: false,
        }
    }

    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub const fn vcenter(mut self) -> Self {
        self.vcenter = true;
        self
    }

    /// Centered horizontally and vertically
    pub const fn centered(size: f64) -> Self {
        Self::new(size).align(HAlign::Center).vcenter()
    }
}

/// Drawing surface for one page
pub trait SheetCanvas {
    /// Set a column width in character units
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<(), RenderError>;

    /// Set a row height in points
    fn set_row_height(&mut self, row: u32, height: f64) -> Result<(), RenderError>;

    /// Write a value into a single cell
    fn write(&mut self, at: CellRef, value: CellValue, style: &TextStyle) -> Result<(), RenderError>;

    /// Merge a region and write a value into its top-left cell
    fn merge(&mut self, range: CellRange, value: CellValue, style: &TextStyle)
        -> Result<(), RenderError>;

    /// Embed an image stretched over a region
    fn embed_image(&mut self, region: CellRange, image: &Path) -> Result<(), RenderError>;
}

/// A spreadsheet document assembled page by page
pub trait SpreadsheetDocument {
    type Sheet: SheetCanvas;

    /// Create a detached sheet with the given tab name
    fn new_sheet(&mut self, name: &str) -> Result<Self::Sheet, RenderError>;

    /// Append a finished sheet after the existing ones
    fn push_sheet(&mut self, sheet: Self::Sheet) -> Result<(), RenderError>;

    /// Tab names in document order
    fn sheet_names(&self) -> Vec<String>;

    /// Serialize the whole document
    fn to_bytes(&mut self) -> Result<Vec<u8>, RenderError>;
}

// ============================================================================
// Reporting
// ============================================================================

/// User-facing outcome reporting
pub trait Reporter {
    fn failure(&mut self, message: &str);
    fn success(&mut self, message: &str);
}

/// One captured outcome message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Success(String),
    Failure(String),
}

/// Reporter that keeps every message in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryReporter {
    pub reports: Vec<Report>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().filter_map(|r| match r {
            Report::Failure(m) => Some(m.as_str()),
            Report::Success(_) => None,
        })
    }

    pub fn successes(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().filter_map(|r| match r {
            Report::Success(m) => Some(m.as_str()),
            Report::Failure(_) => None,
        })
    }
}

impl Reporter for MemoryReporter {
    fn failure(&mut self, message: &str) {
        self.reports.push(Report::Failure(message.to_string()));
    }

    fn success(&mut self, message: &str) {
        self.reports.push(Report::Success(message.to_string()));
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("File {} does not exist", .0.display())]
    MissingImage(PathBuf),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn pages_in_document_order() {
        let names: Vec<&str> = Page::all().map(Page::sheet_name).collect();
        assert_eq!(names.len(), PAGE_COUNT);
        assert_eq!(names[0], "První list");
        assert_eq!(names[1], "Leden");
        assert_eq!(names[12], "Prosinec");
        assert_eq!(names[13], "Poslední list");
    }

    #[test]
    fn page_index_round_trips() {
        for page in Page::all() {
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(14), None);
        assert_eq!(Page::Month(3).month(), Some(3));
        assert_eq!(Page::Cover.month(), None);
    }

    #[test]
    fn day_month_rejects_impossible_days() {
        assert!(DayMonth::new(29, 2).is_some());
        assert!(DayMonth::new(30, 2).is_none());
        assert!(DayMonth::new(31, 4).is_none());
        assert!(DayMonth::new(0, 1).is_none());
        assert!(DayMonth::new(32, 1).is_none());
        assert!(DayMonth::new(1, 13).is_none());
        assert_eq!(DayMonth::new(17, 1).unwrap().to_string(), "17.1.");
    }

    #[test]
    fn holiday_table_last_write_wins() {
        let mut table = HolidayTable::new();
        let key = DayMonth::new(24, 12).unwrap();
        assert_eq!(table.insert(key, "Adam"), None);
        assert_eq!(table.insert(key, "Štědrý den"), Some("Adam".to_string()));
        assert_eq!(table.get(key), Some("Štědrý den"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.for_date(date(2024, 12, 24)), Some("Štědrý den"));
        assert_eq!(table.for_date(date(2024, 12, 25)), None);
    }

    #[test]
    fn age_is_plain_year_difference() {
        let year = CalendarYear::new(2024).unwrap();
        // Born late in the year: the birthday has not happened on 1 January,
        // the calendar still shows the year difference.
        assert_eq!(age_in(year, date(2000, 12, 31)), 24);
        assert_eq!(age_in(year, date(2000, 1, 1)), 24);
    }

    #[test]
    fn leap_day_birthday_moves_to_28th() {
        let leap = CalendarYear::new(2024).unwrap();
        let common = CalendarYear::new(2025).unwrap();
        assert_eq!(restamp(date(2000, 2, 29), leap), date(2024, 2, 29));
        assert_eq!(restamp(date(2000, 2, 29), common), date(2025, 2, 28));
        assert_eq!(restamp(date(1990, 7, 14), common), date(2025, 7, 14));
    }

    #[test]
    fn registry_keeps_people_sharing_a_date() {
        let year = CalendarYear::new(2024).unwrap();
        let mut registry = BirthdayRegistry::new(year);
        registry.insert("Jana", date(2000, 5, 5));
        registry.insert("Petr", date(1980, 5, 5));
        assert_eq!(
            registry.labels_on(date(2024, 5, 5)),
            ["Jana (24)".to_string(), "Petr (44)".to_string()]
        );
        assert!(registry.labels_on(date(2024, 5, 6)).is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn photo_assignments_need_one_entry_per_page() {
        let entry = PhotoEntry {
            image: "a.png".into(),
            caption: None,
        };
        assert!(PhotoAssignments::new(vec![entry.clone(); 13]).is_err());
        let photos = PhotoAssignments::new(vec![entry; 14]).unwrap();
        assert_eq!(photos.iter().count(), 14);
        assert!(photos.for_page(Page::Month(12)).is_some());
        assert_eq!(photos.for_page(Page::Month(13)), None);
        assert_eq!(photos.for_page(Page::Month(0)), None);
    }

    #[test]
    fn checked_index_rejects_missing_months() {
        assert_eq!(Page::Cover.checked_index(), Some(0));
        assert_eq!(Page::Month(1).checked_index(), Some(1));
        assert_eq!(Page::Back.checked_index(), Some(13));
        assert_eq!(Page::Month(13).checked_index(), None);
    }

    #[test]
    fn quotes_indexed_by_month() {
        let quotes = MonthQuotes::new((1..=12).map(|m| format!("q{m}")).collect()).unwrap();
        assert_eq!(quotes.for_month(1), "q1");
        assert_eq!(quotes.for_month(12), "q12");
        assert_eq!(quotes.for_month(0), "");
        assert!(MonthQuotes::new(vec!["only".into()]).is_err());
    }

    #[test]
    fn cell_range_overlap() {
        let a = CellRange::new(23, 7, 23, 9);
        let b = CellRange::row_span(23, 8, 9);
        let c = CellRange::new(24, 0, 25, 0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(c.contains(CellRef::new(25, 0)));
        assert!(!CellRange::new(0, 0, 1, 0).is_single_cell());
    }

    #[test]
    fn memory_reporter_captures_messages() {
        let mut reporter = MemoryReporter::new();
        reporter.failure("bad line");
        reporter.success("done");
        assert_eq!(reporter.failures().collect::<Vec<_>>(), ["bad line"]);
        assert_eq!(reporter.successes().collect::<Vec<_>>(), ["done"]);
    }

    #[test]
    fn year_range_is_checked() {
        assert!(CalendarYear::new(2024).is_some());
        assert!(CalendarYear::new(i32::MAX).is_none());
        assert!(CalendarYear::new(2024).unwrap().is_leap());
        assert!(!CalendarYear::new(2023).unwrap().is_leap());
    }
}
