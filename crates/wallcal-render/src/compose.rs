//! Page composition
//!
//! Turns loaded calendar sources into the fourteen pages of the document:
//! cover, one page per month, back page. Pages are written to any
//! [`SpreadsheetDocument`], so the same composer drives both the XLSX
//! backend and the in-memory one.

use crate::layout::*;
use std::path::PathBuf;
use tracing::debug;
use wallcal_core::{
    layout_month, CalendarSources, CellRange, CellRef, CellValue, MonthGrid, Page, RenderError,
    SheetCanvas, SpreadsheetDocument,
};

/// Writes calendar pages onto sheets
pub struct PageComposer<'a> {
    sources: &'a CalendarSources,
    layout: &'a LayoutConfig,
}

impl<'a> PageComposer<'a> {
    pub fn new(sources: &'a CalendarSources, layout: &'a LayoutConfig) -> Self {
        Self { sources, layout }
    }

    /// Compose every page into `document`, in page order
    pub fn compose<D: SpreadsheetDocument>(&self, document: &mut D) -> Result<(), RenderError> {
        for page in Page::all() {
            let mut sheet = document.new_sheet(page.sheet_name())?;
            self.compose_page(page, &mut sheet)?;
            document.push_sheet(sheet)?;
        }
        Ok(())
    }

    /// Compose a single page
    pub fn compose_page<S: SheetCanvas>(&self, page: Page, sheet: &mut S) -> Result<(), RenderError> {
        debug!(page = %page, "composing page");
        for col in 0..GRID_COLUMNS {
            sheet.set_column_width(col, GRID_COLUMN_WIDTH)?;
        }
        match page {
            Page::Cover => self.cover(sheet),
            Page::Month(month) => self.month(month, sheet),
            Page::Back => self.back(sheet),
        }
    }

    fn photo_path(&self, page: Page) -> Result<PathBuf, RenderError> {
        self.sources
            .photo_path(page)
            .ok_or_else(|| RenderError::InvalidData(format!("page {:?} is not in the calendar", page)))
    }

    fn cover<S: SheetCanvas>(&self, sheet: &mut S) -> Result<(), RenderError> {
        sheet.embed_image(COVER_PHOTO, &self.photo_path(Page::Cover)?)
    }

    fn month<S: SheetCanvas>(&self, month: u32, sheet: &mut S) -> Result<(), RenderError> {
        let page = Page::Month(month);
        let photo = self.photo_path(page)?;
        sheet.set_column_width(SIDE_DAY_COL, SIDE_DAY_COLUMN_WIDTH)?;
        sheet.set_row_height(HEADER_ROW, HEADER_ROW_HEIGHT)?;

        sheet.write(
            CellRef::new(HEADER_ROW, 0),
            page.sheet_name().to_uppercase().into(),
            &MONTH_NAME_STYLE,
        )?;
        sheet.merge(
            QUOTE_RANGE,
            self.sources.quotes.for_month(month).into(),
            &QUOTE_STYLE,
        )?;

        sheet.embed_image(MONTH_PHOTO, &photo)?;
        if self.layout.show_photo_captions {
            let caption = self.sources.photos.for_page(page).and_then(|p| p.caption.as_ref());
            if let Some(caption) = caption {
                sheet.merge(PHOTO_CAPTION, caption.as_str().into(), &CAPTION_STYLE)?;
            }
        }

        let grid = layout_month(
            self.sources.year,
            month,
            &self.sources.holidays,
            &self.sources.birthdays,
        )?;
        debug!(
            month,
            weeks = grid.week_count(),
            birthdays = grid.birthdays.len(),
            "laid out month grid"
        );
        self.day_grid(&grid, sheet)?;
        self.side_list(&grid, sheet)
    }

    fn day_grid<S: SheetCanvas>(&self, grid: &MonthGrid<'_>, sheet: &mut S) -> Result<(), RenderError> {
        for cell in &grid.days {
            let row = week_row(cell.position.week);
            let col = cell.position.weekday;
            sheet.merge(
                CellRange::new(row, col, row + 1, col),
                cell.day().into(),
                &day_number_style(cell.weekend),
            )?;
            let holiday = cell.holiday.map_or(CellValue::Blank, CellValue::from);
            sheet.write(
                CellRef::new(row + 2, col),
                holiday,
                &holiday_style(cell.weekend),
            )?;
        }
        Ok(())
    }

    fn side_list<S: SheetCanvas>(&self, grid: &MonthGrid<'_>, sheet: &mut S) -> Result<(), RenderError> {
        sheet.merge(SIDE_HEADER, BIRTHDAYS_HEADER.into(), &SIDE_HEADER_STYLE)?;

        let first = SIDE_HEADER.first_row + 1;
        let (label_first, label_last) = SIDE_LABEL_COLS;
        let mut row = first;
        for entry in &grid.birthdays {
            sheet.write(
                CellRef::new(row, SIDE_DAY_COL),
                entry.day.into(),
                &SIDE_DAY_STYLE,
            )?;
            sheet.merge(
                CellRange::row_span(row, label_first, label_last),
                entry.label.as_str().into(),
                &SIDE_LABEL_STYLE,
            )?;
            row += 1;
        }

        let reminder = CellRange::row_span(
            REMINDER_ROW.max(row),
            SIDE_DAY_COL,
            label_last,
        );
        sheet.merge(reminder, REMINDER_HEADER.into(), &REMINDER_STYLE)
    }

    fn back<S: SheetCanvas>(&self, sheet: &mut S) -> Result<(), RenderError> {
        let year = self.sources.year;
        for block in &self.layout.back_page {
            sheet.merge(block.range(), block.value(year), &block.style.text_style())?;
        }
        sheet.embed_image(BACK_PHOTO, &self.photo_path(Page::Back)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySheet;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use wallcal_core::{
        BirthdayRegistry, CalendarYear, DayMonth, HolidayTable, MonthQuotes, PhotoAssignments,
        PhotoEntry, Rgb,
    };

    fn sources(dir: &Path, birthdays: &[(&str, NaiveDate)]) -> CalendarSources {
        let year = CalendarYear::new(2024).unwrap();
        let mut holidays = HolidayTable::new();
        holidays.insert(DayMonth::new(1, 1).unwrap(), "Nový rok");
        let mut registry = BirthdayRegistry::new(year);
        for (name, date) in birthdays {
            registry.insert(name, *date);
        }
        let photos = (0..14)
            .map(|i| {
                let image = format!("p{i}.png");
                fs::write(dir.join(&image), b"png").unwrap();
                PhotoEntry {
                    image,
                    caption: Some(format!("Výprava {i}")),
                }
            })
            .collect();
        CalendarSources {
            year,
            quotes: MonthQuotes::new((1..=12).map(|m| format!("Hláška {m}")).collect()).unwrap(),
            holidays,
            birthdays: registry,
            photos: PhotoAssignments::new(photos).unwrap(),
            data_dir: dir.to_path_buf(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_header_grid_and_side_list() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), &[("Jana", date(2000, 1, 1))]);
        let layout = LayoutConfig::default();
        let mut sheet = MemorySheet::new("Leden");
        PageComposer::new(&sources, &layout)
            .compose_page(Page::Month(1), &mut sheet)
            .unwrap();

        assert_eq!(sheet.text(0, 0), Some("LEDEN"));
        assert_eq!(sheet.text(0, 3), Some("Hláška 1"));
        // 1 January 2024 is a Monday
        assert_eq!(sheet.number(23, 0), Some(1.0));
        assert_eq!(sheet.text(25, 0), Some("Nový rok"));
        assert_eq!(sheet.value(25, 1), Some(&CellValue::Blank));
        assert_eq!(sheet.number(24, 7), Some(1.0));
        assert_eq!(sheet.text(24, 8), Some("Jana (24)"));
        assert_eq!(sheet.text(23, 7), Some(BIRTHDAYS_HEADER));
        assert_eq!(sheet.text(31, 7), Some(REMINDER_HEADER));
        assert_eq!(sheet.images.len(), 1);
        assert_eq!(sheet.images[0].region, MONTH_PHOTO);
        assert_eq!(sheet.column_widths.get(&7), Some(&SIDE_DAY_COLUMN_WIDTH));
        assert_eq!(sheet.row_heights.get(&0), Some(&HEADER_ROW_HEIGHT));
    }

    #[test]
    fn weekend_days_are_grey() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), &[]);
        let layout = LayoutConfig::default();
        let mut sheet = MemorySheet::new("Leden");
        PageComposer::new(&sources, &layout)
            .compose_page(Page::Month(1), &mut sheet)
            .unwrap();

        // 6 January 2024 is a Saturday
        let saturday = sheet.cell(23, 5).unwrap();
        assert_eq!(saturday.value, CellValue::Number(6.0));
        assert_eq!(saturday.style.color, Some(Rgb::GREY));
        let friday = sheet.cell(23, 4).unwrap();
        assert_eq!(friday.style.color, None);
    }

    #[test]
    fn long_birthday_list_pushes_reminder_down() {
        let dir = tempfile::tempdir().unwrap();
        let people: Vec<(String, NaiveDate)> = (1..=9)
            .map(|d| (format!("Člen {d}"), date(2000, 3, d)))
            .collect();
        let borrowed: Vec<(&str, NaiveDate)> =
            people.iter().map(|(n, d)| (n.as_str(), *d)).collect();
        let sources = sources(dir.path(), &borrowed);
        let layout = LayoutConfig::default();
        let mut sheet = MemorySheet::new("Březen");
        PageComposer::new(&sources, &layout)
            .compose_page(Page::Month(3), &mut sheet)
            .unwrap();

        assert_eq!(sheet.text(32, 8), Some("Člen 9 (24)"));
        assert_eq!(sheet.text(33, 7), Some(REMINDER_HEADER));
        assert_eq!(sheet.text(31, 7), None);
    }

    #[test]
    fn captions_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), &[]);

        let mut sheet = MemorySheet::new("Únor");
        PageComposer::new(&sources, &LayoutConfig::default())
            .compose_page(Page::Month(2), &mut sheet)
            .unwrap();
        assert_eq!(sheet.text(22, 0), None);

        let layout = LayoutConfig {
            show_photo_captions: true,
            ..LayoutConfig::default()
        };
        let mut sheet = MemorySheet::new("Únor");
        PageComposer::new(&sources, &layout)
            .compose_page(Page::Month(2), &mut sheet)
            .unwrap();
        assert_eq!(sheet.text(22, 0), Some("Výprava 2"));
    }

    #[test]
    fn month_outside_year_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), &[]);
        let layout = LayoutConfig::default();
        let mut sheet = MemorySheet::new("Leden");
        let err = PageComposer::new(&sources, &layout)
            .compose_page(Page::Month(13), &mut sheet)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidData(_)));
        assert!(sheet.images.is_empty());
        assert_eq!(sheet.text(0, 0), None);
    }

    #[test]
    fn back_page_blocks_and_photo() {
        let dir = tempfile::tempdir().unwrap();
        let sources = sources(dir.path(), &[]);
        let layout = LayoutConfig::default();
        let mut sheet = MemorySheet::new("Poslední list");
        PageComposer::new(&sources, &layout)
            .compose_page(Page::Back, &mut sheet)
            .unwrap();

        assert_eq!(sheet.text(0, 0), Some("Tulácký kalendář"));
        assert_eq!(sheet.number(3, 0), Some(2024.0));
        assert_eq!(
            sheet.text(24, 0),
            Some("prosinec 2023, vydání prvé, náklad závratný (25 ks)")
        );
        assert_eq!(sheet.images[0].region, BACK_PHOTO);
        assert_eq!(sheet.merges.len(), layout.back_page.len());
    }
}
