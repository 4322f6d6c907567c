//! Tab-separated record loaders
//!
//! Every loader stops at the first invalid line and reports it verbatim.

use crate::{LoadError, RecordKind};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;
use wallcal_core::{
    BirthdayRegistry, CalendarYear, DayMonth, HolidayTable, MonthQuotes, Page, PhotoAssignments,
    PhotoEntry, MONTH_COUNT, PAGE_COUNT,
};

const HOLIDAY_KEY: &str = r"^[1-3]?[0-9]\.[1]?[0-9]\.$";

/// `d.M.yyyy`; chrono's `%Y` alone also takes signs, padding and short years
const BIRTH_DATE: &str = r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$";

const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

const QUOTES_LAYOUT: &str = "\tone quotation line for each month, January to December";

const PHOTOS_LAYOUT: &str = "\tphoto file for the front page\n\
    \tphoto file<TAB>caption for January\n\
    \tphoto file<TAB>caption for February\n\
    \t...\n\
    \tphoto file<TAB>caption for December\n\
    \tphoto file for the back page";

fn holiday_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(HOLIDAY_KEY).expect("holiday key pattern is valid"))
}

fn birth_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BIRTH_DATE).expect("birth date pattern is valid"))
}

/// Split on tabs; empty trailing fields count as absent
fn fields(line: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split('\t').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

fn parse_holiday_key(key: &str) -> Option<DayMonth> {
    if !holiday_key_pattern().is_match(key) {
        return None;
    }
    let mut parts = key.split('.');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    DayMonth::new(day, month)
}

/// Build the holiday table from `day.month.<TAB>name` lines
pub fn parse_holidays<I, S>(lines: I) -> Result<HolidayTable, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = HolidayTable::new();
    for line in lines {
        let line = line.as_ref();
        let [key, name] = fields(line)[..] else {
            return Err(LoadError::malformed(RecordKind::Holiday, line));
        };
        let key = parse_holiday_key(key)
            .ok_or_else(|| LoadError::malformed(RecordKind::Holiday, line))?;
        table.insert(key, name);
    }
    Ok(table)
}

/// Build the birthday registry from `name<TAB>d.M.yyyy` lines
pub fn parse_birthdays<I, S>(lines: I, year: CalendarYear) -> Result<BirthdayRegistry, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = BirthdayRegistry::new(year);
    for line in lines {
        let line = line.as_ref();
        let [name, birth_date] = fields(line)[..] else {
            return Err(LoadError::malformed(RecordKind::Birthday, line));
        };
        let birth_date = Some(birth_date)
            .filter(|date| birth_date_pattern().is_match(date))
            .and_then(|date| NaiveDate::parse_from_str(date, BIRTH_DATE_FORMAT).ok())
            .ok_or_else(|| LoadError::malformed(RecordKind::Birthday, line))?;
        let age = registry.insert(name, birth_date);
        if age < 0 {
            warn!(name, %birth_date, %year, "birth date lies after the calendar year");
        }
    }
    Ok(registry)
}

/// Month quotes, exactly one line per month
pub fn parse_quotes<I, S>(lines: I, file_name: &str) -> Result<MonthQuotes, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter().map(|l| l.as_ref().to_string()).collect();
    MonthQuotes::new(lines).map_err(|lines| LoadError::WrongLineCount {
        file: file_name.to_string(),
        expected: MONTH_COUNT,
        found: lines.len(),
        layout: QUOTES_LAYOUT,
    })
}

/// Photo assignments, exactly one line per page.
///
/// Month lines need an image and a caption; the cover and back page lines may
/// omit the caption.
pub fn parse_photos<I, S>(lines: I, file_name: &str) -> Result<PhotoAssignments, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    if lines.len() != PAGE_COUNT {
        return Err(LoadError::WrongLineCount {
            file: file_name.to_string(),
            expected: PAGE_COUNT,
            found: lines.len(),
            layout: PHOTOS_LAYOUT,
        });
    }

    let mut entries = Vec::with_capacity(PAGE_COUNT);
    for (page, line) in Page::all().zip(&lines) {
        let line = line.as_ref();
        let entry = match (page, &fields(line)[..]) {
            (_, [image, caption]) if !image.is_empty() => PhotoEntry {
                image: (*image).to_string(),
                caption: Some((*caption).to_string()),
            },
            (Page::Cover | Page::Back, [image]) => PhotoEntry {
                image: (*image).to_string(),
                caption: None,
            },
            _ => return Err(LoadError::malformed(RecordKind::Photo, line)),
        };
        entries.push(entry);
    }

    PhotoAssignments::new(entries).map_err(|entries| LoadError::WrongLineCount {
        file: file_name.to_string(),
        expected: PAGE_COUNT,
        found: entries.len(),
        layout: PHOTOS_LAYOUT,
    })
}
