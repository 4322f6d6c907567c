//! Date-to-grid mapping for month pages
//!
//! A month page shows its days in a weekly grid. Each day lands in the column
//! of its ISO weekday (Monday = 0 .. Sunday = 6) and in the week block of the
//! month it belongs to. Week blocks are counted per month: the first block
//! holds day 1 whatever weekday that is, and a new block starts on every
//! Monday that is still inside the month. Weeks are never shared between two
//! month pages.
//!
//! While walking the month the mapper also joins the two date-keyed sources:
//! the holiday name for the day's `(day, month)` key and the birthday labels
//! for the exact date, which are collected into the month's side list.

use crate::{BirthdayEntry, BirthdayRegistry, CalendarYear, HolidayTable, RenderError};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Number of weekday columns
pub const WEEKDAYS: u16 = 7;

/// Position of one day inside its month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    /// Week block within the month, 0-based
    pub week: u32,
    /// ISO weekday minus one: Monday = 0 .. Sunday = 6
    pub weekday: u16,
}

/// A placed day with its holiday name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub position: GridPosition,
    /// Saturday or Sunday, rendered muted
    pub weekend: bool,
    pub holiday: Option<&'a str>,
}

impl DayCell<'_> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// All days of one month placed on the grid, plus its birthday side list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub month: u32,
    /// Every day of the month in ascending order
    pub days: Vec<DayCell<'a>>,
    /// Birthdays of the month in ascending day order
    pub birthdays: Vec<BirthdayEntry>,
}

impl MonthGrid<'_> {
    /// Number of week blocks the month occupies
    pub fn week_count(&self) -> u32 {
        self.days.last().map_or(0, |d| d.position.week + 1)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'_>> {
        self.days.get((day as usize).checked_sub(1)?)
    }
}

impl fmt::Display for MonthGrid<'_> {
    /// Compact text view: one line per week block, `.` for cells outside the month
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for week in 0..self.week_count() {
            if week > 0 {
                writeln!(f)?;
            }
            write!(f, "W{}", week + 1)?;
            for weekday in 0..WEEKDAYS {
                let cell = self
                    .days
                    .iter()
                    .find(|d| d.position == GridPosition { week, weekday });
                match cell {
                    Some(d) => write!(f, " {:>2}", d.day())?,
                    None => write!(f, "  .")?,
                }
            }
        }
        Ok(())
    }
}

fn weekday_column(date: NaiveDate) -> u16 {
    date.weekday().number_from_monday() as u16 - 1
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Place every day of `month` and join holidays and birthdays onto it
pub fn layout_month<'a>(
    year: CalendarYear,
    month: u32,
    holidays: &'a HolidayTable,
    birthdays: &BirthdayRegistry,
) -> Result<MonthGrid<'a>, RenderError> {
    let mut date = year
        .first_day(month)
        .ok_or_else(|| RenderError::InvalidData(format!("month {} does not exist", month)))?;

    let mut days = Vec::with_capacity(31);
    let mut side_list = Vec::new();
    let mut week = 0;

    loop {
        days.push(DayCell {
            date,
            position: GridPosition {
                week,
                weekday: weekday_column(date),
            },
            weekend: is_weekend(date),
            holiday: holidays.for_date(date),
        });

        for label in birthdays.labels_on(date) {
            side_list.push(BirthdayEntry {
                day: date.day(),
                label: label.clone(),
            });
        }

        let Some(next) = date.succ_opt() else { break };
        if next.month() != month {
            break;
        }
        if next.weekday() == Weekday::Mon {
            week += 1;
        }
        date = next;
    }

    Ok(MonthGrid {
        month,
        days,
        birthdays: side_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayMonth;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn year(y: i32) -> CalendarYear {
        CalendarYear::new(y).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_grid(y: i32, month: u32) -> MonthGrid<'static> {
        static NO_HOLIDAYS: std::sync::OnceLock<HolidayTable> = std::sync::OnceLock::new();
        let holidays = NO_HOLIDAYS.get_or_init(HolidayTable::new);
        layout_month(year(y), month, holidays, &BirthdayRegistry::new(year(y))).unwrap()
    }

    #[test]
    fn month_starting_on_sunday() {
        let grid = empty_grid(2024, 9);
        insta::assert_snapshot!(grid.to_string(), @r"
        W1  .  .  .  .  .  .  1
        W2  2  3  4  5  6  7  8
        W3  9 10 11 12 13 14 15
        W4 16 17 18 19 20 21 22
        W5 23 24 25 26 27 28 29
        W6 30  .  .  .  .  .  .
        ");
    }

    #[test]
    fn february_starting_on_monday_fills_four_weeks() {
        let grid = empty_grid(2021, 2);
        assert_eq!(grid.days.len(), 28);
        assert_eq!(grid.week_count(), 4);
        assert_eq!(grid.days[0].position, GridPosition { week: 0, weekday: 0 });
        assert_eq!(grid.days[27].position, GridPosition { week: 3, weekday: 6 });
    }

    #[test]
    fn every_month_maps_days_to_distinct_cells() {
        for y in [2020, 2021, 2023, 2024, 2025] {
            for month in 1..=12 {
                let grid = empty_grid(y, month);
                let last = grid.days.last().unwrap().date;
                assert_eq!(last.month(), month);
                assert!(last.succ_opt().unwrap().month() != month);

                let cells: HashSet<GridPosition> = grid.days.iter().map(|d| d.position).collect();
                assert_eq!(cells.len(), grid.days.len(), "{y}-{month} collides");

                for pair in grid.days.windows(2) {
                    let (prev, next) = (&pair[0], &pair[1]);
                    assert!(next.position.weekday < WEEKDAYS);
                    if next.date.weekday() == Weekday::Mon {
                        assert_eq!(next.position.week, prev.position.week + 1);
                    } else {
                        assert_eq!(next.position.week, prev.position.week);
                        assert_eq!(next.position.weekday, prev.position.weekday + 1);
                    }
                }
            }
        }
    }

    #[test]
    fn weeks_restart_on_each_page() {
        // 31 January 2024 is a Wednesday, 1 February a Thursday.
        let january = empty_grid(2024, 1);
        let february = empty_grid(2024, 2);
        assert_eq!(january.days.last().unwrap().position.weekday, 2);
        assert_eq!(
            february.days[0].position,
            GridPosition { week: 0, weekday: 3 }
        );
    }

    #[test]
    fn weekend_days_are_tagged() {
        let grid = empty_grid(2024, 6);
        // 1 June 2024 is a Saturday
        assert!(grid.day(1).unwrap().weekend);
        assert!(grid.day(2).unwrap().weekend);
        assert!(!grid.day(3).unwrap().weekend);
        assert_eq!(grid.day(3).unwrap().position, GridPosition { week: 1, weekday: 0 });
    }

    #[test]
    fn joins_holidays_and_birthdays() {
        let y = year(2024);
        let mut holidays = HolidayTable::new();
        holidays.insert(DayMonth::new(1, 1).unwrap(), "Nový rok");
        holidays.insert(DayMonth::new(6, 1).unwrap(), "Tři králové");
        holidays.insert(DayMonth::new(2, 2).unwrap(), "Nela");

        let mut birthdays = BirthdayRegistry::new(y);
        birthdays.insert("Tomáš", date(1995, 1, 20));
        birthdays.insert("Jana", date(2000, 1, 1));
        birthdays.insert("Eva", date(1999, 2, 1));

        let grid = layout_month(y, 1, &holidays, &birthdays).unwrap();
        assert_eq!(grid.day(1).unwrap().holiday, Some("Nový rok"));
        assert_eq!(grid.day(6).unwrap().holiday, Some("Tři králové"));
        assert_eq!(grid.day(2).unwrap().holiday, None);
        assert_eq!(
            grid.birthdays,
            vec![
                BirthdayEntry { day: 1, label: "Jana (24)".into() },
                BirthdayEntry { day: 20, label: "Tomáš (29)".into() },
            ]
        );
    }

    #[test]
    fn rejects_month_out_of_range() {
        let holidays = HolidayTable::new();
        let birthdays = BirthdayRegistry::new(year(2024));
        assert!(layout_month(year(2024), 13, &holidays, &birthdays).is_err());
        assert!(layout_month(year(2024), 0, &holidays, &birthdays).is_err());
    }
}
