//! Weekday layout of the weekly roster tabs
//!
//! Every ISO week has its own tab, named after the week number. Inside a tab each
//! weekday's roster lives in a fixed sub-range, the same for every week. The
//! seven sub-ranges are kept in a configuration range of the spreadsheet, one
//! `start | end` row per weekday. The rows run Monday to Saturday with Sunday
//! last, while [`Weekday`] numbers days from Sunday = 0.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::error::RosterError;
use crate::sheets::{CellAddress, CellRange, Grid, SheetStore, StoreError};

/// Day of the week, numbered from Sunday = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Row order of the configured weekday range
    pub const TABLE_ORDER: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Tab holding the roster for the ISO week containing `date`
pub fn week_tab(date: NaiveDate) -> String {
    date.iso_week().week().to_string()
}

/// Relative range of each weekday's roster grid inside a weekly tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCoordinateTable {
    ranges: [CellRange; 7],
}

impl DayCoordinateTable {
    /// Read the configured weekday range and build the table from it
    pub async fn build(store: &dyn SheetStore, weekday_range: &str) -> Result<Self, RosterError> {
        let rows = store
            .read_range(weekday_range)
            .await
            .map_err(|e| RosterError::Configuration {
                reason: format!("cannot read weekday range '{}'", weekday_range),
                source: Some(e),
            })?;
        let table = Self::from_rows(&rows)?;
        debug!("Loaded day coordinate table from '{}'", weekday_range);
        Ok(table)
    }

    /// Build from an in-memory table of `[start, end]` rows in
    /// [`Weekday::TABLE_ORDER`].
    ///
    /// Exactly seven rows are required; extra columns in a row are ignored.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, RosterError> {
        if rows.len() != Weekday::TABLE_ORDER.len() {
            return Err(RosterError::configuration(format!(
                "expected {} weekday rows, found {}",
                Weekday::TABLE_ORDER.len(),
                rows.len()
            )));
        }

        let origin = CellAddress::new(0, 0);
        let mut ranges = [CellRange::new(origin, origin); 7];
        for (day, row) in Weekday::TABLE_ORDER.iter().zip(rows) {
            let (start, end) = match row.as_slice() {
                [start, end, ..] => (start.trim(), end.trim()),
                _ => {
                    return Err(RosterError::configuration(format!(
                        "{} row needs a start and an end cell, found {} value(s)",
                        day,
                        row.len()
                    )));
                }
            };
            let range = CellRange::parse(&format!("{}:{}", start, end)).map_err(|e| {
                RosterError::Configuration {
                    reason: format!("{} range '{}:{}' is not valid: {}", day, start, end, e),
                    source: None,
                }
            })?;
            ranges[day.index()] = range;
        }

        Ok(Self { ranges })
    }

    /// Replace all seven ranges at once. On error the table is left untouched.
    pub fn rebuild(&mut self, rows: &[Vec<String>]) -> Result<(), RosterError> {
        *self = Self::from_rows(rows)?;
        Ok(())
    }

    pub fn range_for(&self, day: Weekday) -> CellRange {
        self.ranges[day.index()]
    }

    /// Absolute range of the roster grid for `date` (`<week>!<start>:<end>`)
    pub fn day_range(&self, date: NaiveDate) -> String {
        format!("{}!{}", week_tab(date), self.range_for(Weekday::of(date)))
    }

    /// Ranges in the row order of the configured table
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, CellRange)> + '_ {
        Weekday::TABLE_ORDER
            .iter()
            .map(|day| (*day, self.range_for(*day)))
    }
}

/// Fetch the roster grid of the weekday `date` falls on, from its ISO week tab
pub async fn read_day(
    store: &dyn SheetStore,
    table: &DayCoordinateTable,
    date: NaiveDate,
) -> Result<Grid, StoreError> {
    let range = table.day_range(date);
    debug!("Reading roster day {} from '{}'", date, range);
    store.read_range(&range).await
}
