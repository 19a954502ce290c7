//! Mapping grid-relative addresses onto weekly-tab cells

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::coordinates::{DayCoordinateTable, Weekday, week_tab};
use crate::error::RosterError;
use crate::sheets::{AddressError, CellAddress};

/// A cell qualified by its weekly tab, the form accepted by batch updates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AbsoluteCoordinate {
    pub tab: String,
    pub cell: CellAddress,
}

impl fmt::Display for AbsoluteCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.tab, self.cell)
    }
}

/// Translate `relative` (1-based inside the day grid, `A1` = the grid's first
/// cell) into the absolute cell of `date`'s weekly tab.
///
/// Only the start of the weekday's range matters; the end bound is not checked.
pub fn offset(
    table: &DayCoordinateTable,
    date: NaiveDate,
    relative: CellAddress,
) -> Result<AbsoluteCoordinate, RosterError> {
    let start = table.range_for(Weekday::of(date)).start;

    let row = start.row.checked_add(relative.row).ok_or_else(|| {
        RosterError::invalid_coordinate(
            relative.to_a1(),
            AddressError::InvalidRow(relative.to_a1()),
        )
    })?;
    let col = start.col.checked_add(relative.col).ok_or_else(|| {
        RosterError::invalid_coordinate(
            relative.to_a1(),
            AddressError::ColumnOutOfRange(relative.to_a1()),
        )
    })?;

    Ok(AbsoluteCoordinate {
        tab: week_tab(date),
        cell: CellAddress::new(row, col),
    })
}

/// [`offset`] for a textual relative address such as `B2`
pub fn offset_a1(
    table: &DayCoordinateTable,
    date: NaiveDate,
    relative: &str,
) -> Result<AbsoluteCoordinate, RosterError> {
    let relative_addr = CellAddress::parse(relative)
        .map_err(|e| RosterError::invalid_coordinate(relative, e))?;
    offset(table, date, relative_addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::coordinates::tests::{layout_rows, layout_table};

    /// Monday 2024-03-11, ISO week 11; Monday's range starts at A9
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    #[test]
    fn test_a1_is_the_identity_offset() {
        let abs = offset_a1(&layout_table(), monday(), "A1").unwrap();
        assert_eq!(abs.cell.row_number(), 9);
        assert_eq!(abs.cell.column_letters(), "A");
        assert_eq!(abs.to_string(), "11!A9");
    }

    #[test]
    fn test_b2_moves_one_row_and_one_column() {
        let abs = offset_a1(&layout_table(), monday(), "B2").unwrap();
        assert_eq!(abs.cell.row_number(), 10);
        assert_eq!(abs.cell.column_letters(), "B");
        assert_eq!(abs.to_string(), "11!B10");
    }

    #[test]
    fn test_offset_from_non_a_start_column() {
        // Tuesday 2024-03-12 starts at H9
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let abs = offset_a1(&layout_table(), tuesday, "C4").unwrap();
        assert_eq!(abs.to_string(), "11!J12");
    }

    #[test]
    fn test_week_tab_follows_iso_numbering() {
        // Monday 2024-12-30 is in ISO week 1 of 2025
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let abs = offset_a1(&layout_table(), date, "A1").unwrap();
        assert_eq!(abs.to_string(), "1!A9");
    }

    #[test]
    fn test_offset_past_column_z() {
        // H + 20 columns = AB
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let relative = CellAddress::new(0, 20);
        let abs = offset(&layout_table(), tuesday, relative).unwrap();
        assert_eq!(abs.to_string(), "11!AB9");
    }

    #[test]
    fn test_offset_onto_the_last_sheet_row() {
        let mut rows = layout_rows();
        rows[0][0] = "A4294967295".to_string();
        let table = DayCoordinateTable::from_rows(&rows).unwrap();
        let abs = offset_a1(&table, monday(), "B2").unwrap();
        assert_eq!(abs.cell, CellAddress::new(u32::MAX, 1));
        assert_eq!(abs.to_string(), "11!B4294967296");

        assert!(matches!(
            offset_a1(&table, monday(), "B3"),
            Err(RosterError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_unparsable_relative_address() {
        for bad in ["", "12", "B", "B-2"] {
            assert!(matches!(
                offset_a1(&layout_table(), monday(), bad),
                Err(RosterError::InvalidCoordinate { .. })
            ));
        }
    }
}
