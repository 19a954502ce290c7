//! Locating an operator inside a day's roster grid

use log::warn;

use crate::error::RosterError;
use crate::sheets::{CellAddress, Grid};

/// Find `name` in `grid`, returning its grid-relative address (`A1` is the
/// grid's top-left cell).
///
/// Matching is case-insensitive and exact. The whole grid is scanned row by row;
/// when the name appears more than once the last occurrence wins. A blank name
/// is rejected, it would otherwise match any empty cell.
pub fn resolve(grid: &Grid, name: &str) -> Result<CellAddress, RosterError> {
    if name.trim().is_empty() {
        return Err(RosterError::EmptyName);
    }
    let needle = name.to_lowercase();
    let mut found: Option<CellAddress> = None;
    let mut matches = 0usize;

    for (row_index, row) in grid.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            if cell.to_lowercase() == needle {
                matches += 1;
                found = Some(CellAddress::new(row_index as u32, col_index as u32));
            }
        }
    }

    if matches > 1 {
        warn!(
            "'{}' appears {} times in roster grid, using last match {}",
            name,
            matches,
            found.map(|a| a.to_a1()).unwrap_or_default()
        );
    }

    found.ok_or_else(|| RosterError::NotFound {
        name: name.to_string(),
    })
}
