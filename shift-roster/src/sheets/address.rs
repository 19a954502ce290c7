//! A1-style cell addressing
//!
//! The backing spreadsheet speaks in text (`B10`, `A9:F12`, `11!B10`); everything
//! inside the crate works on [`CellAddress`], which keeps the row and column as
//! integers so offset arithmetic never touches strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest column index accepted when parsing (`ZZZ`).
const MAX_COL: u32 = 18_277;

/// Errors produced while parsing an A1 reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty cell reference")]
    Empty,
    #[error("cell reference '{0}' has no column letters")]
    MissingColumn(String),
    #[error("cell reference '{0}' has no row number")]
    MissingRow(String),
    #[error("cell reference '{0}' has trailing characters")]
    TrailingCharacters(String),
    #[error("cell reference '{0}' has an invalid row number")]
    InvalidRow(String),
    #[error("cell reference '{0}' has a column past ZZZ")]
    ColumnOutOfRange(String),
    #[error("range '{0}' is not of the form START:END")]
    MalformedRange(String),
}

/// A single cell position.
///
/// Rows and columns are **0-indexed**: `row = 0` is sheet row `1`, `col = 0` is column `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: u32,
    pub col: u32,
}

impl CellAddress {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// 1-based row number as shown in the sheet
    pub fn row_number(&self) -> u64 {
        u64::from(self.row) + 1
    }

    /// Column letters (`A`, `Z`, `AA`, ...)
    pub fn column_letters(&self) -> String {
        col_to_name(self.col)
    }

    /// Parse an A1 reference such as `A9` or `ab12`.
    ///
    /// The column letter run must be followed by a digit run and nothing else.
    pub fn parse(a1: &str) -> Result<Self, AddressError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        let bytes = s.as_bytes();
        let letters_end = bytes
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(bytes.len());
        if letters_end == 0 {
            return Err(AddressError::MissingColumn(s.to_string()));
        }

        let digits_end = bytes[letters_end..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map(|p| letters_end + p)
            .unwrap_or(bytes.len());
        if digits_end == letters_end {
            return Err(AddressError::MissingRow(s.to_string()));
        }
        if digits_end != bytes.len() {
            return Err(AddressError::TrailingCharacters(s.to_string()));
        }

        let col = name_to_col(&s[..letters_end])
            .ok_or_else(|| AddressError::ColumnOutOfRange(s.to_string()))?;
        let row: u32 = s[letters_end..]
            .parse()
            .map_err(|_| AddressError::InvalidRow(s.to_string()))?;
        if row == 0 {
            return Err(AddressError::InvalidRow(s.to_string()));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Format as A1 text (`B10`)
    pub fn to_a1(&self) -> String {
        format!("{}{}", self.column_letters(), self.row_number())
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

impl FromStr for CellAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An inclusive `start:end` range with no sheet qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    pub const fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse `A9:F12`
    pub fn parse(range: &str) -> Result<Self, AddressError> {
        let (start, end) = range
            .trim()
            .split_once(':')
            .ok_or_else(|| AddressError::MalformedRange(range.to_string()))?;
        Ok(Self {
            start: CellAddress::parse(start)?,
            end: CellAddress::parse(end)?,
        })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Convert a 0-based column index to letters using bijective base 26.
pub fn col_to_name(col: u32) -> String {
    let mut n = u64::from(col) + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Convert column letters to a 0-based index. Case-insensitive.
pub fn name_to_col(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }
    let mut acc: u32 = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
        acc = acc.checked_mul(26)?.checked_add(val)?;
        if acc > MAX_COL + 1 {
            return None;
        }
    }
    Some(acc - 1)
}
