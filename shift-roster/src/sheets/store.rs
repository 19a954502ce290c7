//! Backing-store abstraction over a single spreadsheet document

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rectangular (possibly ragged) block of cell values, row-major
pub type Grid = Vec<Vec<String>>;

/// A single cell write inside a batch update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    /// Fully qualified A1 reference (e.g. `11!B10`)
    pub range: String,
    /// Value written as if typed by a user
    pub value: String,
}

impl CellUpdate {
    pub fn new(range: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            value: value.into(),
        }
    }
}

/// Transport-level failures reported by a [`SheetStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned {status} for '{range}': {body}")]
    Status {
        status: u16,
        range: String,
        body: String,
    },

    #[error("failed to decode Sheets API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no value found in cell '{0}'")]
    EmptyCell(String),

    #[error("{0}")]
    Other(String),
}

/// The four primitives the roster engine needs from a spreadsheet.
///
/// Implementations make no transactional promise: a batch update that fails
/// half-way may leave some cells written.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Read every value inside an A1 range (`Sheet!A1:B2`)
    async fn read_range(&self, range: &str) -> Result<Grid, StoreError>;

    /// Read the top-left value of a range. An empty or missing cell is an error.
    async fn read_cell(&self, range: &str) -> Result<String, StoreError> {
        let grid = self.read_range(range).await?;
        match grid.first().and_then(|row| row.first()) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(StoreError::EmptyCell(range.to_string())),
        }
    }

    /// Append rows after the table anchored at `range`
    async fn append_rows(
        &self,
        range: &str,
        rows: Vec<Vec<serde_json::Value>>,
    ) -> Result<(), StoreError>;

    /// Write several cells in one request
    async fn batch_update_cells(&self, updates: &[CellUpdate]) -> Result<(), StoreError>;
}
