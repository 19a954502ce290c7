//! Spreadsheet access: A1 addressing, the backing-store trait and its HTTP client

pub mod address;
pub mod client;
pub mod limiter;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use address::{AddressError, CellAddress, CellRange};
pub use client::{SheetsClient, SheetsClientConfig};
pub use store::{CellUpdate, Grid, SheetStore, StoreError};
