//! Roster management over a weekly spreadsheet grid
//!
//! The spreadsheet holds one tab per ISO week; each weekday's roster occupies a
//! fixed sub-range of that tab. This crate locates operators in those grids,
//! swaps their shifts and posts timecards and leave requests, talking to the
//! Google Sheets API.

pub mod cli;
pub mod config;
pub mod error;
pub mod license;
pub mod roster;
pub mod sheets;
pub mod swap;
pub mod timecard;

pub use error::{RosterError, SwapSide};
