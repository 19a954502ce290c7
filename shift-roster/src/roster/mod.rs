//! Weekly roster grid addressing
//!
//! Turns "operator X on date D" into a concrete cell of the weekly tab that
//! holds D: the weekday layout gives the day grid, the grid scan gives the
//! operator's position inside it, and the offset maps that position back onto
//! the tab.

pub mod coordinates;
pub mod grid;
pub mod offset;
pub mod roles;

pub use coordinates::{DayCoordinateTable, Weekday, read_day, week_tab};
pub use grid::resolve;
pub use offset::{AbsoluteCoordinate, offset, offset_a1};
pub use roles::{OperatorRoles, operator_roles};
