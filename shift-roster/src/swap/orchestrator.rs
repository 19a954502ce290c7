//! Shift swap orchestration
//!
//! Reads both operators' day grids, locates each operator, maps both positions
//! onto their weekly tabs and writes each name into the other's cell with a
//! single batch update. Every backing-store call is attempted exactly once.
//!
//! There is no isolation: two swaps touching the same cells can interleave, and
//! a failed or partially applied write is not rolled back. Callers that need to
//! retry must retry the whole swap.

use log::{debug, info};
use uuid::Uuid;

use super::request::{ShiftSwapRequest, SwapInstruction, SwapParty, SwapWrite};
use crate::error::RosterError;
use crate::roster::{self, DayCoordinateTable};
use crate::sheets::{Grid, SheetStore};

pub struct ShiftSwapper<'a> {
    store: &'a dyn SheetStore,
    table: &'a DayCoordinateTable,
}

/// A party whose cell has been located
struct Located {
    /// Name as given in the request, written into the other cell
    name: String,
    /// Text of the matched cell
    cell_text: String,
    write_target: roster::AbsoluteCoordinate,
}

impl<'a> ShiftSwapper<'a> {
    pub fn new(store: &'a dyn SheetStore, table: &'a DayCoordinateTable) -> Self {
        Self { store, table }
    }

    /// Resolve both cells without writing anything
    pub async fn plan(&self, request: &ShiftSwapRequest) -> Result<SwapInstruction, RosterError> {
        let correlation_id = Uuid::new_v4();
        self.plan_with_id(request, correlation_id).await
    }

    /// Resolve both cells and submit the exchange as one batch update
    pub async fn execute(
        &self,
        request: &ShiftSwapRequest,
    ) -> Result<SwapInstruction, RosterError> {
        let correlation_id = Uuid::new_v4();
        let instruction = self.plan_with_id(request, correlation_id).await?;
        let updates = instruction.updates();

        self.store
            .batch_update_cells(&updates)
            .await
            .map_err(|source| RosterError::Write {
                ranges: updates
                    .iter()
                    .map(|u| u.range.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                source,
            })?;

        info!(
            "[{}] swapped '{}' at {} with '{}' at {}",
            correlation_id,
            instruction.first.replaces,
            instruction.first.coordinate,
            instruction.second.replaces,
            instruction.second.coordinate
        );
        Ok(instruction)
    }

    async fn plan_with_id(
        &self,
        request: &ShiftSwapRequest,
        correlation_id: Uuid,
    ) -> Result<SwapInstruction, RosterError> {
        let (first, second) = request.validate()?;
        debug!(
            "[{}] planning swap: '{}' on {} <-> '{}' on {}",
            correlation_id, first.name, first.date, second.name, second.date
        );

        let first_day = self.fetch_day(&first).await?;
        let second_day = self.fetch_day(&second).await?;

        let first_cell = self.locate(&first, &first_day)?;
        let second_cell = self.locate(&second, &second_day)?;
        debug!(
            "[{}] resolved {} -> {}, {} -> {}",
            correlation_id,
            first.name,
            first_cell.write_target,
            second.name,
            second_cell.write_target
        );

        Ok(SwapInstruction {
            first: SwapWrite {
                coordinate: first_cell.write_target,
                value: second_cell.name,
                replaces: first_cell.cell_text,
            },
            second: SwapWrite {
                coordinate: second_cell.write_target,
                value: first_cell.name,
                replaces: second_cell.cell_text,
            },
        })
    }

    async fn fetch_day(&self, party: &SwapParty<'_>) -> Result<Grid, RosterError> {
        roster::read_day(self.store, self.table, party.date)
            .await
            .map_err(|source| RosterError::GridFetch {
                side: party.side,
                date: party.date,
                source,
            })
    }

    fn locate(&self, party: &SwapParty<'_>, day: &Grid) -> Result<Located, RosterError> {
        let relative = roster::resolve(day, party.name).map_err(|e| match e {
            RosterError::NotFound { .. } => RosterError::OperatorNotFound {
                side: party.side,
                name: party.name.to_string(),
                date: party.date,
            },
            other => other,
        })?;
        let write_target = roster::offset(self.table, party.date, relative)?;
        let cell_text = day
            .get(relative.row as usize)
            .and_then(|row| row.get(relative.col as usize))
            .cloned()
            .unwrap_or_else(|| party.name.to_string());
        Ok(Located {
            name: party.name.to_string(),
            cell_text,
            write_target,
        })
    }
}
