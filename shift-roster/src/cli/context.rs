//! Shared state for command handlers

use anyhow::{Context, Result};

use crate::config::Config;
use crate::roster::DayCoordinateTable;
use crate::sheets::SheetsClient;

/// Roster client plus the weekday layout, built once per invocation
pub struct RosterContext {
    pub config: Config,
    pub client: SheetsClient,
    pub table: DayCoordinateTable,
}

impl RosterContext {
    pub async fn load(config: Config) -> Result<Self> {
        let client = SheetsClient::new(config.roster_client_config())
            .context("Failed to create Sheets client")?;
        let table = DayCoordinateTable::build(&client, &config.roster.weekday_range)
            .await
            .context("Failed to load day coordinate table")?;
        Ok(Self {
            config,
            client,
            table,
        })
    }

    pub fn timecard_client(&self) -> Result<SheetsClient> {
        SheetsClient::new(self.config.timecard_client_config())
            .context("Failed to create timecard Sheets client")
    }
}
