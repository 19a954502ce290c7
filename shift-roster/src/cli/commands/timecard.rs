//! `timecard` command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;

use super::{is_json, print_json, print_row};
use crate::cli::OutputFormat;
use crate::cli::context::RosterContext;
use crate::timecard::{ShiftReport, TimecardPoster};

pub async fn handle_timecard_command(
    ctx: &RosterContext,
    file: &Path,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read report file: {}", file.display()))?;
    let mut report: ShiftReport = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse report file: {}", file.display()))?;

    let timecards = ctx.timecard_client()?;
    let poster = TimecardPoster {
        roster: &ctx.client,
        table: &ctx.table,
        roles_range: ctx.config.roster.roles_range.as_deref(),
        timecards: &timecards,
        anchor: &ctx.config.timecard.range,
    };
    let today = Local::now().date_naive();

    let row = if dry_run {
        poster
            .prepare(&mut report, today)
            .await
            .context("Failed to prepare timecard")?
    } else {
        poster
            .post(report, today)
            .await
            .context("Failed to post timecard")?
    };

    if is_json(format) {
        return print_json(&row);
    }

    if dry_run {
        println!("{}", "Dry run, nothing appended:".yellow());
    } else {
        println!(
            "{} {}",
            "Timecard appended at".bright_green(),
            ctx.config.timecard.range.cyan()
        );
    }
    print_row(&row);
    Ok(())
}
