//! `license`, `illness` and `permission` commands

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use serde::de::DeserializeOwned;

use super::{is_json, print_json, print_row};
use crate::cli::context::RosterContext;
use crate::cli::{LeaveArgs, OutputFormat};
use crate::license::{LeavePoster, LeaveRow};

pub async fn handle_leave_command<R>(
    ctx: &RosterContext,
    args: &LeaveArgs,
    anchor: &str,
    format: OutputFormat,
) -> Result<()>
where
    R: LeaveRow + DeserializeOwned,
{
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read request file: {}", args.file.display()))?;
    let request: R = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} request: {}", R::KIND, args.file.display()))?;

    let store = ctx.timecard_client()?;
    let poster = LeavePoster {
        store: &store,
        anchor,
    };
    let today = Local::now().date_naive();

    let result = if args.dry_run {
        poster.prepare(&request, today)
    } else {
        poster.post(&request, today).await
    };
    let row = result.with_context(|| format!("Failed to post {} request", R::KIND))?;

    if is_json(format) {
        return print_json(&row);
    }

    if args.dry_run {
        println!("{}", "Dry run, nothing appended:".yellow());
    } else {
        println!(
            "{} {} {}",
            R::KIND.bold(),
            "request appended at".bright_green(),
            anchor.cyan()
        );
    }
    print_row(&row);
    Ok(())
}
