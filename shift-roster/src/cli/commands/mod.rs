//! Command handlers

pub mod license;
pub mod roster;
pub mod swap;
pub mod timecard;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::context::RosterContext;
use super::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::license::{IllnessReport, LicenseRequest, PermissionRequest};

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let ctx = RosterContext::load(config).await?;
    let format = cli.format;

    match cli.command {
        Commands::Swap(args) => swap::handle_swap_command(&ctx, args, format).await,
        Commands::Day { date } => roster::handle_day_command(&ctx, date, format).await,
        Commands::Locate { name, date } => {
            roster::handle_locate_command(&ctx, &name, date, format).await
        }
        Commands::Layout => roster::handle_layout_command(&ctx, format),
        Commands::Roles { name, date } => {
            roster::handle_roles_command(&ctx, &name, date, format).await
        }
        Commands::Timecard { file, dry_run } => {
            timecard::handle_timecard_command(&ctx, &file, dry_run, format).await
        }
        Commands::License(args) => {
            let anchor = &ctx.config.license.license_range;
            license::handle_leave_command::<LicenseRequest>(&ctx, &args, anchor, format).await
        }
        Commands::Illness(args) => {
            let anchor = &ctx.config.license.illness_range;
            license::handle_leave_command::<IllnessReport>(&ctx, &args, anchor, format).await
        }
        Commands::Permission(args) => {
            let anchor = &ctx.config.license.permission_range;
            license::handle_leave_command::<PermissionRequest>(&ctx, &args, anchor, format).await
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to format JSON output")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn is_json(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Json)
}

/// Print a sheet row as `a | b | c`
pub(crate) fn print_row(row: &[Value]) {
    let cells: Vec<String> = row
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    println!("  {}", cells.join(" | "));
}
