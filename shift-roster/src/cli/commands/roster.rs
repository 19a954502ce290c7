//! Read-only roster commands: `day`, `locate`, `layout`, `roles`

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use colored::*;
use serde_json::json;

use super::{is_json, print_json};
use crate::cli::OutputFormat;
use crate::cli::context::RosterContext;
use crate::roster::{self, Weekday};

pub async fn handle_day_command(
    ctx: &RosterContext,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let grid = roster::read_day(&ctx.client, &ctx.table, date)
        .await
        .with_context(|| format!("Failed to read roster day {}", date))?;

    if is_json(format) {
        return print_json(&grid);
    }

    println!(
        "{} {} ({})",
        Weekday::of(date).to_string().bold(),
        date,
        ctx.table.day_range(date).cyan()
    );
    if grid.is_empty() {
        println!("{}", "No entries".dimmed());
    }
    for row in &grid {
        println!("  {}", row.join(" | "));
    }
    Ok(())
}

pub async fn handle_locate_command(
    ctx: &RosterContext,
    name: &str,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let grid = roster::read_day(&ctx.client, &ctx.table, date)
        .await
        .with_context(|| format!("Failed to read roster day {}", date))?;
    let relative = roster::resolve(&grid, name)
        .with_context(|| format!("'{}' is not rostered on {}", name, date))?;
    let absolute = roster::offset(&ctx.table, date, relative)?;

    if is_json(format) {
        return print_json(&json!({
            "name": name,
            "date": date,
            "relative": relative.to_a1(),
            "absolute": absolute.to_string(),
        }));
    }

    println!(
        "{} on {}: {} (grid {})",
        name.bold(),
        date,
        absolute.to_string().bright_green(),
        relative.to_a1().dimmed()
    );
    Ok(())
}

pub fn handle_layout_command(ctx: &RosterContext, format: OutputFormat) -> Result<()> {
    if is_json(format) {
        let layout: Vec<_> = ctx
            .table
            .iter()
            .map(|(day, range)| json!({ "weekday": day.to_string(), "range": range.to_string() }))
            .collect();
        return print_json(&layout);
    }

    for (day, range) in ctx.table.iter() {
        println!("{:<10} {}", day.to_string(), range.to_string().cyan());
    }
    Ok(())
}

pub async fn handle_roles_command(
    ctx: &RosterContext,
    name: &str,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let Some(roles_range) = ctx.config.roster.roles_range.as_deref() else {
        bail!("No roles range configured (set ROSTER_ROLES_RANGE or roster.roles_range)");
    };

    let grid = roster::read_day(&ctx.client, &ctx.table, date)
        .await
        .with_context(|| format!("Failed to read roster day {}", date))?;
    let roles = roster::operator_roles(&ctx.client, &grid, name, roles_range)
        .await
        .with_context(|| format!("Failed to read roles of '{}' on {}", name, date))?;

    if is_json(format) {
        return print_json(&roles);
    }

    println!("{} on {}", name.bold(), date);
    println!("  Location: {}", roles.location);
    println!("  Shift:    {}", roles.shift);
    println!("  Vehicle:  {}", roles.vehicle);
    println!("  Role:     {}", roles.role);
    Ok(())
}
