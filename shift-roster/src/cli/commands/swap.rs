//! `swap` command

use anyhow::{Context, Result};
use colored::*;

use super::{is_json, print_json};
use crate::cli::context::RosterContext;
use crate::cli::{OutputFormat, SwapArgs};
use crate::swap::{ShiftSwapRequest, ShiftSwapper, SwapInstruction};

pub async fn handle_swap_command(
    ctx: &RosterContext,
    args: SwapArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = ShiftSwapRequest::new(
        args.first_name,
        args.first_date,
        args.second_name,
        args.second_date,
    );
    let swapper = ShiftSwapper::new(&ctx.client, &ctx.table);

    let instruction = if args.dry_run {
        swapper
            .plan(&request)
            .await
            .context("Failed to plan shift swap")?
    } else {
        swapper
            .execute(&request)
            .await
            .context("Failed to swap shifts")?
    };

    if is_json(format) {
        return print_json(&instruction);
    }

    print_instruction(&instruction, args.dry_run);
    Ok(())
}

fn print_instruction(instruction: &SwapInstruction, dry_run: bool) {
    if dry_run {
        println!("{}", "Dry run, nothing written:".yellow());
    } else {
        println!("{}", "Shifts swapped:".bright_green().bold());
    }
    for write in [&instruction.first, &instruction.second] {
        println!(
            "  {} {} -> {}",
            write.coordinate.to_string().cyan(),
            write.replaces.dimmed(),
            write.value.bold()
        );
    }
}
