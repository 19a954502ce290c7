use anyhow::Result;
use clap::Parser;
use log::debug;

use shift_roster::cli::{Cli, commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("Starting shift-roster {}", env!("CARGO_PKG_VERSION"));

    commands::run(cli).await
}
