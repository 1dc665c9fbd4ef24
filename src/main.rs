// src/main.rs
//
// Validate --loglevel and bring up logging

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bootlog::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = bootlog::run(&args)?;

    info!(
        level = %config.level,
        rank = config.level.rank(),
        format = %config.format,
        "logging initialized"
    );
    Ok(())
}
