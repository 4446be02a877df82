//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tape_inspector` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All inspection logic is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use tape_inspector::initialization::init_logger_with;
use tape_inspector::{run_inspection, Config};

fn main() -> Result<()> {
    // A .env in the working directory may hold TAPE_INSPECTOR_TARGET_URL / TAPE_INSPECTOR_TAPE
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_inspection(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("tape_inspector error: {:#}", e);
            process::exit(1);
        }
    }
}
