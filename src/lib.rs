//! ics2csv library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ics;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::{Config, Settings};
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI (usage errors exit here, before any file I/O)
    let cli = Cli::parse();

    // 2️⃣ load the config file once
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // 3️⃣ flags override config values
    let settings = Settings::resolve(&cli, &cfg)?;

    core::ConvertLogic::run(&settings)?;
    Ok(())
}
