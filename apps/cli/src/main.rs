#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod handlers;
mod render;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use geodex::domain::config::GeodexConfig;
use geodex::kernel::config::load_config;
use geodex_logger::{LevelFilter, Logger};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config: GeodexConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;

    let _log = Logger::from_config(
        env!("CARGO_BIN_NAME"),
        &config.logging,
        cli.verbose.then_some(LevelFilter::DEBUG),
    )?;

    handlers::run(cli.command, &config)
}
