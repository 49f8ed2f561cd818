//! Relink - an environment-aware link rewriter for static sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod dom;
mod embed;
mod env;
mod logger;
mod pipeline;
mod utils;
mod watch;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Config, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = init_config(Config::load(cli)?);

    match &cli.command {
        Commands::Apply { dry_run } => cli::apply::run_apply(&config, *dry_run),
        Commands::Check { warn_only } => cli::check::run_check(&config, *warn_only),
        Commands::Watch {} => cli::watch::run_watch(&config),
        Commands::Detect { url, pretty } => cli::detect::run_detect(&config, url, *pretty),
    }
}
