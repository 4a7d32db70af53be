//! Plan Configurator - terminal board for tiered protection plans
//!
//! Without a subcommand the interactive board opens. Subcommands price plans
//! and inspect settings without touching the terminal UI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use plan_configurator::cli::{CatalogArgs, CliResult, ConfigArgs, QuoteArgs};
use plan_configurator::logging::{self, LogTarget};
use plan_configurator::{app, config};

/// Plan Configurator - drag features between tiers and watch the monthly payment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feature catalog file (TOML) for the interactive board
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price every tier of a plan
    Quote(QuoteArgs),
    /// List the feature catalog
    Catalog(CatalogArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Quote(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        if let Err(e) = logging::init(&LogTarget::Stderr, cli.verbose) {
            eprintln!("Warning: {e:#}");
        }
        if let Err(e) = command.execute() {
            tracing::debug!(code = e.code.as_i32(), "command failed");
            eprintln!("Error: {e}");
            std::process::exit(e.code.as_i32());
        }
        return;
    }

    if let Err(e) = run_board(&cli) {
        tracing::error!(error = %format!("{e:#}"), "configurator exited with an error");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_board(cli: &Cli) -> Result<()> {
    // The board owns the terminal, so logs go to a file
    match logging::default_log_file() {
        Ok(path) => {
            if let Err(e) = logging::init(&LogTarget::File(path), cli.verbose) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Continuing with default settings.");
            config::Config::default()
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting configurator");
    app::launch_configurator(&config, cli.catalog.as_deref())
}
