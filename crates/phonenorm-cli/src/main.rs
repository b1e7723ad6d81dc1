mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{batch, check, countries, Context};
use crate::error::{exit_code_for, report_error};
use phonenorm_config as config;
use phonenorm_core::CountryTable;

#[derive(Debug, Parser)]
#[command(name = "phonenorm", version, about = "Normalize phone numbers to E.164")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON country table replacing the bundled one
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize and validate a single number
    Check(check::CheckArgs),
    /// Normalize one number per line
    Batch(batch::BatchArgs),
    /// List countries of the active table
    Countries(countries::CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        table: table_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let custom_table = match table_path.or_else(|| app_config.country_table.clone()) {
        Some(path) => {
            let table = CountryTable::from_path(&path)
                .with_context(|| format!("load country table {}", path.display()))?;
            debug!(path = %path.display(), countries = table.iter().len(), "country table loaded");
            Some(table)
        }
        None => None,
    };
    let table = custom_table
        .as_ref()
        .unwrap_or_else(|| CountryTable::default_table());

    let ctx = Context {
        table,
        json,
        config: &app_config,
    };

    match command {
        Command::Check(args) => check::check_number(&ctx, args),
        Command::Batch(args) => batch::normalize_batch(&ctx, args),
        Command::Countries(args) => countries::list_countries(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
