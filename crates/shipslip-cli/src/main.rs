mod commands;
mod error;
mod input;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use shipslip_config as config;
use shipslip_core::Extractor;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{extract, fill, keywords, Context};
use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(
    name = "shipslip",
    version,
    about = "Pull name, phone and address out of pasted contact text"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract name, phone and address from pasted text
    Extract(extract::ExtractArgs),
    /// Apply pasted text to a contact/address display pair
    Fill(fill::FillArgs),
    /// Show the effective label keywords
    Keywords,
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

    let keyword_set = app_config
        .keyword_set()
        .with_context(|| "compile keywords")?;
    let extractor = Extractor::new(keyword_set);
    let ctx = Context {
        json,
        config: &app_config,
        extractor: &extractor,
    };

    match command {
        Command::Extract(args) => extract::extract(&ctx, args),
        Command::Fill(args) => fill::fill(&ctx, args),
        Command::Keywords => keywords::show_keywords(&ctx),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
