//! CLI Adapter.

mod repl;

use std::env;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::app::{api, config, logging};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "desktop-calculator")]
#[command(version)]
#[command(
    about = "Evaluate integer expressions with named symbols",
    long_about = None
)]
struct Cli {
    /// Evaluate an expression and exit (repeatable; shares one symbol table)
    #[arg(short, long = "eval", value_name = "EXPR", allow_hyphen_values = true)]
    eval: Vec<String>,
    /// Path to a config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Do not read or write the history file
    #[arg(long)]
    no_history: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let config_path = config::resolve_config_path(cli.config.as_deref(), home.as_deref())?;
    let config = config::read_config(config_path.as_deref())?;
    logging::init(cli.verbose, &config.log.level);
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file, using defaults"),
    }

    let mut calculator = api::calculator_from_config(&config)?;
    debug!(symbols = config.symbols.len(), "calculator ready");

    if !cli.eval.is_empty() {
        let summary = api::evaluate_all(cli.eval, &mut calculator)?;
        return Ok(if summary.failed > 0 { 1 } else { 0 });
    }

    repl::run_repl(&config.repl, home.as_deref(), cli.no_history, &mut calculator)?;
    Ok(0)
}
