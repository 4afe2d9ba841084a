//! # Strata CLI
//!
//! Scaffolds feature directories (`apps/app-<name>`, `gateways/gateway-<name>`,
//! ...) in a multi-service codebase.
//!
//! Start-up runs in a fixed order: `.env`, argument parsing, tracing, config,
//! output, then the command. Every failure after parsing is a [`CliError`]
//! and leaves through [`report`].
//!
//! ## Exit codes
//!
//! | Code | Meaning                      |
//! |------|------------------------------|
//! |  0   | Success                      |
//! |  1   | Internal / filesystem error  |
//! |  2   | User / input error           |
//! |  3   | Unknown feature category     |
//! |  4   | Configuration error          |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

/// How errors are printed once start-up got far enough to know.
#[derive(Debug, Clone, Copy)]
struct ErrorStyle {
    verbose: bool,
    no_color: bool,
}

fn main() -> ExitCode {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors go to stderr (exit 2); --help and --version to
            // stdout (exit 0).
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        config = ?cli.global.config,
        "CLI started"
    );

    let mut style = ErrorStyle {
        verbose: cli.global.verbose > 0,
        no_color: cli.global.no_color,
    };

    let config = match AppConfig::load(cli.global.config.as_ref())
        .with_cli_context(|| "Failed to load configuration")
    {
        Ok(config) => config,
        Err(e) => return report(e, style),
    };

    let output = OutputManager::new(&cli.global, &config);
    style.no_color |= !output.supports_color();

    match run(cli, config, output) {
        Ok(()) => {
            info!("Strata completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, style),
    }
}

/// Dispatch to the command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Log the error, print it on stderr and pick the exit code.
fn report(err: CliError, style: ErrorStyle) -> ExitCode {
    err.log();

    let text = if !style.no_color && std::io::stderr().is_terminal() {
        err.format_colored(style.verbose)
    } else {
        err.format_plain(style.verbose)
    };
    eprint!("{text}");

    ExitCode::from(err.exit_code())
}
