//! # erc20gen CLI
//!
//! ERC-20 token generator: OpenZeppelin contracts, Hardhat deployment
//! scripts and Hardhat test skeletons.
//!
//! `main` loads `.env`, parses flags, installs the tracing subscriber,
//! layers the configuration, then hands the command to its handler. A
//! returned [`CliError`] is printed once on stderr and becomes the exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / system error          |
//! |  2   | User input or validation error   |
//! |  4   | Configuration error              |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompts;

fn main() -> ExitCode {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` creates the file `--config` names, so it cannot require it.
    let config_file = match &cli.command {
        Commands::Init(_) => None,
        _ => cli.global.config.as_ref(),
    };
    let config = match AppConfig::load(config_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Error: failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = !(cli.global.no_color || config.output.no_color);

    match run(cli, config, output) {
        Ok(()) => {
            info!("erc20gen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::Inspect(cmd) => commands::inspect::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Print `err` for the user and map it to a process exit code.
///
/// `color` is false when `--no-color`, `NO_COLOR` or `output.no_color` asked
/// for plain output.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout
    let tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", error_report(&err, verbose, color && tty));

    ExitCode::from(err.exit_code())
}

fn error_report(err: &CliError, verbose: bool, color: bool) -> String {
    if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }

    #[test]
    fn error_report_respects_disabled_colour() {
        let plain = error_report(&CliError::Cancelled, false, false);
        assert!(!plain.contains('\u{1b}'));
        assert!(error_report(&CliError::Cancelled, false, true).contains('\u{1b}'));
    }

    #[test]
    fn no_color_flag_parses_without_value() {
        let cli = Cli::parse_from(["erc20gen", "--no-color", "inspect", "--name", "T"]);
        assert!(cli.global.no_color);
    }
}
