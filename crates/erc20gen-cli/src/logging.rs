//! Tracing subscriber setup.
//!
//! The binary is the only place a subscriber is installed; `erc20gen-core`
//! and `erc20gen-adapters` only emit spans and events.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | warn  |
//! | `-v`      | info  |
//! | `-vv`     | debug |
//! | `-vvv`    | trace |
//! | `--quiet` | error |
//!
//! A set `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the computed filter.
const LOG_TARGETS: [&str; 3] = ["erc20gen", "erc20gen_core", "erc20gen_adapters"];

/// Install the global subscriber: stderr, compact, no targets.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(build_filter(args))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn build_filter(args: &GlobalArgs) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter_directive(level_for(args))),
    }
}

fn level_for(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// `erc20gen=debug,erc20gen_core=debug,...`
fn filter_directive(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn warn_without_flags() {
        assert_eq!(level_for(&flags(0, false)), "warn");
    }

    #[test]
    fn each_v_raises_the_level() {
        let levels: Vec<_> = (1..=4).map(|v| level_for(&flags(v, false))).collect();
        assert_eq!(levels, ["info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(&flags(3, true)), "error");
    }

    #[test]
    fn directive_names_every_crate() {
        assert_eq!(
            filter_directive("debug"),
            "erc20gen=debug,erc20gen_core=debug,erc20gen_adapters=debug"
        );
    }
}
