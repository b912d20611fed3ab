//! Flags accepted by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

/// Verbosity, colour, config file and output format.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace. Warnings and errors are always
    /// logged.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and command results (artifacts, JSON, values).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable ANSI colours; any non-empty `NO_COLOR` other than a falsey
    /// value (`0`, `false`, `no`, `off`) does the same.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        global = true
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations.
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// How results are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto, global = true)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured, for terminals.
    Human,
    /// No colour, for pipes and files.
    Plain,
    /// Machine-readable (`inspect` only; other commands print plain text).
    Json,
}
