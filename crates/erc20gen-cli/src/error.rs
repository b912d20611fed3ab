//! CLI errors, their exit codes and their rendering on stderr.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use erc20gen_core::error::{Erc20genError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or written, or it
    /// holds a value the generator does not understand.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation or rendering failure from `erc20gen-core`.
    #[error("{0}")]
    Core(#[from] Erc20genError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user aborted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), err)
    }
}

impl CliError {
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Show the file in use with 'erc20gen config path'".into(),
                "Regenerate the defaults with 'erc20gen init --force'".into(),
                "Check ERC20GEN_* environment variables".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check that the output directory is writable".into(),
                "Choose another location with --out".into(),
            ],
            Self::Cancelled => vec!["No files were written".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// Process exit code: 2 for user errors, 4 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error report with ANSI styling.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose, true)
    }

    /// Error report without escape codes, for redirected stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose, false)
    }

    /// ```text
    /// Error: validation error:
    ///   - token name is required
    ///
    /// Suggestions:
    ///   Fix the 1 problem(s) listed above and run the command again
    /// ```
    fn report(&self, verbose: bool, color: bool) -> String {
        let title = |s: &str| {
            if color {
                s.bold().to_string()
            } else {
                s.to_string()
            }
        };

        let mut out = String::from("\n");
        let headline = format!("Error: {self}");
        for line in headline.lines() {
            if color {
                out.push_str(&line.red().to_string());
            } else {
                out.push_str(line);
            }
            out.push('\n');
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  caused by: {err}");
                if color {
                    out.push_str(&line.dimmed().to_string());
                } else {
                    out.push_str(&line);
                }
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&title("Suggestions:"));
            out.push('\n');
            for s in suggestions {
                out.push_str("  ");
                out.push_str(&s);
                out.push('\n');
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }
        out
    }

    /// Emit one event at a level matching the category.
    pub fn log(&self) {
        let exit_code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(exit_code, "{self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code, "{self}");
                if let Some(source) = self.source() {
                    tracing::debug!("caused by: {source}");
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad flags, failed validation, or a cancelled prompt.
    UserError,
    Configuration,
    Internal,
}
