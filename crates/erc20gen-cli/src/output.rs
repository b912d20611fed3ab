//! Terminal output for command results.
//!
//! Status lines and headers respect `--quiet`; artifact text and JSON
//! documents are the command's result and are always written.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Leading symbol of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Success,
    Warning,
    Info,
}

impl Marker {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        let symbol = self.symbol();
        match self {
            Self::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Self::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Self::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

/// Writes command output to stdout in the resolved format.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            // only the human format is ever coloured
            no_color: args.no_color || config.output.no_color || format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Artifact or value text, terminated by exactly one newline.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// Pretty-printed JSON document.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Marker::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Marker::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Marker::Info, msg)
    }

    /// Section title, bold cyan when coloured.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    /// The resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn status(&self, marker: Marker, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.status_line(marker, msg))
    }

    fn status_line(&self, marker: Marker, msg: &str) -> String {
        if self.no_color {
            format!("{} {msg}", marker.symbol())
        } else {
            marker.paint(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_status_lines() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
    }

    #[test]
    fn plain_status_line_has_symbol_only() {
        let out = manager(false, true, OutputFormat::Human);
        assert_eq!(out.status_line(Marker::Success, "written"), "\u{2713} written");
        assert_eq!(out.status_line(Marker::Warning, "exists"), "\u{26a0} exists");
    }

    #[test]
    fn coloured_status_line_carries_ansi() {
        let out = manager(false, false, OutputFormat::Human);
        assert!(out.status_line(Marker::Info, "x").contains('\u{1b}'));
    }

    #[test]
    fn only_human_format_is_coloured() {
        assert!(!manager(false, false, OutputFormat::Human).no_color);
        assert!(manager(false, false, OutputFormat::Plain).no_color);
        assert!(manager(false, false, OutputFormat::Json).no_color);
    }

    #[test]
    fn config_file_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(manager(false, false, OutputFormat::Json).format(), OutputFormat::Json);
    }
}
