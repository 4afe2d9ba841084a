//! Everything the CLI writes to stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Stdout writer with the format, quiet and colour decisions made once.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `Auto` resolves to
    /// `Human` on a TTY and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };

        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; dropped in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(|| msg.to_owned())
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', Style::new().green(), msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', Style::new().yellow(), msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', Style::new().blue(), msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(|| self.paint(text, Style::new().cyan().bold()))
    }

    /// Print a value as pretty JSON. Never suppressed: JSON is the payload,
    /// not chatter.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Print raw data lines (`list --format csv`, `config get`). Never
    /// suppressed.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_json(&self) -> bool {
        self.format() == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn suppressed(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn emit(&self, line: impl FnOnce() -> String) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        self.term.write_line(&line())
    }

    fn marked(&self, mark: char, style: Style, msg: &str) -> io::Result<()> {
        self.emit(|| {
            format!(
                "{} {}",
                self.paint(&mark.to_string(), style.bold()),
                self.paint(msg, style)
            )
        })
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.style(style).to_string()
        }
    }
}
