//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv one line per directory, -vvv every filesystem call
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour (also set by NO_COLOR, see https://no-color.org)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of ./.strata.toml or the user config
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rendering of command results on stdout
    #[arg(long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,

    /// Append uncoloured logs to FILE as well as stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering mode for stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Coloured text
    Human,
    /// Text without colour
    Plain,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Map an `output.format` config value; anything unrecognised is `Auto`.
    pub fn from_config(value: &str) -> Self {
        let value = value.trim();
        [
            ("human", Self::Human),
            ("plain", Self::Plain),
            ("json", Self::Json),
        ]
        .into_iter()
        .find_map(|(name, format)| value.eq_ignore_ascii_case(name).then_some(format))
        .unwrap_or_default()
    }
}
