//! Command-line surface of the `strata` binary.
//!
//! Argument names, aliases and help text live here and nowhere else; the
//! handlers in `commands` receive already-parsed structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

const ROOT_EXAMPLES: &str = "\
Examples:
  strata new gateway api
  strata new service billing --root ./monorepo --dry-run
  strata list --format json
  strata completions bash > ~/.local/share/bash-completion/completions/strata";

/// Scaffold feature directories in a multi-service codebase
///
/// Creates the standard directory layout for a new app, gateway, service or
/// web feature, plus a README describing it.
#[derive(Debug, Parser)]
#[command(
    name = "strata",
    version,
    author,
    after_help = ROOT_EXAMPLES,
    arg_required_else_help = true,
    subcommand_required = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new feature
    #[command(
        visible_alias = "n",
        after_help = "Examples:\n  \
            strata new gateway api            # ./gateways/gateway-api\n  \
            strata new --feat app --name users\n  \
            strata new web dashboard --tree --dry-run"
    )]
    New(NewArgs),

    /// Show every feature category with its root and directories
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Write a configuration file holding the defaults
    #[command(after_help = "Examples:\n  \
            strata init            # user config directory\n  \
            strata init --local    # ./.strata.toml")]
    Init(InitArgs),

    /// Print a completion script for SHELL on stdout
    Completions(CompletionsArgs),

    /// Read or change configuration values
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Feature category: app, gateway, service or web
    pub category: Option<String>,

    /// Feature name; the directory becomes <CATEGORY>-<NAME>
    pub name: Option<String>,

    /// Category given as a flag instead of positionally
    #[arg(long, value_name = "CATEGORY", conflicts_with = "category")]
    pub feat: Option<String>,

    /// Name given as a flag instead of positionally
    #[arg(long = "name", value_name = "NAME", conflicts_with = "name")]
    pub name_flag: Option<String>,

    /// Directory holding the category roots [default: generation.output_root, else .]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report what would be created and stop
    #[arg(long)]
    pub dry_run: bool,

    /// Print the feature's directory tree
    #[arg(long)]
    pub tree: bool,

    /// Remove what this run created if it fails part-way
    #[arg(long)]
    pub rollback: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl NewArgs {
    /// Category from the positional or the `--feat` flag.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().or(self.feat.as_deref())
    }

    /// Name from the positional or the `--name` flag.
    pub fn feature_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.name_flag.as_deref())
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns with the directory list under each category
    Table,
    /// Category names only
    List,
    Json,
    /// category,root_namespace,directories
    Csv,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write ./.strata.toml instead of the user config file
    #[arg(long)]
    pub local: bool,

    /// Replace a file that already exists
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `strata config get generation.output_root`
    Get { key: String },
    /// Store a value in the active configuration file
    Set { key: String, value: String },
    /// Print the effective configuration
    List,
    /// Print which configuration file is in use
    Path,
}
