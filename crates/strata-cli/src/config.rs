//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `STRATA_*` environment variables, `__` between nested keys
//!    (`STRATA_GENERATION__OUTPUT_ROOT=./repo`)
//! 3. Config file: `--config`, else `./.strata.toml`, else the user config
//!    directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name used for per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Every key `config get`/`config set` understands.
pub const KNOWN_KEYS: &[&str] = &[
    "generation.output_root",
    "generation.rollback_on_failure",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scaffolding behaviour.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Directory the category roots (`apps/`, `gateways/`, ...) live under.
    pub output_root: PathBuf,
    /// Remove directories created by a failed run.
    pub rollback_on_failure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                output_root: PathBuf::from("."),
                rollback_on_failure: false,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the active file and the environment.
    ///
    /// An explicit `config_file` must exist; implicit locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file.filter(|p| !p.exists()) {
            anyhow::bail!("config file not found: {}", path.display());
        }

        let file = Self::active_path(config_file);
        debug!(file = ?file, "Loading configuration");
        Self::load_from(file.as_deref(), Environment::with_prefix("STRATA"))
    }

    /// Defaults overlaid with a single file, ignoring the environment.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let no_env = Environment::with_prefix("STRATA").source(Some(Default::default()));
        Self::load_from(Some(path), no_env)
    }

    /// Layer defaults, an optional file and an environment source.
    fn load_from(file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .context("Failed to serialise default configuration")?;

        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings = builder
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// The file configuration is read from, if any.
    ///
    /// `--config` wins; otherwise the first existing of `./.strata.toml` and
    /// the user config file.
    pub fn active_path(explicit: Option<&PathBuf>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.clone());
        }
        [Some(PathBuf::from(LOCAL_CONFIG_FILE)), Self::global_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file())
    }

    /// Path to the user-level configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Where `config set` writes when no file is active yet.
    pub fn config_path() -> PathBuf {
        Self::global_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Read a single dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "generation.output_root" => Some(self.generation.output_root.display().to_string()),
            "generation.rollback_on_failure" => {
                Some(self.generation.rollback_on_failure.to_string())
            }
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Set a single dotted key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "generation.output_root" => {
                if value.is_empty() {
                    return Err("output root cannot be empty".into());
                }
                self.generation.output_root = PathBuf::from(value);
            }
            "generation.rollback_on_failure" => {
                self.generation.rollback_on_failure = parse_bool(value)?;
            }
            "output.no_color" => self.output.no_color = parse_bool(value)?,
            "output.format" => {
                let value = value.to_ascii_lowercase();
                if !["auto", "human", "plain", "json"].contains(&value.as_str()) {
                    return Err(format!(
                        "'{value}' is not one of: auto, human, plain, json"
                    ));
                }
                self.output.format = value;
            }
            _ => return Err(format!("unknown key '{key}'")),
        }
        Ok(())
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("'{value}' is not a boolean")),
    }
}
