//! `strata config`: read and write configuration values.

use std::path::{Path, PathBuf};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = target_path(global.config.as_ref());
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised = config
                    .to_toml()
                    .with_cli_context(|| "Failed to serialise config")?;
                output.data(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.data(&target_path(global.config.as_ref()).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// The file reads come from, or where `set` will create one.
fn target_path(explicit: Option<&PathBuf>) -> PathBuf {
    AppConfig::active_path(explicit).unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| unknown_key(key))
}

/// Update one key in `path`, keeping the file's other values. Environment
/// overrides are never written back.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut file_config = if path.exists() {
        AppConfig::from_file(path).with_cli_context(|| "Failed to read config file")?
    } else {
        AppConfig::default()
    };

    file_config.set(key, value).map_err(|reason| {
        if KNOWN_KEYS.contains(&key) {
            CliError::invalid_input(format!("{key}: {reason}"))
        } else {
            unknown_key(key)
        }
    })?;

    let toml = file_config
        .to_toml()
        .with_cli_context(|| "Failed to serialise config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

fn unknown_key(key: &str) -> CliError {
    CliError::config(format!(
        "Unknown config key '{key}' (known: {})",
        KNOWN_KEYS.join(", ")
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generation.output_root").unwrap(), ".");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_then_updates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/strata.toml");

        set_config_value(&path, "generation.output_root", "repo").unwrap();
        set_config_value(&path, "generation.rollback_on_failure", "true").unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.generation.output_root, PathBuf::from("repo"));
        assert!(cfg.generation.rollback_on_failure);
    }

    #[test]
    fn set_rejects_bad_value_and_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.toml");

        let bad = set_config_value(&path, "output.format", "xml").unwrap_err();
        assert_eq!(bad.exit_code(), 2);

        let unknown = set_config_value(&path, "nope", "x").unwrap_err();
        assert_eq!(unknown.exit_code(), 4);
        assert!(!path.exists());
    }
}
