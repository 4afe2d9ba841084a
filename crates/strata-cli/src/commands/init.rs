//! `strata init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default settings to the local or user config file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let target = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if target.exists() && !args.force {
        output.warning(&format!(
            "{} already exists; pass --force to replace it",
            target.display()
        ))?;
        return Ok(());
    }

    let body = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Cannot serialise the default settings")?;

    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_cli_context(|| format!("Cannot create {}", dir.display()))?;
    }
    std::fs::write(&target, body)
        .with_cli_context(|| format!("Cannot write {}", target.display()))?;

    output.success(&format!("Wrote default configuration to {}", target.display()))?;
    Ok(())
}
