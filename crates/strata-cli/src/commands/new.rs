//! Implementation of the `strata new` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call the
//! core scaffold service, and display results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::{FailurePolicy, ScaffoldService},
    domain::{LayoutRegistry, ScaffoldPlan},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strata new` command.
///
/// Dispatch sequence:
/// 1. Pick category and name from positionals or flags
/// 2. Resolve output root and failure policy (flags over config)
/// 3. Validate and plan without touching disk
/// 4. Early-exit if `--dry-run`
/// 5. Confirm on a terminal unless `--yes` or `--quiet`
/// 6. Materialize and report
#[instrument(skip_all, fields(category = ?args.category(), name = ?args.feature_name()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Inputs
    let category = args
        .category()
        .ok_or_else(|| CliError::invalid_input("missing feature category"))?;
    let name = args
        .feature_name()
        .ok_or_else(|| CliError::invalid_input("missing feature name"))?;

    // 2. Settings
    let output_root = resolve_output_root(args.root.as_deref(), &config);
    let policy = resolve_policy(args.rollback, &config);
    debug!(output_root = %output_root.display(), ?policy, "Settings resolved");

    // 3. Plan
    let service = ScaffoldService::new(
        LayoutRegistry::builtin(),
        Box::new(LocalFilesystem::new()),
        &output_root,
    )
    .with_failure_policy(policy);

    let request = ScaffoldService::request_from_raw(category, name)?;
    let plan = service.plan(&request)?;
    let location = output_root.join(plan.base_path());

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return report_dry_run(&plan, &location, &output);
    }

    // 5. Confirm
    if !args.yes && !global.quiet && !output.is_json() && std::io::stdin().is_terminal() {
        output.header("Scaffold")?;
        output.print(&format!("  Category: {}", plan.category()))?;
        output.print(&format!("  Name:     {}", plan.name()))?;
        output.print(&format!("  Location: {}", location.display()))?;
        output.print("")?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Materialize
    let tree = args.tree.then(|| plan.render_tree());
    info!(path = %location.display(), "Scaffold started");
    let result = service.apply(plan)?;

    if output.is_json() {
        return output.json(&result);
    }

    output.success(&format!(
        "Created {} '{}' at {}",
        result.category,
        result.name,
        location.display()
    ))?;
    output.print(&format!(
        "  {} directories, {}",
        result.created_directories.len(),
        result.readme_path().display()
    ))?;
    if let Some(tree) = tree {
        output.print("")?;
        output.print(tree.trim_end())?;
    }

    Ok(())
}

// ── Settings ──────────────────────────────────────────────────────────────────

fn resolve_output_root(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.generation.output_root.clone())
}

fn resolve_policy(flag: bool, config: &AppConfig) -> FailurePolicy {
    if flag || config.generation.rollback_on_failure {
        FailurePolicy::Rollback
    } else {
        FailurePolicy::Abort
    }
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Machine-readable dry-run output.
#[derive(Debug, Serialize)]
struct DryRunReport<'a> {
    dry_run: bool,
    category: String,
    name: &'a str,
    base_path: String,
    directories: Vec<String>,
    readme: String,
}

fn report_dry_run(plan: &ScaffoldPlan, location: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let report = DryRunReport {
            dry_run: true,
            category: plan.category().to_string(),
            name: plan.name().as_str(),
            base_path: location.display().to_string(),
            directories: plan.directories().iter().map(|d| d.to_string()).collect(),
            readme: plan.readme().to_string(),
        };
        return output.json(&report);
    }

    output.info(&format!(
        "Dry run: would create {} '{}' at {}",
        plan.category(),
        plan.name(),
        location.display()
    ))?;
    output.print("")?;
    output.print(plan.render_tree().trim_end())?;
    Ok(())
}

// ── Confirmation ──────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
