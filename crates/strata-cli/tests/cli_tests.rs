//! End-to-end tests for the `strata` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `strata` invocation isolated from the host's config and environment.
fn strata(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STRATA_GENERATION__OUTPUT_ROOT")
        .env_remove("STRATA_GENERATION__ROLLBACK_ON_FAILURE")
        .env_remove("STRATA_OUTPUT__NO_COLOR")
        .env_remove("STRATA_OUTPUT__FORMAT");
    cmd
}

const GATEWAY_DIRS: [&str; 7] = [
    "cmd",
    "internal/domain",
    "internal/service",
    "internal/infrastructure/http",
    "internal/infrastructure/events",
    "internal/infrastructure/grpc",
    "pkg/types",
];

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_gateway_creates_layout_and_readme() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "gateway", "api", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gateway-api"));

    let base = temp.path().join("gateways/gateway-api");
    for dir in GATEWAY_DIRS {
        assert!(base.join(dir).is_dir(), "missing {dir}");
    }
    let readme = std::fs::read_to_string(base.join("README.md")).unwrap();
    assert_eq!(
        readme,
        "# gateway api\n\nAuto-generated gateway named \"api\".\n\nPath:\ngateways/gateway-api\n"
    );
}

#[test]
fn new_accepts_flag_forms() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "--feat", "app", "--name", "users"])
        .assert()
        .success();

    assert!(temp.path().join("apps/app-users/internal/infrastructure/repository").is_dir());
    assert!(temp.path().join("apps/app-users/README.md").is_file());
}

#[test]
fn new_rejects_non_canonical_category_spelling() {
    let temp = TempDir::new().unwrap();
    for category in ["WEB", "GATEWAY"] {
        strata(temp.path())
            .args(["new", category, "site", "--yes"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(category));
    }

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn new_respects_root_flag() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "service", "billing", "--root", "monorepo"])
        .assert()
        .success();

    assert!(temp.path().join("monorepo/services/service-billing/pkg/types").is_dir());
    assert!(!temp.path().join("services").exists());
}

#[test]
fn rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();
    for _ in 0..2 {
        strata(temp.path())
            .args(["new", "gateway", "api"])
            .assert()
            .success();
    }
    assert!(temp.path().join("gateways/gateway-api/README.md").is_file());
}

#[test]
fn dry_run_prints_tree_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "gateway", "api", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("├── internal/"))
        .stdout(predicate::str::contains("└── README.md"));

    assert!(!temp.path().join("gateways").exists());
}

#[test]
fn tree_flag_prints_tree_after_creation() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["new", "web", "dashboard", "--tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web/web-dashboard/"))
        .stdout(predicate::str::contains("public/"));
}

#[test]
fn json_output_describes_result() {
    let temp = TempDir::new().unwrap();
    let assert = strata(temp.path())
        .args(["--output-format", "json", "new", "gateway", "api"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["category"], "gateway");
    assert_eq!(json["name"], "api");
    assert_eq!(json["base_path"], "gateways/gateway-api");
    assert_eq!(json["created_directories"].as_array().unwrap().len(), 7);
    assert_eq!(json["readme_written"], true);
}

#[test]
fn list_shows_every_category() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("apps/app-<name>"))
        .stdout(predicate::str::contains("gateways/gateway-<name>"))
        .stdout(predicate::str::contains("services/service-<name>"))
        .stdout(predicate::str::contains("web/web-<name>"));
}

#[test]
fn list_json_has_four_layouts() {
    let temp = TempDir::new().unwrap();
    let assert = strata(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let layouts = json.as_array().unwrap();
    assert_eq!(layouts.len(), 4);
    assert_eq!(layouts[3]["category"], "web");
    assert_eq!(layouts[3]["root_namespace"], "web");
    assert_eq!(layouts[3]["directories"].as_array().unwrap().len(), 6);
}

#[test]
fn list_csv_has_header() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("category,root_namespace,directories"))
        .stdout(predicate::str::contains("gateway,gateways,cmd;internal/domain"));
}

#[test]
fn init_local_then_config_drives_new() {
    let temp = TempDir::new().unwrap();

    strata(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(temp.path().join(".strata.toml").is_file());

    strata(temp.path())
        .args(["config", "set", "generation.output_root", "repo"])
        .assert()
        .success();

    strata(temp.path())
        .args(["config", "get", "generation.output_root"])
        .assert()
        .success()
        .stdout(predicate::str::diff("repo\n"));

    strata(temp.path())
        .args(["new", "app", "orders"])
        .assert()
        .success();
    assert!(temp.path().join("repo/apps/app-orders/cmd").is_dir());
}

#[test]
fn init_twice_without_force_keeps_file() {
    let temp = TempDir::new().unwrap();
    strata(temp.path()).args(["init", "--local"]).assert().success();
    std::fs::write(temp.path().join(".strata.toml"), "# mine\n").unwrap();

    strata(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(temp.path().join(".strata.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn environment_overrides_output_root() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .env("STRATA_GENERATION__OUTPUT_ROOT", "from-env")
        .args(["new", "service", "x"])
        .assert()
        .success();

    assert!(temp.path().join("from-env/services/service-x").is_dir());
}

#[test]
fn config_path_points_at_local_file_when_present() {
    let temp = TempDir::new().unwrap();
    strata(temp.path()).args(["init", "--local"]).assert().success();

    strata(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".strata.toml"));
}

#[test]
fn completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}
