//! End-to-end scaffolding against real and in-memory filesystems.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use strata_adapters::{LocalFilesystem, MemoryFilesystem};
use strata_core::application::ApplicationError;
use strata_core::error::ErrorCategory;
use strata_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn local_service(root: &Path) -> ScaffoldService {
    ScaffoldService::new(
        LayoutRegistry::builtin(),
        Box::new(LocalFilesystem::new()),
        root,
    )
}

/// Every entry below `root`, relative and with `/` separators. Directories
/// end with `/`.
fn snapshot(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            if entry.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect()
}

fn expected_gateway_tree() -> BTreeSet<String> {
    [
        "gateways/",
        "gateways/gateway-api/",
        "gateways/gateway-api/README.md",
        "gateways/gateway-api/cmd/",
        "gateways/gateway-api/internal/",
        "gateways/gateway-api/internal/domain/",
        "gateways/gateway-api/internal/service/",
        "gateways/gateway-api/internal/infrastructure/",
        "gateways/gateway-api/internal/infrastructure/http/",
        "gateways/gateway-api/internal/infrastructure/events/",
        "gateways/gateway-api/internal/infrastructure/grpc/",
        "gateways/gateway-api/pkg/",
        "gateways/gateway-api/pkg/types/",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[test]
fn gateway_scaffold_creates_exact_tree() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());

    let result = service.generate_raw("gateway", "api").unwrap();

    assert_eq!(result.base_path, PathBuf::from("gateways/gateway-api"));
    assert_eq!(result.created_directories.len(), 7);
    assert_eq!(snapshot(tmp.path()), expected_gateway_tree());

    let readme =
        std::fs::read_to_string(tmp.path().join("gateways/gateway-api/README.md")).unwrap();
    assert_eq!(
        readme,
        "# gateway api\n\nAuto-generated gateway named \"api\".\n\nPath:\ngateways/gateway-api\n"
    );
}

#[test]
fn web_scaffold_uses_web_root() {
    let tmp = TempDir::new().unwrap();
    local_service(tmp.path())
        .generate_raw("web", "dashboard")
        .unwrap();

    let tree = snapshot(tmp.path());
    assert!(tree.contains("web/web-dashboard/public/css/"));
    assert!(tree.contains("web/web-dashboard/public/js/"));
    assert!(tree.contains("web/web-dashboard/README.md"));
    assert!(!tree.iter().any(|p| p.contains("pkg")));
}

#[cfg(unix)]
#[test]
fn entries_are_created_with_expected_modes() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    local_service(tmp.path())
        .generate_raw("service", "billing")
        .unwrap();

    let base = tmp.path().join("services/service-billing");
    let dir_mode = std::fs::metadata(base.join("internal/domain"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    let file_mode = std::fs::metadata(base.join("README.md"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;

    assert_eq!(dir_mode & !0o755, 0, "dir mode {dir_mode:o}");
    assert_eq!(file_mode & !0o644, 0, "file mode {file_mode:o}");
}

#[test]
fn second_run_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());
    let readme = tmp.path().join("apps/app-users/README.md");

    service.generate_raw("app", "users").unwrap();
    let first_tree = snapshot(tmp.path());
    let first_readme = std::fs::read_to_string(&readme).unwrap();

    service.generate_raw("app", "users").unwrap();
    assert_eq!(snapshot(tmp.path()), first_tree);
    assert_eq!(std::fs::read_to_string(&readme).unwrap(), first_readme);
}

#[test]
fn edited_readme_is_overwritten_and_other_files_survive() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());
    let base = tmp.path().join("apps/app-users");

    service.generate_raw("app", "users").unwrap();
    let original = std::fs::read_to_string(base.join("README.md")).unwrap();
    std::fs::write(base.join("README.md"), "edited by hand, and much longer than before").unwrap();
    std::fs::write(base.join("cmd/main.go"), "package main\n").unwrap();

    service.generate_raw("app", "users").unwrap();
    assert_eq!(std::fs::read_to_string(base.join("README.md")).unwrap(), original);
    assert_eq!(
        std::fs::read_to_string(base.join("cmd/main.go")).unwrap(),
        "package main\n"
    );
}

#[test]
fn invalid_input_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());

    let unknown = service.generate_raw("bogus", "x").unwrap_err();
    assert_eq!(unknown.category(), ErrorCategory::NotFound);

    let empty = service.generate_raw("app", "").unwrap_err();
    assert_eq!(empty.category(), ErrorCategory::Validation);

    let nested = service.generate_raw("app", "a/b").unwrap_err();
    assert_eq!(nested.category(), ErrorCategory::Validation);

    assert!(snapshot(tmp.path()).is_empty());
}

#[test]
fn file_in_the_way_aborts_with_progress() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("gateways/gateway-api");
    std::fs::create_dir_all(&base).unwrap();
    std::fs::write(base.join("internal"), "").unwrap();

    let err = local_service(tmp.path())
        .generate_raw("gateway", "api")
        .unwrap_err();

    match err {
        StrataError::Application(ApplicationError::FilesystemError {
            entry,
            completed,
            total,
            ..
        }) => {
            assert_eq!(entry, PathBuf::from("internal/domain"));
            assert_eq!(completed, 1);
            assert_eq!(total, 7);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Abort leaves the partial tree in place and writes no README.
    assert!(base.join("cmd").is_dir());
    assert!(!base.join("README.md").exists());
}

#[test]
fn rollback_removes_only_new_directories() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("gateways/gateway-api");
    std::fs::create_dir_all(&base).unwrap();
    std::fs::write(base.join("internal"), "").unwrap();

    let err = local_service(tmp.path())
        .with_failure_policy(FailurePolicy::Rollback)
        .generate_raw("gateway", "api")
        .unwrap_err();
    assert!(err.is_retryable());

    // `cmd` was new and is gone; the pre-existing base and blocker survive.
    assert!(!base.join("cmd").exists());
    assert!(base.is_dir());
    assert!(base.join("internal").is_file());
}

#[test]
fn rollback_on_fresh_root_leaves_it_empty() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("out/services/service-x/README.md");

    let service = ScaffoldService::new(LayoutRegistry::builtin(), Box::new(fs.clone()), "out")
        .with_failure_policy(FailurePolicy::Rollback);
    fs.add_dir("out");

    let err = service.generate_raw("service", "x").unwrap_err();
    match err {
        StrataError::Application(ApplicationError::FilesystemError {
            entry, completed, ..
        }) => {
            assert_eq!(entry, PathBuf::from("README.md"));
            assert_eq!(completed, 7);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(fs.list_dirs(), vec![PathBuf::from("out")]);
    assert!(fs.list_files().is_empty());
}

#[test]
fn rollback_removes_missing_output_root_too() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("new/root/web/web-site/README.md");

    let err = ScaffoldService::new(LayoutRegistry::builtin(), Box::new(fs.clone()), "new/root")
        .with_failure_policy(FailurePolicy::Rollback)
        .generate_raw("web", "site")
        .unwrap_err();
    assert!(err.is_retryable());

    assert!(fs.list_dirs().is_empty());
    assert!(fs.list_files().is_empty());
}

#[test]
fn memory_filesystem_records_modes_through_service() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(LayoutRegistry::builtin(), Box::new(fs.clone()), "root");

    service.generate_raw("app", "orders").unwrap();

    assert_eq!(
        fs.list_files(),
        vec![PathBuf::from("root/apps/app-orders/README.md")]
    );
    assert_eq!(
        fs.mode(Path::new("root/apps/app-orders/README.md")),
        Some(0o644)
    );
    assert_eq!(
        fs.mode(Path::new("root/apps/app-orders/internal/infrastructure/grpc")),
        Some(0o755)
    );
}

#[test]
fn dry_run_plan_matches_generated_tree() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());
    let request = ScaffoldService::request_from_raw("gateway", "api").unwrap();

    let plan = service.plan(&request).unwrap();
    assert!(snapshot(tmp.path()).is_empty());

    let preview = plan.render_tree();
    service.apply(plan).unwrap();

    for entry in expected_gateway_tree() {
        let leaf = entry
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap()
            .to_string();
        assert!(preview.contains(&leaf), "preview is missing {leaf}");
    }
}
