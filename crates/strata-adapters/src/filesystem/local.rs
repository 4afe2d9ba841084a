//! Local filesystem adapter using std::fs.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::{StrataError, StrataResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// On unix, directories and files are created with the mode derived from
/// [`Permissions`] (subject to the process umask). Modes are only applied on
/// creation; existing entries keep theirs.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> StrataResult<()> {
        trace!(path = %path.display(), "create_dir_all");

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(permissions.unix_mode());
        }
        #[cfg(not(unix))]
        {
            let _ = permissions;
        }

        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str, permissions: Permissions) -> StrataResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(permissions.unix_mode());
        }
        #[cfg(not(unix))]
        {
            let _ = permissions;
        }

        let mut file = options
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir(&self, path: &Path) -> StrataResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StrataError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("a/b/c");

        fs.create_dir_all(&path, Permissions::directory()).unwrap();
        fs.create_dir_all(&path, Permissions::directory()).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("README.md");

        fs.write_file(&path, "a much longer first body", Permissions::file())
            .unwrap();
        fs.write_file(&path, "short", Permissions::file()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn directory_under_a_file_fails_with_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        std::fs::write(tmp.path().join("blocker"), "").unwrap();

        let err = fs
            .create_dir_all(&tmp.path().join("blocker/child"), Permissions::directory())
            .unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::Io { .. })
        ));
    }

    #[test]
    fn remove_dir_refuses_non_empty_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("keep");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("file"), "x").unwrap();

        assert!(fs.remove_dir(&dir).is_err());
        assert!(dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn modes_follow_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("d");
        let file = tmp.path().join("f");

        fs.create_dir_all(&dir, Permissions::directory()).unwrap();
        fs.write_file(&file, "x", Permissions::file()).unwrap();

        // The umask may only clear bits; it never adds any.
        let dir_mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        let file_mode = std::fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode & !0o755, 0);
        assert_eq!(file_mode & !0o644, 0);
        assert_eq!(dir_mode & 0o700, 0o700);
        assert_eq!(file_mode & 0o600, 0o600);
    }
}
