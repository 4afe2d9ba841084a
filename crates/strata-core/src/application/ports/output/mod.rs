//! Driven (output) ports - implemented by infrastructure.

use crate::domain::Permissions;
use crate::error::StrataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::Io`; the service tags them
/// with which scaffold entry failed.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories are
    /// not an error.
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> StrataResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str, permissions: Permissions)
    -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> StrataResult<()>;
}
