//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::Permissions,
    error::StrataResult,
};

/// In-memory filesystem.
///
/// Clones share the same state, so a test can hand one clone to a service
/// and inspect the other afterwards. Paths registered with
/// [`MemoryFilesystem::fail_on`] reject any mutation with an I/O error.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    modes: HashMap<PathBuf, u32>,
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn check_failure(&self, path: &Path, operation: &str) -> StrataResult<()> {
        if self.failing.contains(path) {
            return Err(io_error(path, operation, "injected failure"));
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutation targeting `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
        self
    }

    /// Seed a directory (and its ancestors) without going through the port.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Seed a file without going through the port.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
        self
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.files.get(path).cloned()
    }

    /// Unix mode an entry was created with, if it was created through the port.
    pub fn mode(&self, path: &Path) -> Option<u32> {
        self.inner.read().ok()?.modes.get(path).copied()
    }

    pub fn contains_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// All directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<_> = self
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default();
        dirs.sort();
        dirs
    }

    pub fn directory_count(&self) -> usize {
        self.read().map(|inner| inner.directories.len()).unwrap_or(0)
    }

    /// Clear all contents and injected failures.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = MemoryFilesystemInner::default();
        }
    }

    fn read(&self) -> StrataResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> StrataResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path, permissions: Permissions) -> StrataResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "create directory")?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(io_error(path, "create directory", "Not a directory"));
            }
            if inner.directories.insert(current.clone()) {
                inner.modes.insert(current.clone(), permissions.unix_mode());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str, permissions: Permissions) -> StrataResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "write file")?;

        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if parent_missing {
            return Err(io_error(path, "write file", "No such file or directory"));
        }
        if inner.directories.contains(path) {
            return Err(io_error(path, "write file", "Is a directory"));
        }

        if inner
            .files
            .insert(path.to_path_buf(), content.to_string())
            .is_none()
        {
            inner.modes.insert(path.to_path_buf(), permissions.unix_mode());
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;
        inner.check_failure(path, "remove directory")?;

        if !inner.directories.contains(path) {
            return Err(io_error(path, "remove directory", "No such file or directory"));
        }
        let occupied = inner.files.keys().any(|p| p.parent() == Some(path))
            || inner.directories.iter().any(|p| p.parent() == Some(path));
        if occupied {
            return Err(io_error(path, "remove directory", "Directory not empty"));
        }

        inner.directories.remove(path);
        inner.modes.remove(path);
        Ok(())
    }
}

fn io_error(path: &Path, operation: &str, reason: &str) -> strata_core::error::StrataError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, reason),
    }
    .into()
}
