use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative and to stay below its base.
///
/// Invariant: never empty, never absolute, no `..` segments. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }

        let mut normal = 0usize;
        for component in path.components() {
            match component {
                Component::Normal(_) => normal += 1,
                Component::CurDir => {}
                Component::ParentDir => return Err(DomainError::PathTraversal { path: display }),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display });
                }
            }
        }
        // "." or "./." name nothing below the base.
        if normal == 0 {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Normal components as strings, in order.
    pub fn segments(&self) -> impl Iterator<Item = String> + '_ {
        self.0.components().filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Mode a generated entry is created with.
///
/// Generated entries are always owner-writable and world-readable; the only
/// choice is whether they carry the execute (search) bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    /// `0755`
    pub const fn directory() -> Self {
        Self { executable: true }
    }

    /// `0644`
    pub const fn file() -> Self {
        Self { executable: false }
    }

    pub const fn is_executable(&self) -> bool {
        self.executable
    }

    pub const fn unix_mode(&self) -> u32 {
        if self.executable { 0o755 } else { 0o644 }
    }
}
