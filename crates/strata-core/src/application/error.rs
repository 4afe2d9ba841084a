//! Application layer errors.
//!
//! These errors represent failures while materializing a plan, not business
//! logic. Input and layout errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A raw port failure, before the service tags it with progress.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Creating a directory or writing the README failed.
    ///
    /// `entry` is relative to the feature base path (`internal/domain`,
    /// `README.md`); `completed` counts directories created before it.
    #[error(
        "failed to create '{entry}' under {base_path} ({completed} of {total} directories created): {reason}"
    )]
    FilesystemError {
        entry: PathBuf,
        base_path: PathBuf,
        path: PathBuf,
        completed: usize,
        total: usize,
        reason: String,
    },

    /// Store access failed (lock poisoned).
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FilesystemError {
                entry,
                base_path,
                completed,
                ..
            } => vec![
                format!("Failed while creating: {}", base_path.join(entry).display()),
                format!(
                    "{} director{} already created and left in place",
                    completed,
                    if *completed == 1 { "y was" } else { "ies were" }
                ),
                "Fix the cause and re-run: existing directories are reused".into(),
                format!(
                    "Or remove the partial tree: rm -rf {}",
                    base_path.display()
                ),
            ],
            Self::LockPoisoned => vec!["An internal lock was poisoned; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } | Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_message_names_entry_and_progress() {
        let err = ApplicationError::FilesystemError {
            entry: PathBuf::from("internal/domain"),
            base_path: PathBuf::from("gateways/gateway-api"),
            path: PathBuf::from("/tmp/gateways/gateway-api/internal/domain"),
            completed: 1,
            total: 7,
            reason: "Not a directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("internal/domain"));
        assert!(msg.contains("1 of 7"));
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("1 directory was already created"))
        );
    }
}
