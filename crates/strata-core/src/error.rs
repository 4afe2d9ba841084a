//! Unified error handling for Strata Core.
//!
//! Wraps domain and application errors behind one type with suggestions and
//! a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Strata Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrataError {
    /// Input or layout errors (unknown category, invalid name, bad layout).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Filesystem failures while materializing a scaffold.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StrataError {
    /// Next steps to show the user.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        use crate::domain::ErrorCategory as Domain;

        match self {
            Self::Domain(e) => match e.category() {
                Domain::Validation => ErrorCategory::Validation,
                Domain::NotFound => ErrorCategory::NotFound,
                Domain::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Input errors never succeed on retry; filesystem errors might once the
    /// cause (permissions, disk space) is fixed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
                | Self::Application(ApplicationError::Io { .. })
        )
    }
}

/// Coarse grouping used by front ends to pick styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Filesystem,
    Internal,
}

pub type StrataResult<T> = Result<T, StrataError>;
