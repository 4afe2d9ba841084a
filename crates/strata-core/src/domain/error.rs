// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::FeatureCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("unknown feature category '{category}'")]
    UnknownCategory { category: String },

    #[error("invalid feature name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    #[error("invalid layout for '{category}': {reason}")]
    InvalidLayout {
        category: FeatureCategory,
        reason: String,
    },

    #[error("layout registry is incomplete: no layout for '{category}'")]
    MissingLayout { category: FeatureCategory },

    #[error("layout registry defines '{category}' more than once")]
    DuplicateLayout { category: FeatureCategory },

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path traversal not allowed: {path}")]
    PathTraversal { path: String },

    #[error("Empty path not allowed")]
    EmptyPath,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCategory { category } => {
                let mut out = vec![
                    format!("'{}' is not a known feature category", category),
                    "Supported categories:".into(),
                ];
                out.extend(
                    FeatureCategory::ALL
                        .iter()
                        .map(|c| format!("  • {:<8} - {}", c.as_str(), c.description())),
                );
                out.push("Example: strata new service payment".into());
                out
            }
            Self::InvalidName { name, reason } => vec![
                format!("Feature name '{}' is invalid: {}", name, reason),
                "Use a single path segment, e.g. user, payment, api".into(),
            ],
            Self::InvalidLayout { .. }
            | Self::MissingLayout { .. }
            | Self::DuplicateLayout { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversal { .. }
            | Self::EmptyPath => vec![
                "The layout registry is misconfigured".into(),
                "Every category needs exactly one layout of relative, non-empty paths".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::UnknownCategory { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
