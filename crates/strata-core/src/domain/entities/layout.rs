use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    entities::{
        common::RelativePath,
        feature_name::FeatureName,
    },
    error::DomainError,
    value_objects::FeatureCategory,
};

/// The directory skeleton for one feature category.
///
/// Values handed out by the registry are copies; mutating one never affects
/// the registry or any later lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTemplate {
    pub(crate) category: FeatureCategory,
    pub(crate) root_namespace: String,
    pub(crate) directories: Vec<RelativePath>,
}

impl LayoutTemplate {
    /// Build and validate a layout.
    pub fn new<I, S>(
        category: FeatureCategory,
        root_namespace: impl Into<String>,
        directories: I,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directories = directories
            .into_iter()
            .map(|d| RelativePath::try_new(d.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::InvalidLayout {
                category,
                reason: e.to_string(),
            })?;

        let template = Self {
            category,
            root_namespace: root_namespace.into(),
            directories,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let root = RelativePath::try_new(&self.root_namespace).map_err(|e| {
            DomainError::InvalidLayout {
                category: self.category,
                reason: format!("root namespace: {e}"),
            }
        })?;
        if root.segments().count() != 1 {
            return Err(DomainError::InvalidLayout {
                category: self.category,
                reason: format!(
                    "root namespace '{}' must be a single path segment",
                    self.root_namespace
                ),
            });
        }

        if self.directories.is_empty() {
            return Err(DomainError::InvalidLayout {
                category: self.category,
                reason: "layout has no directories".into(),
            });
        }

        let mut seen = HashSet::new();
        for dir in &self.directories {
            if !seen.insert(dir.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn category(&self) -> FeatureCategory {
        self.category
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// The base directory for a feature: `{root}/{category}-{name}`.
    ///
    /// This is the only naming rule.
    pub fn base_path(&self, name: &FeatureName) -> PathBuf {
        PathBuf::from(&self.root_namespace).join(format!("{}-{}", self.category, name))
    }

    /// Serializable summary for listings.
    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            category: self.category,
            root_namespace: self.root_namespace.clone(),
            directories: self.directories.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Display/serialization form of a [`LayoutTemplate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub category: FeatureCategory,
    pub root_namespace: String,
    pub directories: Vec<String>,
}
