//! Layout Service - read-only registry queries.
//!
//! Separated from ScaffoldService for single responsibility: listing and
//! describing layouts never needs a filesystem.

use crate::{
    domain::{FeatureCategory, LayoutRegistry, LayoutSummary, LayoutTemplate},
    error::StrataResult,
};

/// Service for layout queries.
pub struct LayoutService {
    registry: LayoutRegistry,
}

impl LayoutService {
    pub fn new(registry: LayoutRegistry) -> Self {
        Self { registry }
    }

    /// Get the layout for a category.
    pub fn get(&self, category: FeatureCategory) -> Option<LayoutTemplate> {
        self.registry.lookup(category)
    }

    /// Validate a raw category string and return its layout.
    pub fn resolve(&self, raw: &str) -> StrataResult<LayoutTemplate> {
        let (_, layout) = self.registry.resolve(raw)?;
        Ok(layout)
    }

    /// Summaries of every layout, in category order.
    pub fn list(&self) -> Vec<LayoutSummary> {
        self.registry.templates().map(|t| t.summary()).collect()
    }
}
