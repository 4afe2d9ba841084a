//! Layout registry.
//!
//! Each feature category is described exactly once by a [`LayoutDef`] in
//! [`LAYOUT_REGISTRY`]. The table is plain static data; callers never see it
//! directly but go through [`LayoutRegistry`], an immutable value built from
//! the table (or from caller-supplied templates) and validated once.
//!
//! # Adding a New Category
//!
//! 1. Add a variant to `FeatureCategory` in `value_objects.rs`
//! 2. Add one [`LayoutDef`] entry to [`LAYOUT_REGISTRY`]
//! 3. No other files change

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    entities::layout::LayoutTemplate, error::DomainError, value_objects::FeatureCategory,
};

// ── Layout definitions ───────────────────────────────────────────────────────

/// Static description of one category's layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutDef {
    pub category: FeatureCategory,

    /// Top-level directory every feature of this category lives under.
    pub root_namespace: &'static str,

    /// Template-relative directories, in creation order.
    pub directories: &'static [&'static str],
}

/// Single source of truth for built-in layouts.
pub static LAYOUT_REGISTRY: &[LayoutDef] = &[
    LayoutDef {
        category: FeatureCategory::App,
        root_namespace: "apps",
        directories: &[
            "cmd",
            "internal/domain",
            "internal/service",
            "internal/infrastructure/events",
            "internal/infrastructure/grpc",
            "internal/infrastructure/repository",
            "pkg/types",
        ],
    },
    LayoutDef {
        category: FeatureCategory::Gateway,
        root_namespace: "gateways",
        directories: &[
            "cmd",
            "internal/domain",
            "internal/service",
            "internal/infrastructure/http",
            "internal/infrastructure/events",
            "internal/infrastructure/grpc",
            "pkg/types",
        ],
    },
    LayoutDef {
        category: FeatureCategory::Service,
        root_namespace: "services",
        directories: &[
            "cmd",
            "internal/domain",
            "internal/service",
            "internal/infrastructure/repository",
            "internal/infrastructure/events",
            "internal/infrastructure/grpc",
            "pkg/types",
        ],
    },
    LayoutDef {
        category: FeatureCategory::Web,
        root_namespace: "web",
        directories: &[
            "cmd",
            "internal/handlers",
            "internal/services",
            "internal/templates",
            "public/css",
            "public/js",
        ],
    },
];

impl LayoutDef {
    fn to_template(self) -> Result<LayoutTemplate, DomainError> {
        LayoutTemplate::new(
            self.category,
            self.root_namespace,
            self.directories.iter().copied(),
        )
    }
}

// ── Registry value ───────────────────────────────────────────────────────────

/// Immutable category → layout mapping.
///
/// Construction guarantees every [`FeatureCategory`] has exactly one valid
/// layout. There are no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRegistry {
    layouts: BTreeMap<FeatureCategory, LayoutTemplate>,
}

impl LayoutRegistry {
    /// The built-in registry.
    ///
    /// # Panics
    /// Panics if [`LAYOUT_REGISTRY`] violates a layout invariant. The
    /// `builtin_registry_is_valid` test keeps that from shipping.
    pub fn builtin() -> Self {
        Self::try_builtin().unwrap_or_else(|e| panic!("built-in layout registry is invalid: {e}"))
    }

    /// Fallible form of [`Self::builtin`].
    pub fn try_builtin() -> Result<Self, DomainError> {
        let templates = LAYOUT_REGISTRY
            .iter()
            .map(|def| def.to_template())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_templates(templates)
    }

    /// Build a registry from caller-supplied layouts.
    ///
    /// Fails on duplicate categories, missing categories, or any invalid
    /// layout.
    pub fn from_templates(
        templates: impl IntoIterator<Item = LayoutTemplate>,
    ) -> Result<Self, DomainError> {
        let mut layouts = BTreeMap::new();

        for template in templates {
            template.validate()?;
            let category = template.category();
            if layouts.insert(category, template).is_some() {
                return Err(DomainError::DuplicateLayout { category });
            }
        }

        if let Some(category) = FeatureCategory::ALL
            .into_iter()
            .find(|c| !layouts.contains_key(c))
        {
            return Err(DomainError::MissingLayout { category });
        }

        debug!(layouts = layouts.len(), "layout registry built");
        Ok(Self { layouts })
    }

    /// Look up a category. `None` means NotFound.
    ///
    /// The returned template is a copy.
    pub fn lookup(&self, category: FeatureCategory) -> Option<LayoutTemplate> {
        self.layouts.get(&category).cloned()
    }

    /// Validate a raw category string and look it up.
    pub fn resolve(&self, raw: &str) -> Result<(FeatureCategory, LayoutTemplate), DomainError> {
        let category = raw.parse::<FeatureCategory>()?;
        self.lookup(category)
            .map(|layout| (category, layout))
            .ok_or_else(|| DomainError::UnknownCategory {
                category: raw.to_string(),
            })
    }

    /// All layouts in category order.
    pub fn templates(&self) -> impl Iterator<Item = &LayoutTemplate> {
        self.layouts.values()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
