//! Domain value objects: FeatureCategory.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO layout data. Root namespaces and directory lists live in
//! `registry.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `description` and `ALL` entries here
//! 3. Add a layout entry in `registry.rs`
//! 4. Nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FeatureCategory ──────────────────────────────────────────────────────────

/// The kind of component being scaffolded.
///
/// The canonical string form is lowercase and is what appears in generated
/// directory names (`services/service-payment`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    App,
    Gateway,
    Service,
    Web,
}

impl FeatureCategory {
    /// Every category, in registry order.
    pub const ALL: [FeatureCategory; 4] = [Self::App, Self::Gateway, Self::Service, Self::Web];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Gateway => "gateway",
            Self::Service => "service",
            Self::Web => "web",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::App => "Application backend with repository and messaging",
            Self::Gateway => "Edge gateway exposing HTTP, gRPC and events",
            Self::Service => "Internal domain service",
            Self::Web => "Server-rendered web frontend",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(Self::App),
            "gateway" => Ok(Self::Gateway),
            "service" => Ok(Self::Service),
            "web" => Ok(Self::Web),
            _ => Err(DomainError::UnknownCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_only_canonical_spelling() {
        assert_eq!(
            FeatureCategory::from_str("service").unwrap(),
            FeatureCategory::Service
        );
        for raw in ["GATEWAY", "Web", " app", "service "] {
            assert_eq!(
                FeatureCategory::from_str(raw),
                Err(DomainError::UnknownCategory {
                    category: raw.into()
                })
            );
        }
    }

    #[test]
    fn unknown_category_keeps_original_input() {
        let err = FeatureCategory::from_str("Bogus").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownCategory {
                category: "Bogus".into()
            }
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in FeatureCategory::ALL {
            assert_eq!(category.to_string().parse::<FeatureCategory>(), Ok(category));
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&FeatureCategory::Gateway).unwrap();
        assert_eq!(json, "\"gateway\"");
    }
}
