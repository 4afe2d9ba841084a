//! Domain and application layers of Strata.
//!
//! The domain knows the four feature categories, their layouts and how a
//! `{category}-{name}` plan is laid out. The application layer walks a plan
//! against a [`application::ports::Filesystem`] and reports how far it got.
//! Adapters (`strata-adapters`) implement the port; the CLI drives the
//! services.
//!
//! ```text
//!   strata-cli ──► ScaffoldService / LayoutService ──► domain
//!                        │
//!                        ▼
//!                 Filesystem (port) ◄── LocalFilesystem, MemoryFilesystem
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::{
//!     application::ScaffoldService,
//!     domain::{FeatureCategory, LayoutRegistry, ScaffoldRequest},
//! };
//!
//! // `filesystem` is any `Box<dyn Filesystem>` adapter.
//! let service = ScaffoldService::new(LayoutRegistry::builtin(), filesystem, ".");
//! let result = service
//!     .generate(&ScaffoldRequest::new(FeatureCategory::Gateway, "api"))
//!     .unwrap();
//! assert_eq!(result.base_path, std::path::Path::new("gateways/gateway-api"));
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need.
pub mod prelude {
    pub use crate::application::{FailurePolicy, LayoutService, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        FeatureCategory, FeatureName, LayoutRegistry, LayoutTemplate, ScaffoldPlan,
        ScaffoldRequest, ScaffoldResult,
    };
    pub use crate::error::{StrataError, StrataResult};
}
