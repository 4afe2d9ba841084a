//! Core domain layer for Strata.
//!
//! Pure logic with no I/O. Filesystem effects are handled via the ports
//! defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: layouts and plans are `Clone + PartialEq`
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

mod validation;

pub use entities::{
    common::{Permissions, RelativePath},
    feature_name::FeatureName,
    layout::{LayoutSummary, LayoutTemplate},
    readme::{README_FILE_NAME, README_TEMPLATE, RenderContext},
    scaffold::{ScaffoldPlan, ScaffoldRequest, ScaffoldResult},
};

pub use error::{DomainError, ErrorCategory};
pub use registry::{LAYOUT_REGISTRY, LayoutDef, LayoutRegistry};
pub use validation::DomainValidator;
pub use value_objects::FeatureCategory;
