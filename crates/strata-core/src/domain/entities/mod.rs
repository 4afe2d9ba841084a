pub mod common;
pub mod feature_name;
pub mod layout;
pub mod readme;
pub mod scaffold;

pub use crate::domain::DomainError;
pub use feature_name::FeatureName;
pub use layout::{LayoutSummary, LayoutTemplate};
pub use scaffold::{ScaffoldPlan, ScaffoldRequest, ScaffoldResult};
