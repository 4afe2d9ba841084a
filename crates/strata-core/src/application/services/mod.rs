//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a feature" or "list layouts".

pub mod layout_service;
pub mod scaffold_service;

pub use layout_service::LayoutService;
pub use scaffold_service::{FailurePolicy, ScaffoldService};
