//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ScaffoldService, LayoutService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! layout rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FailurePolicy, LayoutService, ScaffoldService};

pub use ports::Filesystem;

pub use error::ApplicationError;
