//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `strata-adapters` implement them.
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `Filesystem`: directory and file operations
//!
//! - **Driving (Input) Ports**: called by the outside world
//!   - (`ScaffoldService` methods, invoked by the CLI)

pub mod output;

pub use output::Filesystem;
