//! Implementations of the `strata-core` ports.
//!
//! [`LocalFilesystem`] touches the real disk; [`MemoryFilesystem`] keeps
//! everything in memory for tests and previews.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
