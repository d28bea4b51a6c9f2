//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod spec_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use spec_loader::JsonSpecLoader;
