//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modgen-adapters` crate provides implementations.

use crate::domain::Specification;
use crate::error::ModgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` creates or truncates; there is no append or partial write
/// - No removal: a failed run is not rolled back
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for producing the merged specification.
///
/// Implemented by:
/// - `modgen_adapters::spec_loader::JsonSpecLoader` (JSON documents on disk)
pub trait SpecificationSource {
    /// Load every document and return them concatenated in order.
    fn load(&self) -> ModgenResult<Specification>;
}
