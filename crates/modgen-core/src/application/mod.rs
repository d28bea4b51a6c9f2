//! Application layer for modgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the emitters but
//! contains no naming or formatting rules itself.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateService, GenerationReport, WrittenArtifact, render_all};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SpecificationSource};

pub use error::ApplicationError;
