// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modgen.
//!
//! This module contains the specification model and the naming rules, with
//! no I/O. Reading documents and writing artifacts are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or external calls
//! - **Immutable entities**: A `Specification` is read-only once loaded
//! - **Single naming authority**: every generated identifier comes from `naming`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod render;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{Artifact, ArtifactKind},
    specification::{InterfaceRecord, QualifiedName, Specification},
};

pub use error::{DomainError, ErrorCategory};

pub use render::RenderContext;
pub use validation::DomainValidator;
pub use value_objects::{GenerationOptions, UnknownModulePolicy};
