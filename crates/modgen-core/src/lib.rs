//! modgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain, emitter and application layers for the
//! modgen ModuleLoader generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │         Orchestrates Use Cases          │
//! └─────────┬────────────────────┬──────────┘
//!           │ runs               │ uses
//!           ▼                    ▼
//! ┌──────────────────┐ ┌────────────────────┐
//! │     Emitters     │ │ Application Ports  │
//! │ Headers, Defs,   │ │ (Filesystem,       │
//! │ Registry, Select │ │  SpecificationSrc) │
//! └────────┬─────────┘ └─────────┬──────────┘
//!          │                     │ implemented by
//!          │                     ▼
//!          │           ┌────────────────────┐
//!          │           │  modgen-adapters   │
//!          │           │ (LocalFilesystem,  │
//!          │           │   JsonSpecLoader)  │
//!          ▼           └────────────────────┘
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Specification, naming, RenderContext)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modgen_core::prelude::*;
//!
//! // 1. Load the specification (see modgen-adapters)
//! let spec = loader.load()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(filesystem);
//! service.generate(&spec, &GenerationOptions::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Artifact emitters
pub mod emit;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationReport, render_all,
        ports::{Filesystem, SpecificationSource},
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, GenerationOptions, InterfaceRecord, QualifiedName, Specification,
        UnknownModulePolicy,
    };
    pub use crate::emit::Emitter;
    pub use crate::error::{ModgenError, ModgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
