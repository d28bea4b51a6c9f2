//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer, the emitters and the ports to
//! accomplish the "regenerate the ModuleLoader fragments" use case.

pub mod generate_service;

pub use generate_service::{GenerateService, GenerationReport, WrittenArtifact, render_all};
