pub mod artifact;
pub mod specification;

pub use artifact::{Artifact, ArtifactKind};
pub use specification::{InterfaceRecord, QualifiedName, Specification};
