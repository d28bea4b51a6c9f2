//! Text emitters, one per generated artifact.
//!
//! Every emitter reads the same [`Specification`] and writes into a sink it
//! is handed by the caller; none of them opens files or keeps state between
//! calls. The orchestrator in [`crate::application`] decides where the text
//! ends up.
//!
//! ```text
//! Specification ──┬── HeaderEmitter      → moduleLoaderHeaders.ipp
//!                 ├── DefinitionEmitter  → moduleLoaderFunctions.ipp
//!                 ├── RegistryEmitter    → moduleLoaderNames.ipp
//!                 └── SelectionEmitter   → moduleLoaderAssignments.ipp
//! ```

use std::fmt;

use crate::domain::{ArtifactKind, GenerationOptions, Specification};

mod definitions;
mod headers;
mod registry;
mod selection;

pub use definitions::DefinitionEmitter;
pub use headers::HeaderEmitter;
pub use registry::RegistryEmitter;
pub use selection::SelectionEmitter;

/// Renders one artifact kind from a specification.
pub trait Emitter {
    /// Which artifact this emitter produces.
    fn kind(&self) -> ArtifactKind;

    /// Write the artifact text for `spec` into `out`.
    fn emit(&self, spec: &Specification, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Convenience wrapper rendering into a fresh `String`.
    fn render(&self, spec: &Specification) -> Result<String, fmt::Error> {
        let mut buf = String::new();
        self.emit(spec, &mut buf)?;
        Ok(buf)
    }
}

/// The four emitters configured for `options`, in generation order.
pub fn standard_emitters(options: &GenerationOptions) -> Vec<Box<dyn Emitter>> {
    vec![
        Box::new(HeaderEmitter::new(options.hpp_prefix.clone())),
        Box::new(DefinitionEmitter::new()),
        Box::new(RegistryEmitter::new()),
        Box::new(SelectionEmitter::new(options.unknown_module)),
    ]
}
