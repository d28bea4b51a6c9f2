//! Generated artifacts and where they land.

use std::fmt;
use std::path::PathBuf;

/// The four `.ipp` files included by `ModuleLoader.cpp`.
///
/// Variants are declared in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `#include` directives for every interface and implementation header.
    Headers,
    /// Static storage, accessors and factory functions.
    Definitions,
    /// Initializer for the available-implementations table.
    Registry,
    /// Runtime (module, impl) selection chain.
    Selection,
}

impl ArtifactKind {
    /// Every kind, in the fixed generation order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Headers,
        ArtifactKind::Definitions,
        ArtifactKind::Registry,
        ArtifactKind::Selection,
    ];

    /// File name expected by the consuming build.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Headers => "moduleLoaderHeaders.ipp",
            Self::Definitions => "moduleLoaderFunctions.ipp",
            Self::Registry => "moduleLoaderNames.ipp",
            Self::Selection => "moduleLoaderAssignments.ipp",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Headers => "headers",
            Self::Definitions => "definitions",
            Self::Registry => "registry",
            Self::Selection => "selection",
        }
    }

    /// Output path for this artifact. The prefix is prepended verbatim, so
    /// `"build/"` yields a directory and `"build/gen_"` a file-name prefix.
    pub fn path_with_prefix(&self, ipp_prefix: &str) -> PathBuf {
        PathBuf::from(format!("{ipp_prefix}{}", self.file_name()))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered content of one artifact, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        Self { kind, content }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
