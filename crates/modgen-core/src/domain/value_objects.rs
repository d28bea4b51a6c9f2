//! Domain value objects: generation options and their policies.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. The
//! CLI builds a [`GenerationOptions`] from flags and config; the core only
//! reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── UnknownModulePolicy ──────────────────────────────────────────────────────

/// What the generated selection chain does when the host asks for a module
/// name that no interface declares.
///
/// An unknown implementation of a known module always reaches the host's
/// `throwup(module, impl)`. Historically an unknown module fell through
/// silently; `Report` routes it to the same call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownModulePolicy {
    /// Terminate the chain with an empty block.
    #[default]
    Ignore,
    /// Terminate the chain with `throwup(module, impl)`.
    Report,
}

impl UnknownModulePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Report => "report",
        }
    }

    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Report } else { Self::Ignore }
    }
}

impl fmt::Display for UnknownModulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GenerationOptions ────────────────────────────────────────────────────────

/// Per-run settings shared by the orchestrator and the emitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Prepended verbatim to each artifact file name.
    pub ipp_prefix: String,
    /// Prepended verbatim to each included header stem.
    pub hpp_prefix: String,
    pub unknown_module: UnknownModulePolicy,
}

impl GenerationOptions {
    pub const DEFAULT_IPP_PREFIX: &'static str = "./";
    pub const DEFAULT_HPP_PREFIX: &'static str = "include/";

    pub fn new(ipp_prefix: impl Into<String>, hpp_prefix: impl Into<String>) -> Self {
        Self {
            ipp_prefix: ipp_prefix.into(),
            hpp_prefix: hpp_prefix.into(),
            unknown_module: UnknownModulePolicy::default(),
        }
    }

    pub fn with_unknown_module(mut self, policy: UnknownModulePolicy) -> Self {
        self.unknown_module = policy;
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IPP_PREFIX, Self::DEFAULT_HPP_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_flag_selects_report() {
        assert_eq!(UnknownModulePolicy::from_strict(true), UnknownModulePolicy::Report);
        assert_eq!(UnknownModulePolicy::from_strict(false), UnknownModulePolicy::Ignore);
        assert_eq!(UnknownModulePolicy::Report.to_string(), "report");
    }

    #[test]
    fn defaults_match_build_layout() {
        let options = GenerationOptions::default();
        assert_eq!(options.ipp_prefix, "./");
        assert_eq!(options.hpp_prefix, "include/");
        assert_eq!(options.unknown_module, UnknownModulePolicy::Ignore);
    }
}
