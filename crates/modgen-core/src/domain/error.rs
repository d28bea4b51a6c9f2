// ============================================================================
// domain/error.rs - SPECIFICATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for reporting after the run)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {role} name '{name}': the last namespace component must be non-empty, and names may not contain whitespace, '\"' or '\\'")]
    InvalidName { name: String, role: &'static str },

    #[error("interface '{name}' is declared more than once")]
    DuplicateInterface { name: String },

    #[error("implementation '{implementation}' is listed more than once for interface '{interface}'")]
    DuplicateImplementation {
        interface: String,
        implementation: String,
    },

    #[error("'{first}' and '{second}' both generate the identifier '{identifier}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("Check the spelling of '{}'", name),
                "Names look like 'Iface' or 'Namespace::Iface', without spaces, quotes or backslashes".into(),
            ],
            Self::DuplicateInterface { name } => vec![
                format!("Merge the two '{}' entries into one", name),
                "When several documents are given, check for overlapping entries".into(),
            ],
            Self::DuplicateImplementation {
                interface,
                implementation,
            } => vec![format!(
                "Remove the repeated '{}' from the implementations of '{}'",
                implementation, interface
            )],
            Self::IdentifierCollision { identifier, .. } => vec![
                format!("Generated identifiers ignore namespaces, so '{}' is ambiguous", identifier),
                "Rename one of the types so their last components differ".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::DuplicateInterface { .. }
            | Self::DuplicateImplementation { .. }
            | Self::IdentifierCollision { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
