//! The interface/implementation model that drives generation.
//!
//! A [`Specification`] is an ordered list of [`InterfaceRecord`]s. Order is
//! significant: every artifact is emitted in input order so that regenerating
//! from the same documents is byte-for-byte reproducible.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming};

// ── QualifiedName ─────────────────────────────────────────────────────────────

/// A possibly namespace-qualified C++ type name, e.g. `Nextsim::IIceAlbedo`.
///
/// The full name is used wherever a type is spelled out (declarations,
/// string keys). Identifiers and header stems use only [`bare`](Self::bare).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bare(&self) -> &str {
        naming::bare(&self.0)
    }

    pub fn pointer_name(&self) -> String {
        naming::pointer_name(&self.0)
    }

    pub fn instance_name(&self) -> String {
        naming::instance_name(&self.0)
    }

    pub fn func_pointer_name(&self) -> String {
        naming::func_pointer_name(&self.0)
    }

    pub fn factory_name(&self) -> String {
        naming::factory_name(&self.0)
    }

    /// A name is usable when its bare component is non-empty and nothing in
    /// it would break a C++ identifier or string literal: no whitespace, no
    /// `"` and no `\`.
    fn is_usable(&self) -> bool {
        !self.bare().is_empty()
            && !self
                .0
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '\\')
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── InterfaceRecord ───────────────────────────────────────────────────────────

/// One abstract interface and the concrete types that can back it.
///
/// Deserializes from `{"name": "...", "implementations": ["...", ...]}`.
/// Other keys in a record (annotations, comments) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    pub name: QualifiedName,
    pub implementations: Vec<QualifiedName>,
}

impl InterfaceRecord {
    pub fn new<I, S>(name: impl Into<QualifiedName>, implementations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<QualifiedName>,
    {
        Self {
            name: name.into(),
            implementations: implementations.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate names within this record.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.name.is_usable() {
            return Err(DomainError::InvalidName {
                name: self.name.to_string(),
                role: "interface",
            });
        }

        let mut seen = HashSet::with_capacity(self.implementations.len());
        for implementation in &self.implementations {
            if !implementation.is_usable() {
                return Err(DomainError::InvalidName {
                    name: implementation.to_string(),
                    role: "implementation",
                });
            }
            if !seen.insert(implementation.as_str()) {
                return Err(DomainError::DuplicateImplementation {
                    interface: self.name.to_string(),
                    implementation: implementation.to_string(),
                });
            }
        }

        Ok(())
    }
}

// ── Specification ─────────────────────────────────────────────────────────────

/// The full, ordered input to one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specification {
    interfaces: Vec<InterfaceRecord>,
}

impl Specification {
    pub fn new(interfaces: Vec<InterfaceRecord>) -> Self {
        Self { interfaces }
    }

    pub fn interfaces(&self) -> &[InterfaceRecord] {
        &self.interfaces
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Total number of implementations across all interfaces.
    pub fn implementation_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.implementations.len()).sum()
    }

    /// Append the records of another document, preserving order.
    pub fn extend(&mut self, other: Specification) {
        self.interfaces.extend(other.interfaces);
    }

    /// Builder-style single record append.
    pub fn with_interface(mut self, record: InterfaceRecord) -> Self {
        self.interfaces.push(record);
        self
    }

    /// Check the uniqueness invariants the generated C++ relies on.
    ///
    /// Interface names must be unique, implementation names must be unique
    /// within an interface, and no two interfaces (or two implementations)
    /// may reduce to the same bare name, since that would emit two static
    /// definitions with the same identifier.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut interfaces: HashSet<&str> = HashSet::with_capacity(self.interfaces.len());
        let mut interface_idents: HashMap<&str, &QualifiedName> = HashMap::new();
        let mut implementation_idents: HashMap<&str, &QualifiedName> = HashMap::new();

        for record in &self.interfaces {
            record.validate()?;

            if !interfaces.insert(record.name.as_str()) {
                return Err(DomainError::DuplicateInterface {
                    name: record.name.to_string(),
                });
            }

            if let Some(first) = interface_idents.insert(record.name.bare(), &record.name) {
                return Err(DomainError::IdentifierCollision {
                    identifier: record.name.pointer_name(),
                    first: first.to_string(),
                    second: record.name.to_string(),
                });
            }

            for implementation in &record.implementations {
                if let Some(first) =
                    implementation_idents.insert(implementation.bare(), implementation)
                {
                    return Err(DomainError::IdentifierCollision {
                        identifier: implementation.instance_name(),
                        first: first.to_string(),
                        second: implementation.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl FromIterator<InterfaceRecord> for Specification {
    fn from_iter<T: IntoIterator<Item = InterfaceRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Specification {
    type Item = &'a InterfaceRecord;
    type IntoIter = std::slice::Iter<'a, InterfaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.interfaces.iter()
    }
}
