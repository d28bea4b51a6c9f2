//! `moduleLoaderNames.ipp`: the available-implementations table.
//!
//! The host uses `m_availableImplementationNames` only to list and check
//! legal (module, implementation) pairs; dispatch goes through the selection
//! artifact.

use std::fmt;

use crate::domain::{ArtifactKind, RenderContext, Specification};

use super::Emitter;

const TABLE_OPEN: &str = "    m_availableImplementationNames = {\n        ";
const ENTRY_OPEN: &str = "{\n        \"{{INTERFACE}}\", {\n";
const ENTRY_ITEM: &str = "            \"{{IMPLEMENTATION}}\",\n";
const ENTRY_CLOSE: &str = "            }\n        },";
const TABLE_CLOSE: &str = "\n    };\n";

/// Emits the `name -> [implementation names]` initializer list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryEmitter;

impl RegistryEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for RegistryEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Registry
    }

    fn emit(&self, spec: &Specification, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(TABLE_OPEN)?;

        for record in spec {
            let iface = RenderContext::for_interface(&record.name);
            out.write_str(&iface.render(ENTRY_OPEN))?;
            for implementation in &record.implementations {
                out.write_str(&iface.with_implementation(implementation).render(ENTRY_ITEM))?;
            }
            out.write_str(ENTRY_CLOSE)?;
        }

        out.write_str(TABLE_CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InterfaceRecord;

    #[test]
    fn single_interface_table() {
        let spec = Specification::default()
            .with_interface(InterfaceRecord::new("Shape", ["Circle", "Square"]));

        let text = RegistryEmitter::new().render(&spec).unwrap();

        let expected = concat!(
            "    m_availableImplementationNames = {\n",
            "        {\n",
            "        \"Shape\", {\n",
            "            \"Circle\",\n",
            "            \"Square\",\n",
            "            }\n",
            "        },\n",
            "    };\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn entries_are_comma_joined() {
        let spec = Specification::default()
            .with_interface(InterfaceRecord::new("A", ["A1"]))
            .with_interface(InterfaceRecord::new("B", ["B1"]));

        let text = RegistryEmitter::new().render(&spec).unwrap();

        assert!(text.contains("        },{\n        \"B\", {\n"));
    }

    #[test]
    fn keys_keep_qualified_names() {
        let spec = Specification::default()
            .with_interface(InterfaceRecord::new("geo::Shape", ["geo::Circle"]));

        let text = RegistryEmitter::new().render(&spec).unwrap();

        assert!(text.contains("\"geo::Shape\", {"));
        assert!(text.contains("\"geo::Circle\","));
    }

    #[test]
    fn empty_table() {
        let text = RegistryEmitter::new()
            .render(&Specification::default())
            .unwrap();
        assert_eq!(text, "    m_availableImplementationNames = {\n        \n    };\n");
    }
}
