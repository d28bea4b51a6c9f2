//! `moduleLoaderAssignments.ipp`: runtime (module, impl) selection.
//!
//! The artifact is the body of a function with `std::string module` and
//! `std::string impl` in scope. It is one `if / else` chain over interfaces,
//! each holding an inner chain over that interface's implementations:
//!
//! ```text
//! if (module == "Shape") {
//!     if (impl == "Circle") { p_Shape = &i_Circle; pf_Shape = &newCircle; }
//!     else if (impl == "Square") { ... }
//!     else { throwup(module, impl); }
//! } else <terminator>
//! ```
//!
//! The terminator depends on [`UnknownModulePolicy`].

use std::fmt;

use crate::domain::{ArtifactKind, RenderContext, Specification, UnknownModulePolicy};

use super::Emitter;

const CHAIN_OPEN: &str = "        ";
const MODULE_OPEN: &str = "if (module == \"{{INTERFACE}}\") {\n            ";
const IMPL_BRANCH: &str = concat!(
    "if (impl == \"{{IMPLEMENTATION}}\") {\n",
    "                {{POINTER}} = &{{INSTANCE}};\n",
    "                {{FUNC_POINTER}} = &{{FACTORY}};\n",
    "            } else ",
);
const MODULE_CLOSE: &str = concat!(
    "{\n",
    "                throwup(module, impl);\n",
    "            }\n",
    "\n",
    "        } else ",
);
const IGNORE_UNKNOWN_MODULE: &str = "{ }";
const REPORT_UNKNOWN_MODULE: &str = concat!(
    "{\n",
    "            throwup(module, impl);\n",
    "        }",
);

/// Emits the assignment chain wiring `p_*` and `pf_*` to the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEmitter {
    unknown_module: UnknownModulePolicy,
}

impl SelectionEmitter {
    pub fn new(unknown_module: UnknownModulePolicy) -> Self {
        Self { unknown_module }
    }

    fn terminator(&self) -> &'static str {
        match self.unknown_module {
            UnknownModulePolicy::Ignore => IGNORE_UNKNOWN_MODULE,
            UnknownModulePolicy::Report => REPORT_UNKNOWN_MODULE,
        }
    }
}

impl Emitter for SelectionEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Selection
    }

    fn emit(&self, spec: &Specification, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(CHAIN_OPEN)?;

        for record in spec {
            let iface = RenderContext::for_interface(&record.name);
            out.write_str(&iface.render(MODULE_OPEN))?;
            for implementation in &record.implementations {
                out.write_str(&iface.with_implementation(implementation).render(IMPL_BRANCH))?;
            }
            out.write_str(MODULE_CLOSE)?;
        }

        out.write_str(self.terminator())
    }
}
