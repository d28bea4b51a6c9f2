//! `moduleLoaderHeaders.ipp`: include directives.

use std::fmt;

use crate::domain::{ArtifactKind, RenderContext, Specification};

use super::Emitter;

const INCLUDE: &str = "#include \"{{HPP_PREFIX}}{{STEM}}.hpp\"\n";

/// Emits one `#include` per interface and per implementation, grouped by
/// interface and followed by a blank line. Header stems are bare names.
#[derive(Debug, Clone)]
pub struct HeaderEmitter {
    hpp_prefix: String,
}

impl HeaderEmitter {
    pub fn new(hpp_prefix: impl Into<String>) -> Self {
        Self {
            hpp_prefix: hpp_prefix.into(),
        }
    }
}

impl Emitter for HeaderEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Headers
    }

    fn emit(&self, spec: &Specification, out: &mut dyn fmt::Write) -> fmt::Result {
        let base = RenderContext::new().with_variable("HPP_PREFIX", self.hpp_prefix.as_str());

        for record in spec {
            let stems = std::iter::once(&record.name).chain(&record.implementations);
            for name in stems {
                let ctx = base.clone().with_variable("STEM", name.bare());
                out.write_str(&ctx.render(INCLUDE))?;
            }
            // blank line between interfaces
            out.write_char('\n')?;
        }

        Ok(())
    }
}
