//! Placeholder substitution for the emitter templates.
//!
//! Each emitter keeps its C++ snippets as `{{VARIABLE}}` templates and fills
//! them from a [`RenderContext`] built out of the names it is emitting. The
//! context derives every identifier through [`crate::domain::naming`], so no
//! emitter spells a prefix by hand.
//!
//! ## Standard Variables
//!
//! | Variable         | Example (`geo::Shape` / `geo::Circle`) | Set by                 |
//! |------------------|----------------------------------------|------------------------|
//! | `INTERFACE`      | `geo::Shape`                           | `for_interface`        |
//! | `INTERFACE_BARE` | `Shape`                                | `for_interface`        |
//! | `POINTER`        | `p_Shape`                              | `for_interface`        |
//! | `FUNC_POINTER`   | `pf_Shape`                             | `for_interface`        |
//! | `IMPLEMENTATION` | `geo::Circle`                          | `with_implementation`  |
//! | `IMPL_BARE`      | `Circle`                               | `with_implementation`  |
//! | `INSTANCE`       | `i_Circle`                             | `with_implementation`  |
//! | `FACTORY`        | `newCircle`                            | `with_implementation`  |

use std::collections::HashMap;

use crate::domain::entities::QualifiedName;

/// Variables available to one template render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context populated with the interface-level identifiers.
    pub fn for_interface(interface: &QualifiedName) -> Self {
        Self::new()
            .with_variable("INTERFACE", interface.as_str())
            .with_variable("INTERFACE_BARE", interface.bare())
            .with_variable("POINTER", interface.pointer_name())
            .with_variable("FUNC_POINTER", interface.func_pointer_name())
    }

    /// Copy of this context with the implementation-level identifiers added.
    pub fn with_implementation(&self, implementation: &QualifiedName) -> Self {
        self.clone()
            .with_variable("IMPLEMENTATION", implementation.as_str())
            .with_variable("IMPL_BARE", implementation.bare())
            .with_variable("INSTANCE", implementation.instance_name())
            .with_variable("FACTORY", implementation.factory_name())
    }

    /// Add or override a variable, consuming self.
    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` stays literal
    /// - substituted values are never rescanned, so a name containing
    ///   braces cannot trigger a second substitution
    /// - an unterminated `{{` is copied as-is
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 32);
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
