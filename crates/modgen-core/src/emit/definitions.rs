//! `moduleLoaderFunctions.ipp`: storage, accessors and factories.
//!
//! For each interface the host gets two ways in:
//!
//! - `ModuleLoader::getImplementation<I>()` borrows the selected singleton
//!   through `p_<I>`
//! - `ModuleLoader::getInstance<I>()` builds a fresh owned instance through
//!   the factory pointer `pf_<I>`
//!
//! Both pointers are left unset here. The selection artifact assigns them to
//! one of the `i_<Impl>` / `new<Impl>` pairs emitted below, so the
//! per-implementation pairs must be emitted in specification order.

use std::fmt;

use crate::domain::{ArtifactKind, RenderContext, Specification};

use super::Emitter;

const INTERFACE_POINTER: &str = "static {{INTERFACE}}* {{POINTER}};\n";

const IMPLEMENTATION_ACCESSOR: &str = concat!(
    "template<>\n",
    "{{INTERFACE}}& ModuleLoader::getImplementation()\n",
    "{\n",
    "    return *{{POINTER}};\n",
    "}\n",
);

const FACTORY_POINTER: &str = "std::unique_ptr<{{INTERFACE}}> (*{{FUNC_POINTER}})();\n";

const INSTANCE_ACCESSOR: &str = concat!(
    "template<>\n",
    "std::unique_ptr<{{INTERFACE}}> ModuleLoader::getInstance() const\n",
    "{\n",
    "    return (*{{FUNC_POINTER}})();\n",
    "}\n",
);

const STORED_INSTANCE: &str = "static {{IMPLEMENTATION}} {{INSTANCE}};\n";

const FACTORY_FUNCTION: &str = concat!(
    "std::unique_ptr<{{INTERFACE}}> {{FACTORY}}()\n",
    "{\n",
    "    return std::unique_ptr<{{IMPLEMENTATION}}>(new {{IMPLEMENTATION}});\n",
    "}\n",
);

/// Emits the static definitions backing `ModuleLoader`'s accessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionEmitter;

impl DefinitionEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for DefinitionEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Definitions
    }

    fn emit(&self, spec: &Specification, out: &mut dyn fmt::Write) -> fmt::Result {
        for record in spec {
            let iface = RenderContext::for_interface(&record.name);

            out.write_str(&iface.render(INTERFACE_POINTER))?;
            out.write_str(&iface.render(IMPLEMENTATION_ACCESSOR))?;
            out.write_str(&iface.render(FACTORY_POINTER))?;
            out.write_str(&iface.render(INSTANCE_ACCESSOR))?;

            for implementation in &record.implementations {
                let ctx = iface.with_implementation(implementation);
                out.write_str(&ctx.render(STORED_INSTANCE))?;
                out.write_str(&ctx.render(FACTORY_FUNCTION))?;
            }

            out.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InterfaceRecord;

    fn shape() -> Specification {
        Specification::default().with_interface(InterfaceRecord::new("Shape", ["Circle", "Square"]))
    }

    #[test]
    fn full_block_for_one_interface() {
        let text = DefinitionEmitter::new().render(&shape()).unwrap();

        let expected = concat!(
            "static Shape* p_Shape;\n",
            "template<>\n",
            "Shape& ModuleLoader::getImplementation()\n",
            "{\n",
            "    return *p_Shape;\n",
            "}\n",
            "std::unique_ptr<Shape> (*pf_Shape)();\n",
            "template<>\n",
            "std::unique_ptr<Shape> ModuleLoader::getInstance() const\n",
            "{\n",
            "    return (*pf_Shape)();\n",
            "}\n",
            "static Circle i_Circle;\n",
            "std::unique_ptr<Shape> newCircle()\n",
            "{\n",
            "    return std::unique_ptr<Circle>(new Circle);\n",
            "}\n",
            "static Square i_Square;\n",
            "std::unique_ptr<Shape> newSquare()\n",
            "{\n",
            "    return std::unique_ptr<Square>(new Square);\n",
            "}\n",
            "\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn implementations_keep_specification_order() {
        let text = DefinitionEmitter::new().render(&shape()).unwrap();

        let circle = text.find("static Circle i_Circle;").unwrap();
        let new_circle = text.find("newCircle()").unwrap();
        let square = text.find("static Square i_Square;").unwrap();
        let new_square = text.find("newSquare()").unwrap();

        assert!(circle < new_circle);
        assert!(new_circle < square);
        assert!(square < new_square);
    }

    #[test]
    fn qualified_types_keep_namespaces_identifiers_do_not() {
        let spec = Specification::default()
            .with_interface(InterfaceRecord::new("Nextsim::IIceAlbedo", ["Nextsim::SMUIceAlbedo"]));

        let text = DefinitionEmitter::new().render(&spec).unwrap();

        assert!(text.contains("static Nextsim::IIceAlbedo* p_IIceAlbedo;\n"));
        assert!(text.contains("std::unique_ptr<Nextsim::IIceAlbedo> (*pf_IIceAlbedo)();\n"));
        assert!(text.contains("static Nextsim::SMUIceAlbedo i_SMUIceAlbedo;\n"));
        assert!(text.contains(
            "    return std::unique_ptr<Nextsim::SMUIceAlbedo>(new Nextsim::SMUIceAlbedo);\n"
        ));
    }

    #[test]
    fn interface_without_implementations_still_gets_accessors() {
        let spec = Specification::default()
            .with_interface(InterfaceRecord::new("Lonely", Vec::<&str>::new()));

        let text = DefinitionEmitter::new().render(&spec).unwrap();

        assert!(text.contains("static Lonely* p_Lonely;"));
        assert!(text.contains("(*pf_Lonely)();"));
        assert!(!text.contains("static Lonely i_"));
    }
}
