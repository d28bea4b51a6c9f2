//! Naming conventions shared by every emitter.
//!
//! These functions are the single source of truth for the identifiers that
//! appear in the generated `.ipp` files. The consuming build compiles the
//! four artifacts together, so a pointer declared in the definitions file
//! must be spelled exactly the same way in the assignments file.
//!
//! | Role                      | Identifier     |
//! |---------------------------|----------------|
//! | Interface pointer         | `p_<Bare>`     |
//! | Stored implementation     | `i_<Bare>`     |
//! | Factory function pointer  | `pf_<Bare>`    |
//! | Factory function          | `new<Bare>`    |
//!
//! `<Bare>` is the last `:`-delimited component of the qualified name, so
//! `physics::ThermoIce` and `ThermoIce` both produce `ThermoIce`.

/// Separator between namespace components. `::` splits into an empty
/// component and a name, which is harmless since only the last one is kept.
pub const NAMESPACE_DELIMITER: char = ':';

pub const POINTER_PREFIX: &str = "p_";
pub const INSTANCE_PREFIX: &str = "i_";
pub const FUNC_POINTER_PREFIX: &str = "pf_";
pub const FACTORY_PREFIX: &str = "new";

/// Strip every namespace qualifier, keeping the final component.
pub fn bare(name: &str) -> &str {
    name.rsplit(NAMESPACE_DELIMITER).next().unwrap_or(name)
}

/// Name of the static pointer to the currently selected implementation of
/// an interface.
pub fn pointer_name(name: &str) -> String {
    format!("{POINTER_PREFIX}{}", bare(name))
}

/// Name of the static storage for one implementation instance.
pub fn instance_name(name: &str) -> String {
    format!("{INSTANCE_PREFIX}{}", bare(name))
}

/// Name of the static pointer to the selected factory function.
pub fn func_pointer_name(name: &str) -> String {
    format!("{FUNC_POINTER_PREFIX}{}", bare(name))
}

/// Name of the generated factory function for one implementation.
pub fn factory_name(name: &str) -> String {
    format!("{FACTORY_PREFIX}{}", bare(name))
}
