//! Unique names for generated record/array types.
//!
//! Avro rejects two named types sharing one full name, so every generated
//! `<key>_record` / `<key>_array` candidate is checked against the names
//! already handed out in the current run.

use indexmap::IndexSet;

/// Lower-cased names allocated so far, in allocation order. Created fresh
/// per top-level inference call; nothing persists across runs.
pub type NameRegistry = IndexSet<String>;

/// Lower-case `candidate`, then append underscores until it no longer
/// collides with a previously allocated name. Always terminates: the
/// candidate grows strictly and the registry is finite.
pub fn allocate(registry: &mut NameRegistry, candidate: &str) -> String {
    let mut name = candidate.to_lowercase();
    while registry.contains(name.as_str()) {
        name.push('_');
    }
    registry.insert(name.clone());
    name
}
