//! Two-tier variable scope resolution.
//!
//! A template's declared local variables shadow the project-wide global
//! scope. Resolution never mutates either scope: shadowing, not writing
//! through. A variable whose value is empty after trimming counts as absent
//! and resolves to its own `{{key}}` marker, which is the user-facing
//! "still needs input" signal.

use std::collections::HashMap;
use stepdeck_catalog::VariableDef;

/// The `{{key}}` marker for a variable key.
pub fn marker(key: &str) -> String {
    format!("{{{{{}}}}}", key)
}

/// Build the effective replacement map for a template.
///
/// Declared local variables resolve from the local scope only — declaring a
/// key claims it for the template, so an unset local does not fall back to
/// the global value. Global keys not shadowed by a declaration resolve from
/// the global scope. Each entry maps a key to either its value as given or,
/// when absent or whitespace-only, its own marker.
pub fn effective_replacements(
    declared: &[VariableDef],
    local_scope: &HashMap<String, String>,
    global_scope: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut replacements = HashMap::with_capacity(declared.len() + global_scope.len());

    for (key, value) in global_scope {
        if !declared.iter().any(|d| &d.key == key) {
            replacements.insert(key.clone(), resolve(Some(value), key));
        }
    }

    for def in declared {
        replacements.insert(def.key.clone(), resolve(local_scope.get(&def.key), &def.key));
    }

    replacements
}

/// The value as given if non-empty after trimming, else the key's own
/// marker. The value itself is not trimmed, only tested.
fn resolve(value: Option<&String>, key: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => marker(key),
    }
}
