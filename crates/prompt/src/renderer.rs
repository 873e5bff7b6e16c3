//! Template rendering.
//!
//! Substitutes `{{key}}` markers in a tone-selected template body with values
//! from the two-tier variable scope. This is pure string transformation: the
//! function is total, and an unresolved marker in the output is a designed
//! affordance (the user still needs to supply that variable), not a failure.

use crate::scope::effective_replacements;
use std::collections::HashMap;
use stepdeck_catalog::{PromptTemplate, Tone, VariableDef};

/// Render a template body against the two-tier variable scope.
///
/// Every `{{key}}` marker whose key resolves in the effective replacement
/// map is replaced with its value; keys absent from both scopes are left
/// verbatim. The body is scanned in a single pass over whole markers, so a
/// key can never partially match inside a longer key (`{{table}}` leaves
/// `{{table_name}}` untouched) and marker-like text inside a substituted
/// value is never re-expanded. Keys match literally and case-sensitively.
pub fn render(
    body: &str,
    declared: &[VariableDef],
    local_scope: &HashMap<String, String>,
    global_scope: &HashMap<String, String>,
) -> String {
    if body.is_empty() {
        return String::new();
    }

    let replacements = effective_replacements(declared, local_scope, global_scope);

    let mut output = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        match after_open.find("}}") {
            Some(end) => {
                let key = &after_open[..end];
                match replacements.get(key) {
                    Some(value) => output.push_str(value),
                    // Unknown key: the marker stays verbatim.
                    None => {
                        output.push_str("{{");
                        output.push_str(key);
                        output.push_str("}}");
                    }
                }
                rest = &after_open[end + 2..];
            }
            // Unterminated marker: emit the tail as-is.
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}

/// Render the tone-selected body of a prompt template.
///
/// A missing tone variant renders as the empty string.
pub fn render_tone(
    prompt: &PromptTemplate,
    tone: Tone,
    local_scope: &HashMap<String, String>,
    global_scope: &HashMap<String, String>,
) -> String {
    let body = prompt.bodies.body_for(tone);
    if body.is_empty() {
        tracing::debug!("Prompt '{}' has no {} body", prompt.id, tone);
        return String::new();
    }

    render(body, &prompt.variables, local_scope, global_scope)
}
