//! Catalog types for the stepdeck CLI.
//!
//! This module defines the domain entities for the troubleshooting catalog:
//! steps, their checklists, and the prompt templates they bundle. The catalog
//! is static data — nothing here is mutated after loading. Per-session
//! checklist tick state is owned by the CLI layer and merged in at display
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone variant selector for a prompt template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Investigate the problem
    Diagnostic,
    /// Apply a fix
    Fix,
    /// Confirm the fix worked
    Verify,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Fix => "fix",
            Self::Verify => "verify",
        }
    }

    /// All tone variants, in display order.
    pub fn all() -> [Tone; 3] {
        [Self::Diagnostic, Self::Fix, Self::Verify]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diagnostic" => Ok(Self::Diagnostic),
            "fix" => Ok(Self::Fix),
            "verify" => Ok(Self::Verify),
            other => Err(format!(
                "Unknown tone: {}. Expected one of: diagnostic, fix, verify",
                other
            )),
        }
    }
}

/// A variable declared by a prompt template.
///
/// Declared variables form the template's local scope; their values shadow
/// the global scope for matching keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDef {
    /// Substitution key as it appears inside `{{...}}` markers
    pub key: String,

    /// Human-readable label for input UIs
    pub label: String,

    /// Example value shown before the user fills anything in
    #[serde(default)]
    pub placeholder: String,

    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The three tone variants of a template body.
///
/// A missing variant deserializes as the empty string and renders as the
/// empty string — malformed catalog data degrades, it does not fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToneBodies {
    #[serde(default)]
    pub diagnostic: String,

    #[serde(default)]
    pub fix: String,

    #[serde(default)]
    pub verify: String,
}

impl ToneBodies {
    /// The body text for a tone. Empty string if the variant is absent.
    pub fn body_for(&self, tone: Tone) -> &str {
        match tone {
            Tone::Diagnostic => &self.diagnostic,
            Tone::Fix => &self.fix,
            Tone::Verify => &self.verify,
        }
    }
}

/// A copyable prompt template with three tone variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Identifier, unique within the owning step
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Short description of what the prompt is for
    #[serde(default)]
    pub description: String,

    /// Keyword tags used by search
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Declared local variables (may be empty)
    #[serde(default)]
    pub variables: Vec<VariableDef>,

    /// The three tone bodies
    pub bodies: ToneBodies,
}

/// One checklist item within a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Identifier, unique within the owning step
    pub id: String,

    /// Display label
    pub label: String,

    /// Completed flag. Always false in the static fixture; the CLI merges
    /// persisted tick state over this at display time.
    #[serde(default)]
    pub completed: bool,
}

/// One troubleshooting step: a checklist plus an ordered list of prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Numeric identifier, unique across the catalog
    pub id: u32,

    /// Full title
    pub title: String,

    /// Short title, used for compact listings and CLI lookup
    #[serde(rename = "shortTitle")]
    pub short_title: String,

    /// Category tag (e.g., "database", "auth")
    pub category: String,

    /// Keyword tags used by search
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Checklist items
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    /// Prompt templates, in display order
    #[serde(default)]
    pub prompts: Vec<PromptTemplate>,
}

impl Step {
    /// Find a prompt by its id.
    pub fn prompt(&self, prompt_id: &str) -> Option<&PromptTemplate> {
        self.prompts.iter().find(|p| p.id == prompt_id)
    }
}

/// The full static catalog: an ordered list of steps.
///
/// Insertion order is significant — it is the relevance tiebreak for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub steps: Vec<Step>,
}

impl Catalog {
    /// Look up a step by numeric id.
    pub fn step_by_id(&self, id: u32) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Look up a step by numeric id or short title (case-insensitive).
    pub fn find_step(&self, reference: &str) -> Option<&Step> {
        if let Ok(id) = reference.parse::<u32>() {
            return self.step_by_id(id);
        }
        self.steps
            .iter()
            .find(|s| s.short_title.eq_ignore_ascii_case(reference))
    }
}
