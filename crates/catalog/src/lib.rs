//! Troubleshooting catalog for the stepdeck CLI.
//!
//! This crate provides:
//! - Domain types for steps, checklists, and prompt templates
//! - A loader for the embedded catalog fixture (with workspace override)
//! - Substring search over step and prompt metadata

pub mod loader;
pub mod search;
pub mod types;

// Re-export main types
pub use loader::{builtin_catalog, load_catalog};
pub use search::{search, MatchKind, SearchResult, MAX_RESULTS};
pub use types::{Catalog, ChecklistItem, PromptTemplate, Step, Tone, ToneBodies, VariableDef};
