//! Prompt rendering for the stepdeck CLI.
//!
//! This crate provides:
//! - Two-tier variable scope resolution (template-local shadows global)
//! - `{{key}}` marker substitution over tone-selected template bodies
//! - A single-slot render memoization cache

pub mod cache;
pub mod renderer;
pub mod scope;

// Re-export main entry points
pub use cache::RenderCache;
pub use renderer::{render, render_tone};
pub use scope::{effective_replacements, marker};
