//! Command handlers for the stepdeck CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod check;
pub mod list;
pub mod render;
pub mod search;
pub mod show;
pub mod vars;

// Re-export command types for convenience
pub use check::CheckCommand;
pub use list::ListCommand;
pub use render::RenderCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
pub use vars::VarsCommand;
