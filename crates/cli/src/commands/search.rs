//! Search command handler.

use clap::Args;
use stepdeck_catalog::{load_catalog, search, MatchKind};
use stepdeck_core::{config::AppConfig, AppResult};

/// Search steps and prompts
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Query text (whitespace-separated terms, all must match)
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let catalog = load_catalog(&config.workspace)?;
        let results = search(&self.query, &catalog.steps);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            if results.is_empty() {
                eprintln!("No matches.");
                return Ok(());
            }

            for result in &results {
                match result.kind {
                    MatchKind::Step => {
                        println!("step    {:>3} {:<12} {}", result.step_id, result.short_title, result.title)
                    }
                    MatchKind::Prompt => println!(
                        "prompt  {:>3} {:<12} {} ({})",
                        result.step_id,
                        result.short_title,
                        result.title,
                        result.prompt_id.as_deref().unwrap_or("")
                    ),
                }
            }
        }

        Ok(())
    }
}
