//! List command handler.

use clap::Args;
use stepdeck_catalog::load_catalog;
use stepdeck_core::{config::AppConfig, AppResult};

/// List catalog steps
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Only show steps in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let catalog = load_catalog(&config.workspace)?;

        let steps: Vec<_> = catalog
            .steps
            .iter()
            .filter(|s| match &self.category {
                Some(cat) => s.category.eq_ignore_ascii_case(cat),
                None => true,
            })
            .collect();

        if self.json {
            let output: Vec<_> = steps
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "shortTitle": s.short_title,
                        "category": s.category,
                        "title": s.title,
                        "prompts": s.prompts.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for step in &steps {
                println!(
                    "{:>3}  {:<12} {:<10} {}",
                    step.id, step.short_title, step.category, step.title
                );
            }
            if steps.is_empty() {
                eprintln!("No steps match.");
            }
        }

        Ok(())
    }
}
