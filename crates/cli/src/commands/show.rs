//! Show command handler.
//!
//! Prints one step: its checklist (with persisted tick state merged in) and
//! its prompt templates.

use crate::store;
use clap::Args;
use stepdeck_catalog::load_catalog;
use stepdeck_core::{config::AppConfig, AppError, AppResult};

/// Show one step: checklist and prompts
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Step reference: numeric id or short title
    pub step: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let catalog = load_catalog(&config.workspace)?;
        let state = store::load_checklist_state(config)?;

        let step = catalog
            .find_step(&self.step)
            .ok_or_else(|| AppError::Catalog(format!("No step matches '{}'", self.step)))?;

        if self.json {
            let checklist: Vec<_> = step
                .checklist
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.id,
                        "label": item.label,
                        "completed": state.is_completed(step.id, &item.id),
                    })
                })
                .collect();

            let prompts: Vec<_> = step
                .prompts
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "title": p.title,
                        "description": p.description,
                        "variables": p.variables.iter().map(|v| &v.key).collect::<Vec<_>>(),
                    })
                })
                .collect();

            let output = serde_json::json!({
                "id": step.id,
                "title": step.title,
                "shortTitle": step.short_title,
                "category": step.category,
                "keywords": step.keywords,
                "checklist": checklist,
                "prompts": prompts,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{} — {} [{}]", step.id, step.title, step.category);

            if !step.checklist.is_empty() {
                println!("\nChecklist:");
                for item in &step.checklist {
                    let mark = if state.is_completed(step.id, &item.id) {
                        "x"
                    } else {
                        " "
                    };
                    println!("  [{}] {:<20} {}", mark, item.id, item.label);
                }
            }

            if !step.prompts.is_empty() {
                println!("\nPrompts:");
                for prompt in &step.prompts {
                    println!("  {:<16} {}", prompt.id, prompt.title);
                    if !prompt.description.is_empty() {
                        println!("  {:<16} {}", "", prompt.description);
                    }
                    for var in &prompt.variables {
                        println!(
                            "  {:<16}   var: {} ({}, e.g. {})",
                            "", var.key, var.label, var.placeholder
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
