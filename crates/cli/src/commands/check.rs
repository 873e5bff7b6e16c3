//! Check command handler.
//!
//! Toggles a checklist item's completed state. The catalog itself stays
//! immutable; ticks live in `.stepdeck/state.yaml`.

use crate::store;
use clap::Args;
use stepdeck_catalog::load_catalog;
use stepdeck_core::{config::AppConfig, AppError, AppResult};

/// Toggle a checklist item
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Step reference: numeric id or short title
    pub step: String,

    /// Checklist item id
    pub item: String,
}

impl CheckCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let catalog = load_catalog(&config.workspace)?;

        let step = catalog
            .find_step(&self.step)
            .ok_or_else(|| AppError::Catalog(format!("No step matches '{}'", self.step)))?;

        let item = step
            .checklist
            .iter()
            .find(|i| i.id == self.item)
            .ok_or_else(|| {
                AppError::Catalog(format!(
                    "Step '{}' has no checklist item '{}'. Available: {}",
                    step.short_title,
                    self.item,
                    step.checklist
                        .iter()
                        .map(|i| i.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;

        let mut state = store::load_checklist_state(config)?;
        let now_completed = state.toggle(step.id, &item.id);
        store::save_checklist_state(config, &state)?;

        let mark = if now_completed { "x" } else { " " };
        println!("[{}] {}", mark, item.label);

        Ok(())
    }
}
