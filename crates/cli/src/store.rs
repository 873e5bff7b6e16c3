//! Workspace-local persistence for the CLI layer.
//!
//! The core engines treat their inputs as immutable snapshots; durable state
//! is owned here. Two small YAML files live under `.stepdeck/`:
//! - `vars.yaml` — the global variable scope (key → value)
//! - `state.yaml` — checklist tick state (step id → completed item ids)
//!
//! Both are read and written whole-file; at this size there is nothing to
//! gain from anything fancier.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use stepdeck_core::{AppConfig, AppError, AppResult};

/// Global variable scope as persisted. BTreeMap keeps file output stable.
pub type GlobalVars = BTreeMap<String, String>;

fn vars_path(config: &AppConfig) -> PathBuf {
    config.stepdeck_dir().join("vars.yaml")
}

fn state_path(config: &AppConfig) -> PathBuf {
    config.stepdeck_dir().join("state.yaml")
}

/// Load the persisted global variable scope. Missing file means empty scope.
pub fn load_global_vars(config: &AppConfig) -> AppResult<GlobalVars> {
    let path = vars_path(config);

    if !path.exists() {
        return Ok(GlobalVars::new());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Store(format!("Failed to read vars file {:?}: {}", path, e)))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| AppError::Store(format!("Failed to parse vars file {:?}: {}", path, e)))
}

/// Persist the global variable scope.
pub fn save_global_vars(config: &AppConfig, vars: &GlobalVars) -> AppResult<()> {
    config.ensure_stepdeck_dir()?;
    let path = vars_path(config);

    let contents = serde_yaml::to_string(vars)?;
    std::fs::write(&path, contents)
        .map_err(|e| AppError::Store(format!("Failed to write vars file {:?}: {}", path, e)))?;

    tracing::debug!("Saved {} global variables to {:?}", vars.len(), path);

    Ok(())
}

/// Persisted checklist tick state, step id → set of completed item ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistState {
    #[serde(default)]
    pub completed: BTreeMap<u32, BTreeSet<String>>,
}

impl ChecklistState {
    /// Whether an item is ticked.
    pub fn is_completed(&self, step_id: u32, item_id: &str) -> bool {
        self.completed
            .get(&step_id)
            .map(|items| items.contains(item_id))
            .unwrap_or(false)
    }

    /// Toggle an item, returning its new state.
    pub fn toggle(&mut self, step_id: u32, item_id: &str) -> bool {
        let items = self.completed.entry(step_id).or_default();
        if items.remove(item_id) {
            false
        } else {
            items.insert(item_id.to_string());
            true
        }
    }
}

/// Load checklist tick state. Missing file means nothing is ticked.
pub fn load_checklist_state(config: &AppConfig) -> AppResult<ChecklistState> {
    let path = state_path(config);

    if !path.exists() {
        return Ok(ChecklistState::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Store(format!("Failed to read state file {:?}: {}", path, e)))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| AppError::Store(format!("Failed to parse state file {:?}: {}", path, e)))
}

/// Persist checklist tick state.
pub fn save_checklist_state(config: &AppConfig, state: &ChecklistState) -> AppResult<()> {
    config.ensure_stepdeck_dir()?;
    let path = state_path(config);

    let contents = serde_yaml::to_string(state)?;
    std::fs::write(&path, contents)
        .map_err(|e| AppError::Store(format!("Failed to write state file {:?}: {}", path, e)))?;

    Ok(())
}
