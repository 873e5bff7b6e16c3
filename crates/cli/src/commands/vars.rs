//! Vars command handler.
//!
//! Manages the persisted global variable scope (`.stepdeck/vars.yaml`).
//! These values are interpolated into every rendered prompt unless shadowed
//! by a template's declared local variables.

use crate::store;
use clap::{Args, Subcommand};
use stepdeck_core::{config::AppConfig, AppError, AppResult};

/// Manage the global variable scope
#[derive(Args, Debug)]
pub struct VarsCommand {
    #[command(subcommand)]
    pub action: VarsAction,
}

#[derive(Subcommand, Debug)]
pub enum VarsAction {
    /// List all global variables
    List(VarsListCommand),
    /// Print one variable's value
    Get(VarsGetCommand),
    /// Set a variable
    Set(VarsSetCommand),
    /// Remove a variable
    Unset(VarsUnsetCommand),
}

impl VarsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            VarsAction::List(cmd) => cmd.execute(config),
            VarsAction::Get(cmd) => cmd.execute(config),
            VarsAction::Set(cmd) => cmd.execute(config),
            VarsAction::Unset(cmd) => cmd.execute(config),
        }
    }
}

/// List all global variables
#[derive(Args, Debug)]
pub struct VarsListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl VarsListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let vars = store::load_global_vars(config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&vars)?);
        } else if vars.is_empty() {
            eprintln!("No global variables set.");
        } else {
            for (key, value) in &vars {
                println!("{} = {}", key, value);
            }
        }

        Ok(())
    }
}

/// Print one variable's value
#[derive(Args, Debug)]
pub struct VarsGetCommand {
    /// Variable key
    pub key: String,
}

impl VarsGetCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let vars = store::load_global_vars(config)?;

        match vars.get(&self.key) {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None => Err(AppError::Store(format!(
                "No global variable '{}'",
                self.key
            ))),
        }
    }
}

/// Set a variable
#[derive(Args, Debug)]
pub struct VarsSetCommand {
    /// Variable key
    pub key: String,

    /// Variable value
    pub value: String,
}

impl VarsSetCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let mut vars = store::load_global_vars(config)?;
        vars.insert(self.key.clone(), self.value.clone());
        store::save_global_vars(config, &vars)?;

        tracing::info!("Set global variable '{}'", self.key);

        Ok(())
    }
}

/// Remove a variable
#[derive(Args, Debug)]
pub struct VarsUnsetCommand {
    /// Variable key
    pub key: String,
}

impl VarsUnsetCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let mut vars = store::load_global_vars(config)?;

        if vars.remove(&self.key).is_none() {
            return Err(AppError::Store(format!(
                "No global variable '{}'",
                self.key
            )));
        }

        store::save_global_vars(config, &vars)?;

        tracing::info!("Removed global variable '{}'", self.key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> AppConfig {
        AppConfig {
            workspace: dir.path().to_path_buf(),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: true,
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);

        VarsSetCommand {
            key: "table_name".to_string(),
            value: "profiles".to_string(),
        }
        .execute(&config)
        .unwrap();

        let vars = store::load_global_vars(&config).unwrap();
        assert_eq!(vars.get("table_name").unwrap(), "profiles");

        VarsGetCommand {
            key: "table_name".to_string(),
        }
        .execute(&config)
        .unwrap();
    }

    #[test]
    fn test_unset_removes() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);

        VarsSetCommand {
            key: "bucket_name".to_string(),
            value: "avatars".to_string(),
        }
        .execute(&config)
        .unwrap();

        VarsUnsetCommand {
            key: "bucket_name".to_string(),
        }
        .execute(&config)
        .unwrap();

        assert!(store::load_global_vars(&config).unwrap().is_empty());
    }

    #[test]
    fn test_unset_missing_errors() {
        let dir = TempDir::new().unwrap();
        let result = VarsUnsetCommand {
            key: "missing".to_string(),
        }
        .execute(&config_for(&dir));

        assert!(result.is_err());
    }
}
