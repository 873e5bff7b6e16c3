//! Render command handler.
//!
//! Renders a prompt's tone-selected body to stdout with the global variable
//! scope plus any `--var` overrides interpolated. Stdout carries only the
//! rendered text, so it can be piped straight into a clipboard tool.

use crate::store;
use clap::Args;
use std::collections::HashMap;
use stepdeck_catalog::{load_catalog, Tone};
use stepdeck_core::{config::AppConfig, AppError, AppResult};
use stepdeck_prompt::render_tone;

/// Render a prompt template to stdout
#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Step reference: numeric id or short title
    pub step: String,

    /// Prompt id within the step
    pub prompt: String,

    /// Tone variant to render
    #[arg(short, long, default_value = "diagnostic")]
    pub tone: Tone,

    /// Local variable override, repeatable (KEY=VALUE)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RenderCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let catalog = load_catalog(&config.workspace)?;

        let step = catalog
            .find_step(&self.step)
            .ok_or_else(|| AppError::Catalog(format!("No step matches '{}'", self.step)))?;

        let prompt = step.prompt(&self.prompt).ok_or_else(|| {
            AppError::Render(format!(
                "Step '{}' has no prompt '{}'. Available: {}",
                step.short_title,
                self.prompt,
                step.prompts
                    .iter()
                    .map(|p| p.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        let global_scope: HashMap<String, String> =
            store::load_global_vars(config)?.into_iter().collect();
        let local_scope = parse_var_args(&self.vars)?;

        let output = render_tone(prompt, self.tone, &local_scope, &global_scope);

        if output.is_empty() {
            tracing::warn!(
                "Prompt '{}' has no {} body; nothing to render",
                prompt.id,
                self.tone
            );
        } else if output.contains("{{") {
            tracing::warn!("Rendered output still contains unresolved {{{{...}}}} placeholders");
        }

        if self.json {
            let json_output = serde_json::json!({
                "stepId": step.id,
                "promptId": prompt.id,
                "tone": self.tone.as_str(),
                "output": output,
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        } else {
            println!("{}", output);
        }

        Ok(())
    }
}

/// Parse repeated `--var KEY=VALUE` arguments into a scope map.
fn parse_var_args(args: &[String]) -> AppResult<HashMap<String, String>> {
    let mut scope = HashMap::new();

    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            AppError::Render(format!("Invalid --var '{}': expected KEY=VALUE", arg))
        })?;

        if key.is_empty() {
            return Err(AppError::Render(format!(
                "Invalid --var '{}': empty key",
                arg
            )));
        }

        scope.insert(key.to_string(), value.to_string());
    }

    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_args() {
        let scope =
            parse_var_args(&["table_name=profiles".to_string(), "x=a=b".to_string()]).unwrap();
        assert_eq!(scope.get("table_name").unwrap(), "profiles");
        // Only the first '=' splits; values may contain '='.
        assert_eq!(scope.get("x").unwrap(), "a=b");
    }

    #[test]
    fn test_parse_var_args_rejects_missing_equals() {
        assert!(parse_var_args(&["table_name".to_string()]).is_err());
    }

    #[test]
    fn test_parse_var_args_rejects_empty_key() {
        assert!(parse_var_args(&["=value".to_string()]).is_err());
    }
}
