//! Catalog loader.
//!
//! The catalog ships as a YAML fixture embedded in this crate. A workspace
//! may replace it wholesale by placing a `catalog.yaml` inside its
//! `.stepdeck/` directory — no merging, the override wins.

use crate::types::Catalog;
use std::collections::HashSet;
use std::path::Path;
use stepdeck_core::{AppError, AppResult};

/// The built-in catalog fixture.
const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.yaml");

/// Load the catalog for a workspace.
///
/// Uses `.stepdeck/catalog.yaml` under the workspace root if present,
/// otherwise the embedded fixture. The result is validated either way.
///
/// # Example
/// ```no_run
/// use stepdeck_catalog::load_catalog;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = load_catalog(Path::new("."))?;
/// println!("{} steps", catalog.steps.len());
/// # Ok(())
/// # }
/// ```
pub fn load_catalog(workspace_path: &Path) -> AppResult<Catalog> {
    let override_path = workspace_path.join(".stepdeck/catalog.yaml");

    let catalog = if override_path.exists() {
        tracing::debug!("Loading catalog override from: {:?}", override_path);

        let contents = std::fs::read_to_string(&override_path).map_err(|e| {
            AppError::Catalog(format!(
                "Failed to read catalog file {:?}: {}",
                override_path, e
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Catalog(format!(
                "Failed to parse catalog YAML {:?}: {}",
                override_path, e
            ))
        })?
    } else {
        builtin_catalog()?
    };

    validate_catalog(&catalog)?;

    tracing::info!("Loaded catalog with {} steps", catalog.steps.len());

    Ok(catalog)
}

/// Parse the embedded catalog fixture.
pub fn builtin_catalog() -> AppResult<Catalog> {
    serde_yaml::from_str(DEFAULT_CATALOG)
        .map_err(|e| AppError::Catalog(format!("Built-in catalog is invalid: {}", e)))
}

/// Validate catalog invariants.
fn validate_catalog(catalog: &Catalog) -> AppResult<()> {
    let mut step_ids = HashSet::new();
    let mut short_titles = HashSet::new();

    for step in &catalog.steps {
        if step.title.is_empty() {
            return Err(AppError::Catalog(format!(
                "Step {} has an empty title",
                step.id
            )));
        }

        if step.short_title.is_empty() {
            return Err(AppError::Catalog(format!(
                "Step {} has an empty short title",
                step.id
            )));
        }

        if !step_ids.insert(step.id) {
            return Err(AppError::Catalog(format!("Duplicate step id: {}", step.id)));
        }

        if !short_titles.insert(step.short_title.to_lowercase()) {
            return Err(AppError::Catalog(format!(
                "Duplicate step short title: {}",
                step.short_title
            )));
        }

        let mut prompt_ids = HashSet::new();
        for prompt in &step.prompts {
            if prompt.title.is_empty() {
                return Err(AppError::Catalog(format!(
                    "Prompt '{}' in step {} has an empty title",
                    prompt.id, step.id
                )));
            }

            if !prompt_ids.insert(prompt.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate prompt id '{}' in step {}",
                    prompt.id, step.id
                )));
            }

            let mut var_keys = HashSet::new();
            for var in &prompt.variables {
                if var.key.is_empty() {
                    return Err(AppError::Catalog(format!(
                        "Prompt '{}' in step {} declares a variable with an empty key",
                        prompt.id, step.id
                    )));
                }

                if !var_keys.insert(var.key.as_str()) {
                    return Err(AppError::Catalog(format!(
                        "Duplicate variable key '{}' in prompt '{}' of step {}",
                        var.key, prompt.id, step.id
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses_and_validates() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.steps.len() >= 10);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_builtin_catalog_has_prompts_with_tone_bodies() {
        let catalog = builtin_catalog().unwrap();
        for step in &catalog.steps {
            assert!(!step.prompts.is_empty(), "step {} has no prompts", step.id);
            for prompt in &step.prompts {
                assert!(
                    !prompt.bodies.diagnostic.is_empty(),
                    "prompt {} has no diagnostic body",
                    prompt.id
                );
            }
        }
    }

    #[test]
    fn test_load_without_override_uses_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = load_catalog(temp_dir.path()).unwrap();
        assert!(catalog.steps.len() >= 10);
    }

    #[test]
    fn test_load_with_override() {
        let temp_dir = TempDir::new().unwrap();
        let stepdeck_dir = temp_dir.path().join(".stepdeck");
        fs::create_dir_all(&stepdeck_dir).unwrap();
        fs::write(
            stepdeck_dir.join("catalog.yaml"),
            r#"
steps:
  - id: 1
    title: "Only step"
    shortTitle: only
    category: test
    prompts:
      - id: p1
        title: "Only prompt"
        bodies:
          diagnostic: "look at it"
"#,
        )
        .unwrap();

        let catalog = load_catalog(temp_dir.path()).unwrap();
        assert_eq!(catalog.steps.len(), 1);
        assert_eq!(catalog.steps[0].short_title, "only");
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let temp_dir = TempDir::new().unwrap();
        let stepdeck_dir = temp_dir.path().join(".stepdeck");
        fs::create_dir_all(&stepdeck_dir).unwrap();
        fs::write(stepdeck_dir.join("catalog.yaml"), "not: a: catalog:").unwrap();

        assert!(load_catalog(temp_dir.path()).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_step_ids() {
        let yaml = r#"
steps:
  - id: 1
    title: "A"
    shortTitle: a
    category: test
  - id: 1
    title: "B"
    shortTitle: b
    category: test
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let yaml = r#"
steps:
  - id: 1
    title: ""
    shortTitle: a
    category: test
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_variable_keys() {
        let yaml = r#"
steps:
  - id: 1
    title: "A"
    shortTitle: a
    category: test
    prompts:
      - id: p1
        title: "P"
        variables:
          - key: table_name
            label: "Table"
          - key: table_name
            label: "Table again"
        bodies:
          diagnostic: "x"
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_catalog(&catalog).is_err());
    }
}
