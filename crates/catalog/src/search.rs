//! Search over the step/prompt catalog.
//!
//! Substring AND-matching across step and prompt metadata, with a fixed
//! result cap. Ordering is catalog order; there is no secondary relevance
//! scoring. A step-level match suppresses prompt-level matches for that same
//! step (but not for other steps) to keep the result list free of redundant
//! parent/child pairs.

use crate::types::Step;
use serde::{Deserialize, Serialize};

/// Maximum number of results returned by [`search`].
pub const MAX_RESULTS: usize = 8;

/// What part of the catalog a search result matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Step,
    Prompt,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Prompt => "prompt",
        }
    }
}

/// One search hit, referencing a step and optionally a prompt within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Owning step id
    #[serde(rename = "stepId")]
    pub step_id: u32,

    /// Owning step short title, for compact display context
    #[serde(rename = "shortTitle")]
    pub short_title: String,

    /// Match type
    pub kind: MatchKind,

    /// Display title (step title for step matches, prompt title otherwise)
    pub title: String,

    /// Keyword tags of the matched entity
    pub keywords: Vec<String>,

    /// Prompt id, present only for prompt matches
    #[serde(rename = "promptId", skip_serializing_if = "Option::is_none")]
    pub prompt_id: Option<String>,
}

/// Search the catalog for a query string.
///
/// The query is tokenized on whitespace into lowercase terms; an entity
/// matches iff every term appears (case-insensitive substring) in at least
/// one of its searchable fields. A whitespace-only query returns no results.
/// The result list is capped at [`MAX_RESULTS`], first-found in catalog
/// order. This function is total — no matches is an empty list, not an
/// error.
pub fn search(query: &str, steps: &[Step]) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let terms: Vec<String> = trimmed
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    let mut results = Vec::new();

    'steps: for step in steps {
        if results.len() >= MAX_RESULTS {
            break;
        }

        if step_matches(step, &terms) {
            results.push(SearchResult {
                step_id: step.id,
                short_title: step.short_title.clone(),
                kind: MatchKind::Step,
                title: step.title.clone(),
                keywords: step.keywords.clone(),
                prompt_id: None,
            });
            // A matched step suppresses its own prompt matches.
            continue;
        }

        for prompt in &step.prompts {
            if results.len() >= MAX_RESULTS {
                break 'steps;
            }

            let fields_match = terms.iter().all(|term| {
                contains_term(&prompt.title, term)
                    || contains_term(&prompt.description, term)
                    || prompt.keywords.iter().any(|k| contains_term(k, term))
            });

            if fields_match {
                results.push(SearchResult {
                    step_id: step.id,
                    short_title: step.short_title.clone(),
                    kind: MatchKind::Prompt,
                    title: prompt.title.clone(),
                    keywords: prompt.keywords.clone(),
                    prompt_id: Some(prompt.id.clone()),
                });
            }
        }
    }

    tracing::debug!("Search for '{}' returned {} results", trimmed, results.len());

    results
}

/// Every term must appear in at least one of title, short title, or keywords.
fn step_matches(step: &Step, terms: &[String]) -> bool {
    terms.iter().all(|term| {
        contains_term(&step.title, term)
            || contains_term(&step.short_title, term)
            || step.keywords.iter().any(|k| contains_term(k, term))
    })
}

/// Case-insensitive substring test. `term` is already lowercase.
fn contains_term(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PromptTemplate, ToneBodies};

    fn step(id: u32, title: &str, short: &str, keywords: &[&str]) -> Step {
        Step {
            id,
            title: title.to_string(),
            short_title: short.to_string(),
            category: "test".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            checklist: vec![],
            prompts: vec![],
        }
    }

    fn prompt(id: &str, title: &str, description: &str, keywords: &[&str]) -> PromptTemplate {
        PromptTemplate {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            variables: vec![],
            bodies: ToneBodies::default(),
        }
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let steps = vec![step(1, "RLS errors", "rls", &["policy"])];
        assert!(search("", &steps).is_empty());
        assert!(search("   ", &steps).is_empty());
    }

    #[test]
    fn test_step_match_on_title_and_keywords() {
        let steps = vec![
            step(1, "Row Level Security errors", "rls", &["policy", "permission"]),
            step(2, "Auth session expiry", "auth", &["jwt", "session"]),
        ];

        let results = search("policy", &steps);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].step_id, 1);
        assert_eq!(results[0].kind, MatchKind::Step);
    }

    #[test]
    fn test_step_match_suppresses_prompt_match_same_step() {
        let mut s = step(1, "RLS policy errors", "rls", &[]);
        s.prompts
            .push(prompt("p1", "Debug rls policy", "Find the failing policy", &[]));
        let steps = vec![s];

        let results = search("rls", &steps);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Step);
        assert!(results[0].prompt_id.is_none());
    }

    #[test]
    fn test_prompt_match_when_step_does_not_match() {
        let mut s = step(1, "Storage bucket access", "storage", &["bucket"]);
        s.prompts.push(prompt(
            "signed-url",
            "Signed URL expiry",
            "Debug expired signed URLs",
            &["url"],
        ));
        let steps = vec![s];

        let results = search("signed", &steps);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Prompt);
        assert_eq!(results[0].prompt_id.as_deref(), Some("signed-url"));
        assert_eq!(results[0].short_title, "storage");
    }

    #[test]
    fn test_multi_term_is_and_and_case_insensitive() {
        let steps = vec![
            step(1, "RLS policy errors", "rls", &[]),
            step(2, "RLS performance", "rls-perf", &[]),
        ];

        let results = search("RLS Policy", &steps);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].step_id, 1);
    }

    #[test]
    fn test_terms_may_match_different_fields() {
        // "rls" hits the short title, "permission" hits a keyword.
        let steps = vec![step(1, "Access denied", "rls", &["permission"])];
        assert_eq!(search("rls permission", &steps).len(), 1);
    }

    #[test]
    fn test_result_cap() {
        let steps: Vec<Step> = (1..=12)
            .map(|i| step(i, &format!("Database step {}", i), &format!("db{}", i), &[]))
            .collect();

        let results = search("database", &steps);
        assert_eq!(results.len(), MAX_RESULTS);
        // First-found ordering: catalog order.
        let ids: Vec<u32> = results.iter().map(|r| r.step_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_cap_counts_prompt_matches_too() {
        // One non-matching step holding 10 matching prompts.
        let mut s = step(1, "Edge functions", "edge", &[]);
        for i in 0..10 {
            s.prompts.push(prompt(
                &format!("p{}", i),
                &format!("Timeout case {}", i),
                "",
                &[],
            ));
        }
        let steps = vec![s];

        assert_eq!(search("timeout", &steps).len(), MAX_RESULTS);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let steps = vec![step(1, "RLS errors", "rls", &[])];
        assert!(search("kubernetes", &steps).is_empty());
    }
}
