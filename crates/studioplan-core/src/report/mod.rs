//! Report generation capability.
//!
//! Narrative text comes from an external generative-text service. The core
//! only sees it through [`ReportGenerator`]: a prompt kind plus the
//! structured input, returning text or a failure. Wire-level prompts and the
//! service call belong to implementations of the trait.
//!
//! The helpers here own the behaviour around the call: skipping it when
//! there is nothing to write about, trimming, and splitting pipe-delimited
//! suggestion lists.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    error::{PlanError, Result},
    models::{Objective, StrategicPlan, Swot},
};

pub mod format;

pub use format::{describe, format_list, format_objectives, format_quarters};

/// What the generator is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// The full narrative report for a plan
    FullReport,
    /// A vision statement from keywords
    Vision,
    /// A mission statement from keywords
    Mission,
    /// Objective titles suggested from a SWOT analysis
    GoalSuggestions,
    /// Quarterly actions suggested from objectives
    ActionSuggestions,
}

/// Structured input handed to the generator.
#[derive(Debug, Clone, Copy)]
pub enum PromptInput<'a> {
    Plan(&'a StrategicPlan),
    Statement {
        keywords: &'a [String],
        studio_name: &'a str,
    },
    Swot(&'a Swot),
    Objectives(&'a [Objective]),
}

/// Which statement to write from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Vision,
    Mission,
}

/// Single-shot text generation.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Produces text for the given kind of prompt.
    async fn generate(&self, kind: PromptKind, input: &PromptInput<'_>) -> Result<String>;
}

/// Generates the full narrative report for a plan.
///
/// # Errors
///
/// Returns `PlanError::Generation` if the generator fails or returns only
/// whitespace.
pub async fn full_report<G>(generator: &G, plan: &StrategicPlan) -> Result<String>
where
    G: ReportGenerator + ?Sized,
{
    let report = generator
        .generate(PromptKind::FullReport, &PromptInput::Plan(plan))
        .await?;

    if report.trim().is_empty() {
        return Err(PlanError::Generation {
            message: "generator returned an empty report".to_string(),
        });
    }
    Ok(report)
}

/// Writes a vision or mission statement from the selected keywords. With no
/// keywords there is nothing to write and the generator is not called.
pub async fn statement<G>(
    generator: &G,
    which: Statement,
    keywords: &[String],
    studio_name: &str,
) -> Result<String>
where
    G: ReportGenerator + ?Sized,
{
    if keywords.is_empty() {
        return Ok(String::new());
    }

    let kind = match which {
        Statement::Vision => PromptKind::Vision,
        Statement::Mission => PromptKind::Mission,
    };
    let text = generator
        .generate(
            kind,
            &PromptInput::Statement {
                keywords,
                studio_name,
            },
        )
        .await?;
    Ok(text.trim().to_string())
}

/// Suggests objective titles from a SWOT analysis.
pub async fn goal_suggestions<G>(generator: &G, swot: &Swot) -> Result<Vec<String>>
where
    G: ReportGenerator + ?Sized,
{
    let text = generator
        .generate(PromptKind::GoalSuggestions, &PromptInput::Swot(swot))
        .await?;
    Ok(parse_suggestions(&text))
}

/// Suggests quarterly actions from the plan's objectives.
pub async fn action_suggestions<G>(generator: &G, objectives: &[Objective]) -> Result<Vec<String>>
where
    G: ReportGenerator + ?Sized,
{
    let text = generator
        .generate(PromptKind::ActionSuggestions, &PromptInput::Objectives(objectives))
        .await?;
    Ok(parse_suggestions(&text))
}

/// Splits pipe-delimited generator output into trimmed, non-empty entries.
///
/// ```rust
/// use studioplan_core::report::parse_suggestions;
///
/// assert_eq!(
///     parse_suggestions(" Grow membership | |Launch workshops\n"),
///     vec!["Grow membership", "Launch workshops"]
/// );
/// ```
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Generator that answers every prompt with the same text.
///
/// Used where a deterministic generator is needed: tests, and flows where the
/// report was produced elsewhere and is supplied as-is.
#[derive(Debug, Default)]
pub struct StaticGenerator {
    text: String,
    calls: AtomicUsize,
}

impl StaticGenerator {
    /// Creates a generator that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of prompts answered so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportGenerator for StaticGenerator {
    async fn generate(&self, _kind: PromptKind, _input: &PromptInput<'_>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGenerator;

    #[async_trait]
    impl ReportGenerator for FailingGenerator {
        async fn generate(&self, kind: PromptKind, _input: &PromptInput<'_>) -> Result<String> {
            Err(PlanError::Generation {
                message: format!("{kind:?} unavailable"),
            })
        }
    }

    #[tokio::test]
    async fn test_full_report_returns_generator_text() {
        let generator = StaticGenerator::new("# Plan\n\nBody");
        let report = full_report(&generator, &StrategicPlan::initial("2024"))
            .await
            .unwrap();
        assert_eq!(report, "# Plan\n\nBody");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_full_report_rejects_blank_text() {
        let generator = StaticGenerator::new("   \n");
        let err = full_report(&generator, &StrategicPlan::initial("2024"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_full_report_propagates_failure() {
        let err = full_report(&FailingGenerator, &StrategicPlan::initial("2024"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Report generation failed: FullReport unavailable");
    }

    #[tokio::test]
    async fn test_statement_without_keywords_skips_generator() {
        let generator = StaticGenerator::new("unused");
        let text = statement(&generator, Statement::Vision, &[], "Studio")
            .await
            .unwrap();
        assert_eq!(text, "");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_statement_is_trimmed() {
        let generator = StaticGenerator::new("  Movement for every body.\n");
        let keywords = vec!["movement".to_string(), "wellbeing".to_string()];
        let text = statement(&generator, Statement::Mission, &keywords, "Studio")
            .await
            .unwrap();
        assert_eq!(text, "Movement for every body.");
    }

    #[tokio::test]
    async fn test_goal_suggestions_are_split() {
        let generator = StaticGenerator::new("Grow membership|Improve retention| Open a second room ");
        let goals = goal_suggestions(&generator, &Swot::default()).await.unwrap();
        assert_eq!(
            goals,
            vec!["Grow membership", "Improve retention", "Open a second room"]
        );
    }

    #[tokio::test]
    async fn test_action_suggestions_empty_text() {
        let generator = StaticGenerator::new("");
        let actions = action_suggestions(&generator, &[]).await.unwrap();
        assert!(actions.is_empty());
    }
}
