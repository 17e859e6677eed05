//! Formatting of plan data for the report generator.
//!
//! Plans carry blank entries while they are being edited (every wizard list
//! starts with one empty field). Those are dropped here, at the boundary,
//! and nowhere else.

use std::fmt::Write;

use super::PromptInput;
use crate::models::{Objective, QuarterlyActions, Swot};

/// Formats non-blank items as a markdown list.
pub fn format_list(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats objectives with their key results, skipping blank titles at both
/// levels.
pub fn format_objectives(objectives: &[Objective]) -> String {
    objectives
        .iter()
        .filter(|objective| !objective.title.trim().is_empty())
        .map(|objective| {
            let key_results = objective
                .key_results
                .iter()
                .filter(|kr| !kr.title.trim().is_empty())
                .map(|kr| format!("  - {}", kr.title))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "**Objective:** {}\n**Key Results:**\n{}",
                objective.title, key_results
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Formats each quarter's non-blank actions. All four quarters are always
/// listed, even when empty.
pub fn format_quarters(quarters: &QuarterlyActions) -> String {
    quarters
        .iter()
        .map(|quarter| {
            format!(
                "**{}:**\n{}",
                quarter.quarter.as_str(),
                format_list(&quarter.actions)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_swot(out: &mut String, swot: &Swot) {
    let sections = [
        ("Strengths", &swot.strengths),
        ("Weaknesses", &swot.weaknesses),
        ("Opportunities", &swot.opportunities),
        ("Threats", &swot.threats),
    ];
    for (label, items) in sections {
        let _ = writeln!(out, "**{label}:**\n{}\n", format_list(items));
    }
}

/// Renders structured generator input as a markdown block.
pub fn describe(input: &PromptInput<'_>) -> String {
    let mut out = String::new();

    match input {
        PromptInput::Plan(plan) => {
            let _ = writeln!(out, "**Studio:** {}", plan.studio_name);
            let _ = writeln!(out, "**Planning year:** {}", plan.planning_year);
            let _ = writeln!(out, "**Vision:** {}", plan.vision);
            let _ = writeln!(out, "**Mission:** {}\n", plan.mission);
            format_swot(&mut out, &plan.swot);
            let _ = writeln!(
                out,
                "**Objectives (OKRs):**\n{}\n",
                format_objectives(&plan.objectives)
            );
            let _ = writeln!(
                out,
                "**Quarterly actions:**\n{}",
                format_quarters(&plan.quarterly_actions)
            );
        }
        PromptInput::Statement {
            keywords,
            studio_name,
        } => {
            let _ = writeln!(out, "**Studio:** {studio_name}");
            let _ = writeln!(out, "**Key concepts:** {}", keywords.join(", "));
        }
        PromptInput::Swot(swot) => format_swot(&mut out, swot),
        PromptInput::Objectives(objectives) => {
            let _ = writeln!(out, "{}", format_objectives(objectives));
        }
    }

    out
}
