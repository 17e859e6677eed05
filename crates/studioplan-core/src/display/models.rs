//! Display implementations for the plan models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Quarter, SavedPlan, StrategicPlan},
    report::{describe, PromptInput},
};

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StrategicPlan {
    /// Heading text, e.g. `Ana Pilates (2025)`.
    pub fn title(&self) -> String {
        let name = if self.studio_name.trim().is_empty() {
            "Untitled studio"
        } else {
            self.studio_name.as_str()
        };
        if self.planning_year.is_empty() {
            name.to_string()
        } else {
            format!("{name} ({})", self.planning_year)
        }
    }
}

impl fmt::Display for StrategicPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title())?;
        writeln!(f)?;
        write!(f, "{}", describe(&PromptInput::Plan(self)))
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan_data.title())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        if self.report.trim().is_empty() {
            writeln!(f, "No report has been generated for this plan.")
        } else {
            writeln!(f, "{}", self.report.trim_end())
        }
    }
}
