//! Display for the saved plan list.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::PlanList;

impl fmt::Display for PlanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No saved plans found.");
        }

        for plan in self {
            writeln!(f, "## {} (ID: {})", plan.plan_data.title(), plan.id)?;
            writeln!(f)?;
            writeln!(f, "- **Created**: {}", LocalDateTime(&plan.created_at))?;
            let objectives = plan
                .plan_data
                .objectives
                .iter()
                .filter(|o| !o.title.trim().is_empty())
                .count();
            if objectives > 0 {
                writeln!(f, "- **Objectives**: {objectives}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
