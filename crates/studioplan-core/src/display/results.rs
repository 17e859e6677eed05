//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::SavedPlan;

/// The result of saving a new plan.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SavedPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of writing back an existing plan, with an optional list of
/// what changed.
///
/// ```rust
/// use jiff::Timestamp;
/// use studioplan_core::{display::UpdateResult, models::{SavedPlan, StrategicPlan}};
///
/// let plan = SavedPlan {
///     id: "42".to_string(),
///     created_at: Timestamp::now(),
///     plan_data: StrategicPlan::initial("2025"),
///     report: "Updated".to_string(),
/// };
/// let text = UpdateResult::with_changes(plan, vec!["Replaced report".to_string()]).to_string();
/// assert!(text.contains("- Replaced report"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<SavedPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of deleting a plan.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SavedPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.plan_data.title(),
            self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::StrategicPlan;

    fn plan() -> SavedPlan {
        let mut plan_data = StrategicPlan::initial("2024");
        plan_data.studio_name = "Core".to_string();
        SavedPlan {
            id: "p1".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            plan_data,
            report: "Body".to_string(),
        }
    }

    #[test]
    fn test_create_result() {
        let text = CreateResult::new(plan()).to_string();
        assert!(text.starts_with("Created plan with ID: p1\n\n# Core (2024)"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let text = UpdateResult::new(plan()).to_string();
        assert!(!text.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::new(plan()).to_string(),
            "Deleted plan 'Core (2024)' (ID: p1)\n"
        );
    }
}
