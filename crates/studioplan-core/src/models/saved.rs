//! Saved plan model and the caller-side plan list.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StrategicPlan;

/// A persisted snapshot of a plan together with its generated report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedPlan {
    /// Store-assigned identifier, stable for the plan's lifetime
    pub id: String,

    /// Creation timestamp assigned by the store (UTC), never changed by updates
    #[serde(alias = "createdAt")]
    pub created_at: Timestamp,

    /// The plan data at the time it was saved
    #[serde(rename = "planData")]
    pub plan_data: StrategicPlan,

    /// Generated narrative report (markdown)
    #[serde(default)]
    pub report: String,
}

/// The caller's view of the saved plans, in display order.
///
/// Supports optimistic removal: take a [`PlanList::snapshot`] before
/// mutating, and [`PlanList::restore`] it if the store rejects the change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanList(pub Vec<SavedPlan>);

impl PlanList {
    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, SavedPlan> {
        self.0.iter()
    }

    /// Ids of the plans in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.id.as_str()).collect()
    }

    /// Finds a plan by id.
    pub fn find(&self, id: &str) -> Option<&SavedPlan> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Removes a plan by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<SavedPlan> {
        let index = self.0.iter().position(|p| p.id == id)?;
        Some(self.0.remove(index))
    }

    /// Copies the current membership and order.
    pub fn snapshot(&self) -> PlanList {
        self.clone()
    }

    /// Puts back a previously taken snapshot.
    pub fn restore(&mut self, snapshot: PlanList) {
        *self = snapshot;
    }
}

impl From<Vec<SavedPlan>> for PlanList {
    fn from(plans: Vec<SavedPlan>) -> Self {
        Self(plans)
    }
}

impl IntoIterator for PlanList {
    type Item = SavedPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanList {
    type Item = &'a SavedPlan;
    type IntoIter = std::slice::Iter<'a, SavedPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
