//! Local fallback backend: the whole plan collection in one storage slot.
//!
//! Every operation reads the slot, applies a pure function to the collection,
//! and (for mutations) rewrites the whole slot. The read-modify-write sequence
//! is not atomic; the store assumes a single caller per device.

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, warn};
use uuid::Uuid;

use super::{BackendKind, PlanBackend, SlotStorage};
use crate::{
    error::{PlanError, Result},
    models::SavedPlan,
    params::CreatePlan,
};

/// Slot key holding the serialized plan collection.
pub const PLANS_SLOT_KEY: &str = "studioplan_saved_plans";

/// Plan backend over a [`SlotStorage`].
pub struct LocalBackend<S> {
    slots: S,
    key: String,
}

impl<S: SlotStorage> LocalBackend<S> {
    /// Creates a backend using the default slot key.
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, PLANS_SLOT_KEY)
    }

    /// Creates a backend storing its collection under a custom key.
    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// The underlying slot storage.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Reads and parses the slot. An unparseable slot is cleared and read as
    /// an empty collection.
    async fn load(&self) -> Result<Vec<SavedPlan>> {
        let Some(raw) = self.slots.read(&self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<SavedPlan>>(&raw) {
            Ok(plans) => Ok(plans),
            Err(e) => {
                warn!(
                    "Discarding unreadable plan collection in slot '{}': {e}",
                    self.key
                );
                self.slots.clear(&self.key).await?;
                Ok(Vec::new())
            }
        }
    }

    async fn store(&self, plans: &[SavedPlan]) -> Result<()> {
        let raw = serde_json::to_string(plans)?;
        self.slots.write(&self.key, &raw).await
    }
}

#[async_trait]
impl<S: SlotStorage> PlanBackend for LocalBackend<S> {
    fn kind(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn list(&self) -> Result<Vec<SavedPlan>> {
        Ok(newest_first(self.load().await?))
    }

    async fn create(&self, params: &CreatePlan) -> Result<SavedPlan> {
        let plan = SavedPlan {
            id: Uuid::new_v4().to_string(),
            created_at: Timestamp::now(),
            plan_data: params.plan_data.clone(),
            report: params.report.clone(),
        };

        let plans = prepended(self.load().await?, plan.clone());
        self.store(&plans).await?;

        debug!("Created local plan {}", plan.id);
        Ok(plan)
    }

    async fn update(&self, plan: &SavedPlan) -> Result<SavedPlan> {
        let (plans, updated) = replaced(self.load().await?, plan)?;
        self.store(&plans).await?;

        debug!("Updated local plan {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let (plans, removed) = without(self.load().await?, id);
        if removed {
            self.store(&plans).await?;
            debug!("Deleted local plan {id}");
        } else {
            debug!("Local plan {id} already absent");
        }
        Ok(())
    }
}

/// Orders a collection newest creation timestamp first. Ties keep their
/// stored order.
fn newest_first(mut plans: Vec<SavedPlan>) -> Vec<SavedPlan> {
    plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    plans
}

fn prepended(mut plans: Vec<SavedPlan>, plan: SavedPlan) -> Vec<SavedPlan> {
    plans.insert(0, plan);
    plans
}

/// Replaces the plan with the same id in place. The stored id and creation
/// timestamp win over whatever the caller passed.
fn replaced(mut plans: Vec<SavedPlan>, plan: &SavedPlan) -> Result<(Vec<SavedPlan>, SavedPlan)> {
    let existing = plans
        .iter_mut()
        .find(|p| p.id == plan.id)
        .ok_or_else(|| PlanError::PlanNotFound {
            id: plan.id.clone(),
        })?;

    existing.plan_data = plan.plan_data.clone();
    existing.report = plan.report.clone();
    let updated = existing.clone();

    Ok((plans, updated))
}

fn without(mut plans: Vec<SavedPlan>, id: &str) -> (Vec<SavedPlan>, bool) {
    let before = plans.len();
    plans.retain(|p| p.id != id);
    let removed = plans.len() != before;
    (plans, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backend::MemorySlots, models::StrategicPlan};

    fn create_params(name: &str) -> CreatePlan {
        let mut plan_data = StrategicPlan::initial("2024");
        plan_data.studio_name = name.to_string();
        CreatePlan {
            plan_data,
            report: format!("Report for {name}"),
        }
    }

    fn saved(id: &str, second: i64) -> SavedPlan {
        SavedPlan {
            id: id.to_string(),
            created_at: Timestamp::from_second(second).unwrap(),
            plan_data: StrategicPlan::initial("2024"),
            report: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_returns_new_plan_first() {
        let backend = LocalBackend::new(MemorySlots::new());

        let first = backend.create(&create_params("First")).await.unwrap();
        let second = backend.create(&create_params("Second")).await.unwrap();

        let plans = backend.list().await.unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, second.id);
        assert_eq!(plans[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_sorts_stored_collection_newest_first() {
        let stored = serde_json::to_string(&vec![saved("old", 10), saved("new", 30), saved("mid", 20)])
            .unwrap();
        let backend = LocalBackend::new(MemorySlots::with_slot(PLANS_SLOT_KEY, stored));

        let ids: Vec<String> = backend.list().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_update_missing_plan_is_not_found() {
        let backend = LocalBackend::new(MemorySlots::new());
        backend.create(&create_params("Kept")).await.unwrap();

        let err = backend.update(&saved("ghost", 1)).await.unwrap_err();
        assert!(matches!(err, PlanError::PlanNotFound { ref id } if id == "ghost"));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let backend = LocalBackend::new(MemorySlots::new());
        let created = backend.create(&create_params("Before")).await.unwrap();

        let mut edited = created.clone();
        edited.plan_data.studio_name = "After".to_string();
        edited.report = "Regenerated".to_string();
        edited.created_at = Timestamp::from_second(0).unwrap();

        let updated = backend.update(&edited).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.plan_data.studio_name, "After");

        let plans = backend.list().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0], updated);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let stored = serde_json::to_string(&vec![saved("a", 3), saved("b", 2), saved("c", 1)]).unwrap();
        let backend = LocalBackend::new(MemorySlots::with_slot(PLANS_SLOT_KEY, stored));

        let mut edited = saved("b", 2);
        edited.report = "edited".to_string();
        backend.update(&edited).await.unwrap();

        let raw = backend.slots().peek(PLANS_SLOT_KEY).unwrap();
        let stored: Vec<SavedPlan> = serde_json::from_str(&raw).unwrap();
        let ids: Vec<&str> = stored.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(stored[1].report, "edited");
    }

    #[tokio::test]
    async fn test_delete_missing_plan_leaves_collection_untouched() {
        let stored = serde_json::to_string(&vec![saved("a", 2), saved("b", 1)]).unwrap();
        let backend = LocalBackend::new(MemorySlots::with_slot(PLANS_SLOT_KEY, stored.clone()));

        backend.delete("ghost").await.expect("delete of absent id succeeds");
        assert_eq!(backend.slots().peek(PLANS_SLOT_KEY), Some(stored));
    }

    #[tokio::test]
    async fn test_delete_removes_plan() {
        let backend = LocalBackend::new(MemorySlots::new());
        let keep = backend.create(&create_params("Keep")).await.unwrap();
        let gone = backend.create(&create_params("Gone")).await.unwrap();

        backend.delete(&gone.id).await.unwrap();
        backend.delete(&gone.id).await.unwrap();

        let plans = backend.list().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_corrupt_slot_lists_empty_and_is_cleared() {
        let backend = LocalBackend::new(MemorySlots::with_slot(PLANS_SLOT_KEY, "{not json"));

        let plans = backend.list().await.expect("corrupt slot is not an error");
        assert!(plans.is_empty());
        assert_eq!(backend.slots().peek(PLANS_SLOT_KEY), None);
    }

    #[tokio::test]
    async fn test_create_after_corrupt_slot_starts_fresh() {
        let backend = LocalBackend::new(MemorySlots::with_slot(PLANS_SLOT_KEY, "[{\"id\": 1}]"));

        let created = backend.create(&create_params("Fresh")).await.unwrap();
        let plans = backend.list().await.unwrap();
        assert_eq!(plans, vec![created]);
    }

    #[test]
    fn test_without_reports_removal() {
        let (plans, removed) = without(vec![saved("a", 1)], "a");
        assert!(plans.is_empty());
        assert!(removed);

        let (plans, removed) = without(vec![saved("a", 1)], "b");
        assert_eq!(plans.len(), 1);
        assert!(!removed);
    }
}
