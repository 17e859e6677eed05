//! Plan persistence backends.
//!
//! The plan store talks to exactly one backend, selected once when the
//! [`crate::Planner`] is built:
//!
//! ```text
//! ┌─────────────────┐        ┌──────────────────┐     ┌──────────────────┐
//! │     Planner     │──────▶ │  RemoteBackend   │───▶ │ REST table rows  │
//! │ (dyn PlanBackend│   or   ├──────────────────┤     ├──────────────────┤
//! │   chosen once)  │──────▶ │  LocalBackend    │───▶ │ SlotStorage slot │
//! └─────────────────┘        └──────────────────┘     └──────────────────┘
//! ```
//!
//! Both backends return the same [`SavedPlan`] shape. The remote backend
//! translates the embedded plan attribute through [`shape`]; the local
//! backend stores the whole collection as one serialized value.

use std::fmt;

use async_trait::async_trait;

use crate::{error::Result, models::SavedPlan, params::CreatePlan};

pub mod local;
pub mod remote;
pub mod shape;
pub mod slot;

pub use local::{LocalBackend, PLANS_SLOT_KEY};
pub use remote::{RemoteBackend, RemoteConfig};
pub use shape::{from_backend_shape, to_backend_shape, NewPlanRow, PlanRow};
pub use slot::{MemorySlots, SlotStorage, SqliteSlots};

/// Which kind of backend a planner is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote relational store reached over HTTP
    Remote,
    /// On-device slot storage
    Local,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Remote => write!(f, "remote"),
            BackendKind::Local => write!(f, "local"),
        }
    }
}

/// CRUD operations over saved plans.
///
/// Implementations must return `list` newest-first, must never change `id`
/// or `created_at` on `update`, and must treat `delete` of an absent id as
/// success.
#[async_trait]
pub trait PlanBackend: Send + Sync {
    /// Reports which kind of backend this is.
    fn kind(&self) -> BackendKind;

    /// Lists every saved plan, newest creation timestamp first.
    async fn list(&self) -> Result<Vec<SavedPlan>>;

    /// Saves a new plan, assigning its id and creation timestamp.
    async fn create(&self, params: &CreatePlan) -> Result<SavedPlan>;

    /// Writes back the plan data and report of an existing plan.
    async fn update(&self, plan: &SavedPlan) -> Result<SavedPlan>;

    /// Deletes a plan by id.
    async fn delete(&self, id: &str) -> Result<()>;
}
