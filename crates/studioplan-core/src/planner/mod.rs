//! High-level planner API for managing saved plans.
//!
//! The [`Planner`] is the single entry point the interface layer uses for
//! persistence. It owns exactly one [`PlanBackend`], chosen by
//! [`PlannerBuilder`] when the planner is built and never re-evaluated.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Backend     │
//! │ (plan_handlers) │───▶│   (plan_ops)    │───▶│ (remote/local)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Wizard workflows        CRUD + logging         Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: The four store operations (list, create, update, delete)
//! - [`plan_handlers`]: Workflows built on them (save, optimistic delete,
//!   generate-then-create)
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studioplan_core::{models::StrategicPlan, params::CreatePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Local storage at the default XDG path; set a remote URL and key to use
//! // the remote store instead.
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let saved = planner
//!     .create_plan(&CreatePlan {
//!         plan_data: StrategicPlan::initial("2025"),
//!         report: "# Strategic Plan 2025".to_string(),
//!     })
//!     .await?;
//!
//! let plans = planner.list_plans().await?;
//! assert_eq!(plans[0].id, saved.id);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::backend::{BackendKind, PlanBackend};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing saved plans.
#[derive(Clone)]
pub struct Planner {
    pub(crate) backend: Arc<dyn PlanBackend>,
}

impl Planner {
    /// Creates a planner over an already selected backend.
    pub(crate) fn new(backend: Arc<dyn PlanBackend>) -> Self {
        Self { backend }
    }

    /// Reports which backend was selected at build time.
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }
}
