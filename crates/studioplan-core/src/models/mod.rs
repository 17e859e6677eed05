//! Data models for strategic plans and saved plans.
//!
//! This module contains the domain models collected by the planning wizard
//! and persisted by the plan store. Display implementations for these models
//! are located in [`crate::display::models`] to keep data structures separate
//! from presentation logic.
//!
//! # Serialized Shape
//!
//! The models serialize to the JSON shape the on-device store has always
//! used: [`StrategicPlan`] fields are camelCase (`studioName`,
//! `quarterlyActions`, ...) and [`SavedPlan`] keeps the embedded plan under
//! `planData`. The remote store uses a different attribute name for the
//! embedded plan; that translation lives in [`crate::backend::shape`].
//!
//! # Examples
//!
//! ```rust
//! use studioplan_core::models::{Quarter, StrategicPlan};
//!
//! let mut plan = StrategicPlan::initial("2025");
//! plan.studio_name = "Ana Pilates".to_string();
//! plan.quarterly_actions
//!     .get_mut(Quarter::Q2)
//!     .actions
//!     .push("Launch a prenatal class".to_string());
//!
//! assert_eq!(plan.quarterly_actions.iter().count(), 4);
//! ```

pub mod plan;
pub mod quarter;
pub mod saved;

#[cfg(test)]
mod tests;

pub use plan::{KeyResult, Objective, StrategicPlan, Swot};
pub use quarter::{Quarter, QuarterlyAction, QuarterlyActions};
pub use saved::{PlanList, SavedPlan};
