//! Markdown presentation of plans and operation results.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes get small wrapper types. Everything renders as markdown so the
//! CLI can pass it through the terminal renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │    Markdown     │
//! │ (SavedPlan, ..) │───▶│ result types    │───▶│     output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: `Display` for [`crate::models::PlanList`]
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: One-line confirmations (OperationStatus)
//! - [`datetime`]: Timestamps in the system timezone
//! - [`models`]: `Display` for the plan models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use studioplan_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{SavedPlan, StrategicPlan},
//! };
//!
//! let mut plan_data = StrategicPlan::initial("2025");
//! plan_data.studio_name = "Ana Pilates".to_string();
//! let saved = SavedPlan {
//!     id: "8d1c".to_string(),
//!     created_at: Timestamp::now(),
//!     plan_data,
//!     report: "# Strategic Plan 2025".to_string(),
//! };
//!
//! let output = CreateResult::new(saved.clone()).to_string();
//! assert!(output.contains("Created plan with ID: 8d1c"));
//!
//! let update = UpdateResult::with_changes(saved, vec!["Replaced report".to_string()]);
//! assert!(update.to_string().contains("Changes made:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
