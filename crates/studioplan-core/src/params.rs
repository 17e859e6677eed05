//! Parameter structures for Studioplan operations
//!
//! Shared parameter structures used across interfaces (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`, keeping clap out of the core.
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct DeletePlanArgs {
//!     pub id: String,
//! }
//!
//! impl From<DeletePlanArgs> for Id {
//!     fn from(val: DeletePlanArgs) -> Self {
//!         Id { id: val.id }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::StrategicPlan;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the saved plan to operate on
    pub id: String,
}

/// Parameters for creating a new saved plan.
///
/// A plan is only saved once its report has been generated, so both fields
/// are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlan {
    /// The plan data to snapshot
    pub plan_data: StrategicPlan,
    /// The generated report for that plan data
    pub report: String,
}

/// Parameters for the wizard's save action: update when the plan already
/// has an id, create otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlan {
    /// Id of the plan being edited, if it was saved before
    pub id: Option<String>,
    /// The plan data to snapshot
    pub plan_data: StrategicPlan,
    /// The generated report for that plan data
    pub report: String,
}
