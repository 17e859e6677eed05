//! Plan store operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{PlanError, Result},
    models::SavedPlan,
    params::{CreatePlan, Id},
};

impl Planner {
    /// Lists all saved plans, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Remote` with the backend's message when the remote
    /// store rejects the call.
    pub async fn list_plans(&self) -> Result<Vec<SavedPlan>> {
        let plans = self.backend.list().await?;
        debug!("Listed {} plans from {} store", plans.len(), self.backend.kind());
        Ok(plans)
    }

    /// Retrieves a saved plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<SavedPlan>> {
        Ok(self
            .backend
            .list()
            .await?
            .into_iter()
            .find(|plan| plan.id == params.id))
    }

    /// Saves a new plan. The store assigns the id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the report is empty, since a plan
    /// is only saved once its report has been generated.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<SavedPlan> {
        require_report(&params.report)?;
        self.backend.create(params).await
    }

    /// Writes back an existing plan's data and report under the same id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the report is empty and
    /// `PlanError::PlanNotFound` if no plan has that id.
    pub async fn update_plan(&self, plan: &SavedPlan) -> Result<SavedPlan> {
        require_report(&plan.report)?;
        self.backend.update(plan).await
    }

    /// Deletes a plan. Deleting an id that does not exist succeeds.
    pub async fn delete_plan(&self, params: &Id) -> Result<()> {
        self.backend.delete(&params.id).await
    }
}

fn require_report(report: &str) -> Result<()> {
    if report.trim().is_empty() {
        return Err(PlanError::invalid_input("report")
            .with_reason("a plan can only be saved after its report is generated"));
    }
    Ok(())
}
