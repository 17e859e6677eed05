//! Plan workflows built on the store operations.

use log::{debug, warn};

use super::Planner;
use crate::{
    error::Result,
    models::{PlanList, SavedPlan, StrategicPlan},
    params::{CreatePlan, Id, SavePlan},
    report::{self, ReportGenerator},
};

impl Planner {
    /// Loads the saved plans into a caller-side list.
    pub async fn load_plan_list(&self) -> Result<PlanList> {
        self.list_plans().await.map(PlanList::from)
    }

    /// Handle the wizard's save action.
    ///
    /// Updates the plan when `params.id` is set and creates a new one
    /// otherwise. The store is not asked whether the id still exists before
    /// choosing update; an update against a vanished id fails with
    /// `PlanError::PlanNotFound`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use studioplan_core::{models::StrategicPlan, params::SavePlan, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let first = planner
    ///     .save_plan(&SavePlan {
    ///         id: None,
    ///         plan_data: StrategicPlan::initial("2025"),
    ///         report: "# Plan".to_string(),
    ///     })
    ///     .await?;
    ///
    /// // Saving again with the id updates the same plan.
    /// let again = planner
    ///     .save_plan(&SavePlan {
    ///         id: Some(first.id.clone()),
    ///         plan_data: first.plan_data.clone(),
    ///         report: "# Plan, revised".to_string(),
    ///     })
    ///     .await?;
    /// assert_eq!(again.id, first.id);
    /// # Result::<(), studioplan_core::PlanError>::Ok(())
    /// # };
    /// ```
    pub async fn save_plan(&self, params: &SavePlan) -> Result<SavedPlan> {
        match &params.id {
            Some(id) => {
                // The store keeps its own timestamp; this value is not written.
                let plan = SavedPlan {
                    id: id.clone(),
                    created_at: jiff::Timestamp::now(),
                    plan_data: params.plan_data.clone(),
                    report: params.report.clone(),
                };
                self.update_plan(&plan).await
            }
            None => {
                self.create_plan(&CreatePlan {
                    plan_data: params.plan_data.clone(),
                    report: params.report.clone(),
                })
                .await
            }
        }
    }

    /// Handle deleting a plan with optimistic removal from the caller's list.
    ///
    /// The plan is removed from `view` before the store is asked to delete it.
    /// If the store call fails, `view` is restored to exactly its previous
    /// membership and order and the error is returned.
    pub async fn delete_plan_optimistic(&self, view: &mut PlanList, params: &Id) -> Result<()> {
        let snapshot = view.snapshot();
        view.remove(&params.id);

        match self.delete_plan(params).await {
            Ok(()) => {
                debug!("Deleted plan {}", params.id);
                Ok(())
            }
            Err(e) => {
                warn!("Delete of plan {} failed, restoring list: {e}", params.id);
                view.restore(snapshot);
                Err(e)
            }
        }
    }

    /// Generates the narrative report for a plan.
    pub async fn generate_report<G>(&self, generator: &G, plan: &StrategicPlan) -> Result<String>
    where
        G: ReportGenerator + ?Sized,
    {
        report::full_report(generator, plan).await
    }

    /// Generates the report for a plan and saves both as a new plan. Nothing
    /// is saved if generation fails.
    pub async fn generate_and_create<G>(
        &self,
        generator: &G,
        plan: &StrategicPlan,
    ) -> Result<SavedPlan>
    where
        G: ReportGenerator + ?Sized,
    {
        let report = self.generate_report(generator, plan).await?;
        self.create_plan(&CreatePlan {
            plan_data: plan.clone(),
            report,
        })
        .await
    }
}
