use studioplan_core::{models::StrategicPlan, params::CreatePlan, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner on a temporary database
pub async fn create_test_planner() -> (TempDir, studioplan_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Plan parameters for a named studio
#[allow(dead_code)]
pub fn studio_plan(name: &str, year: &str) -> CreatePlan {
    let mut plan_data = StrategicPlan::initial(year);
    plan_data.studio_name = name.to_string();
    CreatePlan {
        plan_data,
        report: format!("# Strategic Plan {year}\n\n{name} grows."),
    }
}
