//! Translation between saved plans and remote table rows.
//!
//! The remote table keeps the embedded plan in a `plan_data` column, while
//! [`SavedPlan`] serializes it as `planData`. All reads and writes against the
//! remote store go through this pair of functions; nothing else renames the
//! attribute.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{SavedPlan, StrategicPlan};

/// A plan row as the remote table stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanRow {
    /// Row id; text or numeric columns are both read as a string
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub created_at: Timestamp,
    pub plan_data: StrategicPlan,
    /// Nullable in the table
    pub report: Option<String>,
}

/// The writable columns of a plan row. Ids and timestamps are assigned by
/// the remote store and never sent.
#[derive(Debug, Serialize)]
pub struct NewPlanRow<'a> {
    pub plan_data: &'a StrategicPlan,
    pub report: &'a str,
}

impl<'a> NewPlanRow<'a> {
    /// Borrows the writable columns from plan data and a report.
    pub fn new(plan_data: &'a StrategicPlan, report: &'a str) -> Self {
        Self { plan_data, report }
    }
}

impl<'a> From<&'a SavedPlan> for NewPlanRow<'a> {
    fn from(plan: &'a SavedPlan) -> Self {
        Self::new(&plan.plan_data, &plan.report)
    }
}

/// Converts a saved plan into the remote row shape.
pub fn to_backend_shape(plan: &SavedPlan) -> PlanRow {
    PlanRow {
        id: plan.id.clone(),
        created_at: plan.created_at,
        plan_data: plan.plan_data.clone(),
        report: Some(plan.report.clone()),
    }
}

/// Converts a remote row into a saved plan. A null report reads as empty.
pub fn from_backend_shape(row: PlanRow) -> SavedPlan {
    SavedPlan {
        id: row.id,
        created_at: row.created_at,
        plan_data: row.plan_data,
        report: row.report.unwrap_or_default(),
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{KeyResult, Objective, Quarter, QuarterlyActions, Swot};

    fn detailed_plan() -> SavedPlan {
        SavedPlan {
            id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string(),
            created_at: "2024-03-05T14:30:15.123456Z".parse().unwrap(),
            plan_data: StrategicPlan {
                studio_name: "Ana Pilates".to_string(),
                planning_year: "2024/25".to_string(),
                vision: "Be the reference studio downtown".to_string(),
                mission: "Movement for every body".to_string(),
                swot: Swot {
                    strengths: vec!["Certified team".to_string(), String::new()],
                    weaknesses: vec!["Small room".to_string()],
                    opportunities: vec![],
                    threats: vec!["New gym nearby".to_string()],
                },
                objectives: vec![
                    Objective {
                        title: "Grow membership".to_string(),
                        key_results: vec![
                            KeyResult {
                                title: "120 active members".to_string(),
                            },
                            KeyResult::default(),
                        ],
                    },
                    Objective::default(),
                ],
                quarterly_actions: QuarterlyActions::with_actions(|q| match q {
                    Quarter::Q1 => vec!["Referral program".to_string()],
                    Quarter::Q3 => vec!["Summer workshop".to_string(), "Ads".to_string()],
                    _ => Vec::new(),
                }),
            },
            report: "# Plan\n\nText".to_string(),
        }
    }

    #[test]
    fn test_round_trip_is_structurally_lossless() {
        let plan = detailed_plan();
        assert_eq!(from_backend_shape(to_backend_shape(&plan)), plan);
    }

    #[test]
    fn test_round_trip_through_json() {
        let plan = detailed_plan();
        let wire = serde_json::to_string(&to_backend_shape(&plan)).unwrap();
        let row: PlanRow = serde_json::from_str(&wire).unwrap();
        assert_eq!(from_backend_shape(row), plan);
    }

    #[test]
    fn test_row_uses_plan_data_column() {
        let value = serde_json::to_value(to_backend_shape(&detailed_plan())).unwrap();
        assert!(value.get("plan_data").is_some());
        assert!(value.get("planData").is_none());
        assert_eq!(value["plan_data"]["studioName"], "Ana Pilates");
    }

    #[test]
    fn test_new_row_omits_store_assigned_columns() {
        let plan = detailed_plan();
        let value = serde_json::to_value(NewPlanRow::from(&plan)).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_row_from_server_json() {
        let value = json!({
            "id": 42,
            "created_at": "2024-05-01T12:00:00.123456+00:00",
            "plan_data": serde_json::to_value(StrategicPlan::initial("2024")).unwrap(),
            "report": null
        });
        let row: PlanRow = serde_json::from_value(value).unwrap();
        let plan = from_backend_shape(row);

        assert_eq!(plan.id, "42");
        assert_eq!(plan.report, "");
        assert_eq!(plan.created_at.as_second(), 1_714_564_800);
    }
}
