#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{
        KeyResult, Objective, PlanList, Quarter, QuarterlyActions, SavedPlan, StrategicPlan,
    };

    fn create_test_saved_plan(id: &str, second: i64) -> SavedPlan {
        let mut plan_data = StrategicPlan::initial("2024");
        plan_data.studio_name = format!("Studio {id}");
        SavedPlan {
            id: id.to_string(),
            created_at: Timestamp::from_second(second).unwrap(),
            plan_data,
            report: format!("# Report {id}"),
        }
    }

    #[test]
    fn test_initial_plan_has_one_blank_entry_per_section() {
        let plan = StrategicPlan::initial("2025");

        assert_eq!(plan.planning_year, "2025");
        assert_eq!(plan.swot.strengths, vec![String::new()]);
        assert_eq!(plan.swot.threats, vec![String::new()]);
        assert_eq!(plan.objectives.len(), 1);
        assert_eq!(plan.objectives[0].key_results, vec![KeyResult::default()]);

        let quarters: Vec<Quarter> = plan.quarterly_actions.iter().map(|q| q.quarter).collect();
        assert_eq!(quarters, Quarter::ALL.to_vec());
        assert!(plan
            .quarterly_actions
            .iter()
            .all(|q| q.actions == vec![String::new()]));
    }

    #[test]
    fn test_strategic_plan_serializes_camel_case() {
        let mut plan = StrategicPlan::initial("2024");
        plan.studio_name = "Ana Pilates".to_string();
        plan.objectives = vec![Objective {
            title: "Grow".to_string(),
            key_results: vec![KeyResult {
                title: "50 members".to_string(),
            }],
        }];

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["studioName"], "Ana Pilates");
        assert_eq!(value["planningYear"], "2024");
        assert_eq!(value["objectives"][0]["keyResults"][0]["title"], "50 members");
        assert_eq!(value["quarterlyActions"][2]["quarter"], "Q3");
    }

    #[test]
    fn test_quarterly_actions_reject_wrong_count() {
        let value = json!([
            { "quarter": "Q1", "actions": [] },
            { "quarter": "Q2", "actions": [] },
            { "quarter": "Q3", "actions": [] }
        ]);
        let err = serde_json::from_value::<QuarterlyActions>(value).unwrap_err();
        assert!(err.to_string().contains("expected 4 quarterly entries, found 3"));
    }

    #[test]
    fn test_quarterly_actions_reject_wrong_order() {
        let value = json!([
            { "quarter": "Q1", "actions": [] },
            { "quarter": "Q3", "actions": [] },
            { "quarter": "Q2", "actions": [] },
            { "quarter": "Q4", "actions": [] }
        ]);
        let err = serde_json::from_value::<QuarterlyActions>(value).unwrap_err();
        assert!(err.to_string().contains("expected quarter Q2 but found Q3"));
    }

    #[test]
    fn test_quarterly_actions_get_mut_targets_one_quarter() {
        let mut actions = QuarterlyActions::default();
        actions
            .get_mut(Quarter::Q4)
            .actions
            .push("Holiday workshop".to_string());

        assert!(actions.get(Quarter::Q1).actions.is_empty());
        assert_eq!(actions.get(Quarter::Q4).actions, vec!["Holiday workshop"]);
    }

    #[test]
    fn test_quarter_from_str() {
        assert_eq!("q2".parse::<Quarter>().unwrap(), Quarter::Q2);
        assert!("Q5".parse::<Quarter>().is_err());
    }

    #[test]
    fn test_saved_plan_uses_plan_data_key() {
        let saved = create_test_saved_plan("a", 1_700_000_000);
        let value = serde_json::to_value(&saved).unwrap();

        assert!(value.get("planData").is_some());
        assert!(value.get("plan_data").is_none());
        assert_eq!(value["created_at"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_saved_plan_accepts_legacy_created_at_key() {
        let value = json!({
            "id": "2024-01-01T10:00:00.000Z",
            "createdAt": "2024-01-01T10:00:00.000Z",
            "planData": serde_json::to_value(StrategicPlan::initial("2024")).unwrap(),
            "report": "text"
        });
        let saved: SavedPlan = serde_json::from_value(value).unwrap();
        assert_eq!(saved.created_at.as_second(), 1_704_103_200);
    }

    #[test]
    fn test_plan_list_remove_and_restore() {
        let mut list = PlanList(vec![
            create_test_saved_plan("a", 3),
            create_test_saved_plan("b", 2),
            create_test_saved_plan("c", 1),
        ]);
        let snapshot = list.snapshot();

        let removed = list.remove("b").expect("b should be present");
        assert_eq!(removed.id, "b");
        assert_eq!(list.ids(), vec!["a", "c"]);
        assert!(list.remove("missing").is_none());

        list.restore(snapshot);
        assert_eq!(list.ids(), vec!["a", "b", "c"]);
    }
}
