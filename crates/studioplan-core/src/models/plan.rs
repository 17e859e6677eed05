//! Strategic plan model definition and related functionality.

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use super::QuarterlyActions;

/// The four lists of a SWOT analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swot {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// A measurable outcome attached to an objective.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyResult {
    pub title: String,
}

/// An annual objective and its key results.
///
/// Titles are not unique and may be empty while the plan is being edited;
/// blank entries are dropped only when the plan is formatted for the report
/// generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub title: String,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

/// The structured planning data collected by the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPlan {
    /// Name of the studio the plan is for
    pub studio_name: String,

    /// Planning year, free-form text
    pub planning_year: String,

    /// Vision statement
    #[serde(default)]
    pub vision: String,

    /// Mission statement
    #[serde(default)]
    pub mission: String,

    /// SWOT analysis
    #[serde(default)]
    pub swot: Swot,

    /// Annual objectives in display order
    #[serde(default)]
    pub objectives: Vec<Objective>,

    /// One entry per quarter, Q1 through Q4
    #[serde(default)]
    pub quarterly_actions: QuarterlyActions,
}

impl StrategicPlan {
    /// Creates the blank plan a new wizard session starts from: one empty
    /// entry in every list so each form section has a field to type into.
    pub fn initial(planning_year: impl Into<String>) -> Self {
        let blank = || vec![String::new()];
        Self {
            studio_name: String::new(),
            planning_year: planning_year.into(),
            vision: String::new(),
            mission: String::new(),
            swot: Swot {
                strengths: blank(),
                weaknesses: blank(),
                opportunities: blank(),
                threats: blank(),
            },
            objectives: vec![Objective {
                title: String::new(),
                key_results: vec![KeyResult::default()],
            }],
            quarterly_actions: QuarterlyActions::with_actions(|_| blank()),
        }
    }

    /// Creates a blank plan for the current calendar year.
    pub fn for_current_year() -> Self {
        let year = Timestamp::now().to_zoned(TimeZone::system()).year();
        Self::initial(year.to_string())
    }
}
