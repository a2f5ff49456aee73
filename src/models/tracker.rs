use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::decoder::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTracker {
    pub summary: String,
    pub assignments: Vec<TrackedAssignment>,
    #[serde(default)]
    pub today_focus: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub name: String,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Missing,
    Submitted,
    Upcoming,
    Late,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerRequest {
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub hours_today: Option<Value>,
}

impl Validate for AssignmentTracker {
    fn validate(&self) -> Result<(), String> {
        for assignment in &self.assignments {
            if let Some(weight) = assignment.weight_percent {
                if !(0.0..=100.0).contains(&weight) {
                    return Err(format!(
                        "assignment '{}' has weight_percent {} outside 0-100",
                        assignment.name, weight
                    ));
                }
            }
        }
        Ok(())
    }
}
