use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::decoder::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub weeks: Vec<WeekPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub topics_to_cover: String,
    pub tasks: Vec<String>,
    pub estimated_time_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

/// Body of `POST /api/syllabus/plan`.
///
/// Fields stay loosely typed so that missing or malformed values turn into a
/// 400 with a readable message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub syllabus: Option<Value>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub hours_per_week: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Validate for StudyPlan {
    fn validate(&self) -> Result<(), String> {
        for week in &self.weeks {
            if week.week_number == 0 {
                return Err("plan week has week_number 0".to_string());
            }
            if !week.estimated_time_hours.is_finite() || week.estimated_time_hours < 0.0 {
                return Err(format!(
                    "week {} has negative estimated_time_hours",
                    week.week_number
                ));
            }
        }
        Ok(())
    }
}
