use serde::{Deserialize, Serialize};

use crate::services::decoder::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusRecord {
    pub course_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default)]
    pub assessments: Vec<AssessmentItem>,
    #[serde(default)]
    pub weekly_topics: Vec<WeekTopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekTopic {
    pub week_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings: Option<String>,
}

/// An uploaded syllabus file, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// What the parse endpoint received: pasted text, an uploaded file, or both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyllabusInput {
    pub text: Option<String>,
    pub document: Option<Document>,
}

impl Validate for SyllabusRecord {
    fn validate(&self) -> Result<(), String> {
        for item in &self.assessments {
            if let Some(weight) = item.weight_percent {
                if !(0.0..=100.0).contains(&weight) {
                    return Err(format!(
                        "assessment '{}' has weight_percent {} outside 0-100",
                        item.name, weight
                    ));
                }
            }
        }
        if let Some(week) = self.weekly_topics.iter().find(|w| w.week_number == 0) {
            return Err(format!("weekly topic '{}' has week_number 0", week.title));
        }
        Ok(())
    }
}
