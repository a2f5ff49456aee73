use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;

/// Range checks the output schema cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Strict JSON parse of the model's text, then a typed decode, then [`Validate`].
/// No repair is attempted: fenced or truncated output is a decode failure.
pub fn decode<T>(raw: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let fail = |reason: String| {
        warn!("model output rejected: {}", reason);
        AppError::Decode {
            reason,
            raw: raw.to_string(),
        }
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| fail(e.to_string()))?;
    let decoded: T = serde_json::from_value(value).map_err(|e| fail(e.to_string()))?;
    decoded.validate().map_err(fail)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentStatus, AssignmentTracker, StudyPlan, SyllabusRecord};

    #[test]
    fn decodes_a_minimal_syllabus_with_empty_lists() {
        let record: SyllabusRecord = decode(r#"{"course_title":"Data Structures"}"#).unwrap();
        assert_eq!(record.course_title, "Data Structures");
        assert!(record.assessments.is_empty());
        assert!(record.weekly_topics.is_empty());
    }

    #[test]
    fn non_json_keeps_the_raw_text() {
        let err = decode::<SyllabusRecord>("Sorry, I can't help with that.").unwrap_err();
        match err {
            AppError::Decode { raw, .. } => assert_eq!(raw, "Sorry, I can't help with that."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fenced_json_is_not_repaired() {
        let raw = "```json\n{\"course_title\":\"x\"}\n```";
        assert!(matches!(
            decode::<SyllabusRecord>(raw),
            Err(AppError::Decode { .. })
        ));
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = decode::<SyllabusRecord>(r#"{"instructor":"Dr. Smith"}"#).unwrap_err();
        assert!(err.to_string().contains("course_title"));
    }

    #[test]
    fn unknown_tracker_status_is_rejected() {
        let raw = r#"{"summary":"s","assignments":[{"name":"A1","status":"overdue"}]}"#;
        assert!(decode::<AssignmentTracker>(raw).is_err());
    }

    #[test]
    fn tracker_statuses_decode() {
        let raw = r#"{"summary":"s","assignments":[
            {"name":"A1","status":"late"},
            {"name":"A2","status":"submitted"}
        ]}"#;
        let tracker: AssignmentTracker = decode(raw).unwrap();
        assert_eq!(tracker.assignments[0].status, AssignmentStatus::Late);
        assert_eq!(tracker.assignments[1].status, AssignmentStatus::Submitted);
        assert!(tracker.today_focus.is_empty());
    }

    #[test]
    fn out_of_range_weight_fails_validation() {
        let raw = r#"{"course_title":"c","assessments":[{"name":"Final","weight_percent":140}]}"#;
        let err = decode::<SyllabusRecord>(raw).unwrap_err();
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn plan_week_zero_fails_validation() {
        let raw = r#"{"weeks":[{"week_number":0,"topics_to_cover":"Intro","tasks":[],"estimated_time_hours":1.5}]}"#;
        let err = decode::<StudyPlan>(raw).unwrap_err();
        assert!(err.to_string().contains("week_number 0"));
    }

    #[test]
    fn negative_plan_hours_fail_validation() {
        let raw = r#"{"weeks":[{"week_number":2,"topics_to_cover":"Trees","tasks":["read"],"estimated_time_hours":-1}]}"#;
        let err = decode::<StudyPlan>(raw).unwrap_err();
        assert!(err.to_string().contains("week 2 has negative estimated_time_hours"));
    }

    #[test]
    fn zero_hour_plan_week_is_accepted() {
        let raw = r#"{"weeks":[{"week_number":1,"topics_to_cover":"Review","tasks":[],"estimated_time_hours":0}]}"#;
        let plan: StudyPlan = decode(raw).unwrap();
        assert_eq!(plan.weeks[0].estimated_time_hours, 0.0);
    }

    #[test]
    fn syllabus_week_zero_fails_validation() {
        let raw = r#"{"course_title":"c","weekly_topics":[{"week_number":0,"title":"Orientation"}]}"#;
        let err = decode::<SyllabusRecord>(raw).unwrap_err();
        assert!(err.to_string().contains("'Orientation' has week_number 0"));
    }

    #[test]
    fn tracker_weight_over_100_fails_validation() {
        let raw = r#"{"summary":"s","assignments":[{"name":"Essay","status":"missing","weight_percent":140}]}"#;
        let err = decode::<AssignmentTracker>(raw).unwrap_err();
        assert!(err.to_string().contains("'Essay' has weight_percent 140 outside 0-100"));
    }
}
