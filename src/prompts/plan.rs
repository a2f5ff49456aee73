use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::PlanRequest;
use crate::prompts::{Prompt, PromptSegment, difficulty_or_default, non_blank, positive_number, schema};

const INSTRUCTIONS: &str = "\
You are a personal study coach for a university student.

You receive the course syllabus as JSON, the semester start date, the final
exam date, the hours the student can study each week, and a difficulty mode:

- \"beginner\": more review, smaller chunks, simpler tasks.
- \"normal\": a balanced plan.
- \"hardcore\": harder tasks, extra practice and exam-style questions.

When building the plan:
- Work from the syllabus weekly_topics and assessments.
- Spread the work evenly between the start date and the exam date.
- Keep every week within the hours_per_week budget.
- Line tasks up with upcoming assignments and exams.

Respond with JSON of this shape:
{
  \"weeks\": [
    {
      \"week_number\": 1,
      \"date_range\": \"YYYY-MM-DD to YYYY-MM-DD\",
      \"topics_to_cover\": \"short description\",
      \"tasks\": [\"Read chapter 1\", \"Do 5 practice problems on recursion\"],
      \"estimated_time_hours\": 6,
      \"focus\": \"e.g. Midterm prep, Final review, Project work\"
    }
  ]
}
";

/// What the model is told about the student, after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub start_date: NaiveDate,
    pub exam_date: NaiveDate,
    pub hours_per_week: f64,
    pub difficulty: String,
}

pub fn build(req: &PlanRequest) -> Result<Prompt, AppError> {
    let (syllabus, profile) = validate(req)?;

    let syllabus_json = serde_json::to_string_pretty(syllabus)
        .map_err(|e| AppError::Validation(format!("syllabus could not be serialized: {}", e)))?;
    let profile_json = serde_json::to_string_pretty(&profile)
        .map_err(|e| AppError::Validation(format!("profile could not be serialized: {}", e)))?;

    Ok(Prompt {
        segments: vec![
            PromptSegment::Text(INSTRUCTIONS.to_string()),
            PromptSegment::Text(format!("Course syllabus JSON:\n{}", syllabus_json)),
            PromptSegment::Text(format!("Student profile:\n{}", profile_json)),
        ],
        schema: schema::plan(),
    })
}

fn validate(req: &PlanRequest) -> Result<(&Value, StudentProfile), AppError> {
    let syllabus = req.syllabus.as_ref().filter(|v| !v.is_null());
    let start = non_blank(req.start_date.as_deref());
    let exam = non_blank(req.exam_date.as_deref());
    let hours = positive_number(req.hours_per_week.as_ref());

    let mut missing = Vec::new();
    if syllabus.is_none() {
        missing.push("syllabus");
    }
    if start.is_none() {
        missing.push("startDate");
    }
    if exam.is_none() {
        missing.push("examDate");
    }
    let hours_missing = matches!(hours, Ok(None));
    if hours_missing {
        missing.push("hoursPerWeek");
    }

    let (Some(syllabus), Some(start), Some(exam), false) = (syllabus, start, exam, hours_missing)
    else {
        return Err(AppError::Validation(format!(
            "Missing required fields ({}).",
            missing.join(", ")
        )));
    };

    if !syllabus.is_object() {
        return Err(AppError::Validation(
            "syllabus must be a JSON object.".to_string(),
        ));
    }

    let hours_per_week = match hours {
        Ok(Some(h)) => h,
        _ => {
            return Err(AppError::Validation(
                "hoursPerWeek must be a positive number.".to_string(),
            ));
        }
    };

    let start_date = parse_date(start, "startDate")?;
    let exam_date = parse_date(exam, "examDate")?;
    if exam_date < start_date {
        return Err(AppError::Validation(
            "examDate must not be before startDate.".to_string(),
        ));
    }

    Ok((
        syllabus,
        StudentProfile {
            start_date,
            exam_date,
            hours_per_week,
            difficulty: difficulty_or_default(req.difficulty.as_deref()),
        },
    ))
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("{} must be a date in YYYY-MM-DD format.", field))
    })
}
