use crate::error::AppError;
use crate::models::TrackerRequest;
use crate::prompts::{Prompt, PromptSegment, is_zero, non_blank, positive_number, schema};

pub const DEFAULT_HOURS_TODAY: f64 = 3.0;

pub fn build(req: &TrackerRequest) -> Result<Prompt, AppError> {
    let raw_text = non_blank(req.raw_text.as_deref()).ok_or_else(|| {
        AppError::Validation("Missing rawText with your assignment list / grade info.".to_string())
    })?;
    // Zero hours today means "not told", same as leaving the field out.
    let hours_today = req.hours_today.as_ref().filter(|v| !is_zero(v));
    let hours_today = positive_number(hours_today)
        .map_err(|_| AppError::Validation("hoursToday must be a positive number.".to_string()))?
        .unwrap_or(DEFAULT_HOURS_TODAY);

    // The priority formula is a hint for the model, nothing here computes it.
    let instructions = format!(
        "You are a missing-assignment tracker.

The student pastes messy text copied from an LMS gradebook, a syllabus or a to-do list.

Your job:
1. Work out the list of assignments and their statuses.
2. Mark each one as:
   - \"submitted\": clearly done
   - \"missing\": past due with no submission or a zero
   - \"upcoming\": due in the future
   - \"late\": past due but possibly still accepted
3. Fill in weight_percent when a percentage is given.
4. Set priority_score so that higher means more urgent, roughly weight * lateness / days remaining.
5. Write a short, human recommended_action for each assignment.
6. Suggest what to focus on TODAY with about {hours_today} hours available.

Respond with JSON of this shape:
{{
  \"summary\": \"High level summary\",
  \"assignments\": [
    {{
      \"course\": \"EECS 2101\",
      \"name\": \"Assignment 2\",
      \"status\": \"missing\",
      \"weight_percent\": 15,
      \"due_date\": \"2025-10-12\",
      \"notes\": \"Worth 15%, 2% per day late\",
      \"priority_score\": 0.93,
      \"recommended_action\": \"Start this today, it is still worth many marks.\"
    }}
  ],
  \"today_focus\": [\"Finish Assignment 2 for EECS 2101\"]
}}

Use today's date from the text when it is given; otherwise estimate and still classify.
When unsure about an item, say so in its notes.
"
    );

    Ok(Prompt {
        segments: vec![
            PromptSegment::Text(instructions),
            PromptSegment::Text(format!(
                "Raw text from the student (LMS, syllabus, notes):\n\n{}",
                raw_text
            )),
        ],
        schema: schema::tracker(),
    })
}
