use crate::error::AppError;
use crate::models::SyllabusInput;
use crate::prompts::{Prompt, PromptSegment, non_blank, schema};

const INSTRUCTIONS: &str = "\
You are an assistant that reads university course syllabi.

Extract the following from the syllabus provided:

- course_title: the full course title
- instructor: the instructor's name, if given
- term: the semester or term, e.g. \"Fall 2025\", if given
- assessments: one entry per graded item
    - name, e.g. \"Midterm 1\" or \"Assignment 2\"
    - type, e.g. exam, quiz, essay, lab, project
    - weight_percent as a number, when it can be inferred
    - due_date as an ISO 8601 date when an exact date is stated, otherwise null
    - notes for extra details such as late penalties
- weekly_topics: the week-by-week outline
    - week_number, an integer starting at 1
    - title, a short name for the week
    - topics, a short description
    - readings, chapters or pages when listed

Only use information that appears in the syllabus.
Use null or an empty string for anything that is missing.
";

pub fn build(input: &SyllabusInput) -> Result<Prompt, AppError> {
    let document = input.document.as_ref().filter(|doc| !doc.data.is_empty());
    let text = non_blank(input.text.as_deref());

    let content = match (document, text) {
        (Some(doc), _) => PromptSegment::Document(doc.clone()),
        (None, Some(text)) => PromptSegment::Text(text.to_string()),
        (None, None) => {
            return Err(AppError::Validation(
                "No syllabus text or file provided.".to_string(),
            ));
        }
    };

    Ok(Prompt {
        segments: vec![PromptSegment::Text(INSTRUCTIONS.to_string()), content],
        schema: schema::syllabus(),
    })
}
