use crate::error::AppError;
use crate::models::PracticeRequest;
use crate::prompts::{Prompt, PromptSegment, difficulty_or_default, non_blank, schema};

pub const QUESTION_COUNT: usize = 5;
pub const FLASHCARD_COUNT: usize = 5;

pub fn build(req: &PracticeRequest) -> Result<Prompt, AppError> {
    let topic = non_blank(req.topic.as_deref())
        .ok_or_else(|| AppError::Validation("Missing topic.".to_string()))?;
    let difficulty = difficulty_or_default(req.difficulty.as_deref());

    let instructions = format!(
        "Write practice material on the topic \"{topic}\" for a university-level course.

Difficulty: {difficulty}.

Produce:
- {QUESTION_COUNT} practice questions, each with a short answer where that makes sense.
- {FLASHCARD_COUNT} flashcards as front/back pairs.

Respond with JSON of this shape:
{{
  \"topic\": \"{topic}\",
  \"difficulty\": \"{difficulty}\",
  \"questions\": [{{ \"question\": \"...\", \"answer\": \"...\" }}],
  \"flashcards\": [{{ \"front\": \"...\", \"back\": \"...\" }}]
}}
"
    );

    Ok(Prompt {
        segments: vec![PromptSegment::Text(instructions)],
        schema: schema::practice(),
    })
}
