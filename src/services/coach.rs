use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::AppError;
use crate::gemini::ModelGateway;
use crate::models::*;
use crate::prompts::{self, Prompt};
use crate::services::decoder::{self, Validate};

/// Builds the prompt for each feature, runs it through the gateway once and
/// decodes the answer.
pub struct StudyCoach {
    gateway: Arc<dyn ModelGateway>,
}

impl StudyCoach {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn parse_syllabus(&self, input: &SyllabusInput) -> Result<SyllabusRecord, AppError> {
        let prompt = prompts::syllabus::build(input)?;
        let record: SyllabusRecord = self.run(&prompt).await?;
        info!(
            "parsed syllabus '{}': {} assessments, {} weeks",
            record.course_title,
            record.assessments.len(),
            record.weekly_topics.len()
        );
        Ok(record)
    }

    pub async fn generate_plan(&self, req: &PlanRequest) -> Result<StudyPlan, AppError> {
        let prompt = prompts::plan::build(req)?;
        let plan: StudyPlan = self.run(&prompt).await?;
        info!("generated study plan with {} weeks", plan.weeks.len());
        Ok(plan)
    }

    pub async fn generate_practice(&self, req: &PracticeRequest) -> Result<PracticeSet, AppError> {
        let prompt = prompts::practice::build(req)?;
        let set: PracticeSet = self.run(&prompt).await?;
        info!(
            "generated {} questions and {} flashcards on '{}'",
            set.questions.len(),
            set.flashcards.len(),
            set.topic
        );
        Ok(set)
    }

    pub async fn analyze_tracker(&self, req: &TrackerRequest) -> Result<AssignmentTracker, AppError> {
        let prompt = prompts::tracker::build(req)?;
        let tracker: AssignmentTracker = self.run(&prompt).await?;
        info!("tracked {} assignments", tracker.assignments.len());
        Ok(tracker)
    }

    async fn run<T>(&self, prompt: &Prompt) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let raw = self.gateway.generate(prompt).await?;
        decoder::decode(&raw)
    }
}
