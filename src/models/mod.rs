pub mod plan;
pub mod practice;
pub mod syllabus;
pub mod tracker;

pub use plan::{PlanRequest, StudyPlan, WeekPlan};
pub use practice::{Flashcard, PracticeQuestion, PracticeRequest, PracticeSet};
pub use syllabus::{AssessmentItem, Document, SyllabusInput, SyllabusRecord, WeekTopic};
pub use tracker::{AssignmentStatus, AssignmentTracker, TrackedAssignment, TrackerRequest};
