pub mod coach;
pub mod decoder;

pub use coach::StudyCoach;
