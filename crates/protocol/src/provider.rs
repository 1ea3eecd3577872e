//! Traits the remote collaborators implement.
//!
//! The engine never sees these; an exercise session wires a source and a
//! transport together with the pure core. Real implementations live outside
//! this workspace (an HTTP judge client); tests use in-memory fakes.

use crate::error::Result;
use crate::types::{ExerciseDetail, ExerciseSummary, Submission, SubmitOutcome};
use async_trait::async_trait;

/// Supplies exercise data: listings, details, and raw fill-in templates.
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// One page of the exercise listing.
    async fn list_exercises(&self, page: u32) -> Result<Vec<ExerciseSummary>>;

    /// Full detail for one exercise.
    async fn exercise_detail(&self, exercise_id: u32) -> Result<ExerciseDetail>;

    /// Raw template text of a fill-in-the-blank exercise, markers included.
    async fn fill_template(&self, exercise_id: u32) -> Result<String>;
}

/// Carries finished blanks to the judge and reads verdicts back.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Submit one code string per blank plus the compiler to run them under.
    async fn submit_blanks(
        &self,
        exercise_id: u32,
        compiler: &str,
        blanks: &[String],
    ) -> Result<SubmitOutcome>;

    /// Current state of one submission.
    async fn submission_status(&self, submission_id: u32) -> Result<Submission>;
}
