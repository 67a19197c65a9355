//! Quiz construction context.
//!
//! Everything the quiz needs from the surrounding application is passed
//! in explicitly here; nothing is read from ambient storage.

use crate::timer::TIME_BUDGET_SECS;

#[derive(Debug, Clone)]
pub struct QuizContext {
    /// Candidate identifier established by the surrounding application.
    /// Absent id blocks persistence only, never score display.
    pub candidate_id: Option<String>,
    /// The qcm-for-roadmap identifier of this attempt.
    pub qcm_id: String,
    /// Countdown budget in seconds.
    pub time_budget_secs: u64,
    /// Optional RNG seed for reproducible question selection.
    pub seed: Option<u64>,
}

impl QuizContext {
    pub fn new(qcm_id: impl Into<String>) -> Self {
        Self {
            candidate_id: None,
            qcm_id: qcm_id.into(),
            time_budget_secs: TIME_BUDGET_SECS,
            seed: None,
        }
    }

    pub fn with_candidate(mut self, candidate_id: impl Into<String>) -> Self {
        self.candidate_id = Some(candidate_id.into());
        self
    }

    pub fn with_time_budget(mut self, secs: u64) -> Self {
        self.time_budget_secs = secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
