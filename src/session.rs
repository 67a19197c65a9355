//! Quiz session: answer tracking plus the submission state machine.
//!
//! All transitions are guarded on [`SessionStatus`] so the timer tick and
//! manual submission stay mutually exclusive: whichever finalizes first
//! freezes the answer map and computes the score exactly once.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::Question;
use crate::score::ScoreResult;
use crate::timer::QuizTimer;

/// Lifecycle of a session. One-way: once out of `InProgress`, the answer
/// map is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    /// Timer expired; finalization is already underway.
    TimedOut,
    /// Terminal.
    Submitted,
}

/// A single quiz attempt. Independent of any other session; dropped when
/// the user navigates away.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    answers: BTreeMap<u32, String>,
    status: SessionStatus,
    timer: QuizTimer,
    result: Option<ScoreResult>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, budget_secs: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            answers: BTreeMap::new(),
            status: SessionStatus::InProgress,
            timer: QuizTimer::new(budget_secs),
            result: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn timer(&self) -> &QuizTimer {
        &self.timer
    }

    pub fn answers(&self) -> &BTreeMap<u32, String> {
        &self.answers
    }

    /// The computed result, present once finalized.
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    /// Record the selected option for a question. A no-op (not an error)
    /// unless the session is still in progress and the key names one of
    /// the question's options.
    pub fn select_answer(&mut self, question_id: u32, option_key: &str) {
        if self.status != SessionStatus::InProgress {
            return;
        }
        let valid = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .is_some_and(|q| q.options.iter().any(|o| o.key == option_key));
        if valid {
            self.answers.insert(question_id, option_key.to_string());
        }
    }

    pub fn answer_for(&self, question_id: u32) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn unanswered_count(&self) -> usize {
        self.total_questions() - self.answered_count()
    }

    /// Indices (into the question list) of unanswered questions.
    pub fn unanswered_indices(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !self.answers.contains_key(&q.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// First unanswered question index after `from`, wrapping around.
    pub fn next_unanswered(&self, from: usize) -> Option<usize> {
        let unanswered = self.unanswered_indices();
        unanswered
            .iter()
            .copied()
            .find(|&i| i > from)
            .or_else(|| unanswered.first().copied())
    }

    /// Answered fraction in [0, 1], for the progress gauge.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.answered_count() as f64 / self.total_questions() as f64
        }
    }

    /// Advance the countdown by one second. On expiry, marks the session
    /// timed out and finalizes with whatever answers exist. Returns the
    /// result only on the tick that finalized.
    pub fn tick(&mut self) -> Option<&ScoreResult> {
        if self.status != SessionStatus::InProgress {
            return None;
        }
        if self.timer.tick() {
            self.status = SessionStatus::TimedOut;
            return self.finalize(true);
        }
        None
    }

    /// Manual submission. Returns the result only on the call that
    /// finalized; later calls are no-ops.
    pub fn submit(&mut self) -> Option<&ScoreResult> {
        if self.status != SessionStatus::InProgress {
            return None;
        }
        self.timer.stop();
        self.finalize(false)
    }

    fn finalize(&mut self, timed_out: bool) -> Option<&ScoreResult> {
        if self.result.is_some() {
            return None;
        }
        self.result = Some(ScoreResult::compute(&self.questions, &self.answers, timed_out));
        self.status = SessionStatus::Submitted;
        self.result.as_ref()
    }
}
