//! View-level state driving the TUI.
//!
//! [`App`] wraps one [`QuizSession`] and tracks which screen is shown,
//! the cursor/highlight positions, and pending side effects. All
//! transitions happen here, under a single lock, so the timer tick and
//! keyboard input cannot race each other.

use crate::models::Question;
use crate::session::QuizSession;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Quiz,
    /// Manual submit requested while questions are still unanswered.
    ConfirmSubmit,
    Results,
}

pub struct App {
    pub view: View,
    session: QuizSession,
    /// Index of the question being shown.
    cursor: usize,
    /// Index of the highlighted option on the current question.
    highlighted: usize,
    result_scroll: usize,
    save_notice: Option<String>,
    used_fallback: bool,
    pending_persist: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession, used_fallback: bool) -> Self {
        Self {
            view: View::Quiz,
            session,
            cursor: 0,
            highlighted: 0,
            result_scroll: 0,
            save_notice: None,
            used_fallback,
            pending_persist: false,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn current_question(&self) -> &Question {
        &self.session.questions()[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn save_notice(&self) -> Option<&str> {
        self.save_notice.as_deref()
    }

    pub fn set_save_notice(&mut self, notice: String) {
        self.save_notice = Some(notice);
    }

    // --- quiz view -------------------------------------------------------

    pub fn highlight_next(&mut self) {
        let len = self.current_question().options.len();
        self.highlighted = (self.highlighted + 1) % len;
    }

    pub fn highlight_previous(&mut self) {
        let len = self.current_question().options.len();
        self.highlighted = (self.highlighted + len - 1) % len;
    }

    /// Record the highlighted option as the answer for the current
    /// question and move on to the next one.
    pub fn answer_current(&mut self) {
        let question = self.current_question();
        let id = question.id;
        let key = question.options[self.highlighted].key.clone();
        self.session.select_answer(id, &key);

        if self.cursor + 1 < self.session.total_questions() {
            self.move_to(self.cursor + 1);
        }
    }

    pub fn next_question(&mut self) {
        if self.cursor + 1 < self.session.total_questions() {
            self.move_to(self.cursor + 1);
        }
    }

    pub fn previous_question(&mut self) {
        if self.cursor > 0 {
            self.move_to(self.cursor - 1);
        }
    }

    pub fn jump_to_next_unanswered(&mut self) {
        if let Some(index) = self.session.next_unanswered(self.cursor) {
            self.move_to(index);
        }
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index;
        // Highlight the already-selected option, if any.
        let question = &self.session.questions()[index];
        self.highlighted = self
            .session
            .answer_for(question.id)
            .and_then(|key| question.options.iter().position(|o| o.key == key))
            .unwrap_or(0);
    }

    // --- submission ------------------------------------------------------

    /// Manual submit. Unanswered questions require confirmation first.
    pub fn request_submit(&mut self) {
        if self.session.unanswered_count() > 0 {
            self.view = View::ConfirmSubmit;
        } else {
            self.finalize_manual();
        }
    }

    pub fn confirm_submit(&mut self) {
        self.finalize_manual();
    }

    /// Back out of the confirmation step; the answer map is untouched.
    pub fn cancel_submit(&mut self) {
        if self.view == View::ConfirmSubmit {
            self.view = View::Quiz;
        }
    }

    fn finalize_manual(&mut self) {
        if self.session.submit().is_some() {
            self.pending_persist = true;
            self.view = View::Results;
        }
    }

    /// One-second timer tick. On expiry the session finalizes itself,
    /// bypassing any confirmation in progress.
    pub fn tick_second(&mut self) {
        if self.session.tick().is_some() {
            self.pending_persist = true;
            self.view = View::Results;
        }
    }

    /// True exactly once after finalization; the caller then kicks off
    /// persistence.
    pub fn take_pending_persist(&mut self) -> bool {
        std::mem::take(&mut self.pending_persist)
    }

    // --- results view ----------------------------------------------------

    pub fn scroll_results_down(&mut self) {
        let max = self
            .session
            .result()
            .map(|r| r.reviews.len().saturating_sub(1))
            .unwrap_or(0);
        self.result_scroll = (self.result_scroll + 1).min(max);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;
    use crate::session::SessionStatus;

    fn app(n: u32) -> App {
        let questions = (1..=n)
            .map(|id| Question {
                id,
                prompt: format!("q{id}"),
                options: vec![
                    QuestionOption {
                        key: "option_a".into(),
                        text: "a".into(),
                    },
                    QuestionOption {
                        key: "option_b".into(),
                        text: "b".into(),
                    },
                ],
                correct_key: "option_a".into(),
                skill: "Alpha".into(),
            })
            .collect();
        App::new(QuizSession::new(questions, 900), false)
    }

    #[test]
    fn unanswered_submit_requires_confirmation() {
        let mut app = app(3);
        app.answer_current();

        app.request_submit();
        assert_eq!(app.view, View::ConfirmSubmit);
        assert_eq!(app.session().status(), SessionStatus::InProgress);

        // "Continue quiz" returns with the answer map unchanged.
        app.cancel_submit();
        assert_eq!(app.view, View::Quiz);
        assert_eq!(app.session().answered_count(), 1);
        assert_eq!(app.session().answer_for(1), Some("option_a"));
    }

    #[test]
    fn confirmed_submit_finalizes_once() {
        let mut app = app(3);
        app.request_submit();
        app.confirm_submit();

        assert_eq!(app.view, View::Results);
        assert_eq!(app.session().status(), SessionStatus::Submitted);
        assert!(app.take_pending_persist());
        assert!(!app.take_pending_persist());
    }

    #[test]
    fn fully_answered_submit_skips_confirmation() {
        let mut app = app(2);
        app.answer_current();
        app.answer_current();

        app.request_submit();
        assert_eq!(app.view, View::Results);
    }

    #[test]
    fn timer_expiry_overrides_confirmation() {
        let questions = (1..=2)
            .map(|id| Question {
                id,
                prompt: "q".into(),
                options: vec![
                    QuestionOption {
                        key: "option_a".into(),
                        text: "a".into(),
                    },
                    QuestionOption {
                        key: "option_b".into(),
                        text: "b".into(),
                    },
                ],
                correct_key: "option_a".into(),
                skill: "Alpha".into(),
            })
            .collect();
        let mut app = App::new(QuizSession::new(questions, 1), false);

        app.request_submit();
        assert_eq!(app.view, View::ConfirmSubmit);

        app.tick_second();
        assert_eq!(app.view, View::Results);
        assert!(app.session().result().unwrap().timed_out);
    }

    #[test]
    fn answering_advances_and_restores_highlight() {
        let mut app = app(3);
        app.highlight_next(); // option_b
        app.answer_current();
        assert_eq!(app.cursor(), 1);
        assert_eq!(app.highlighted(), 0);

        app.previous_question();
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.highlighted(), 1);
    }

    #[test]
    fn jump_targets_next_unanswered() {
        let mut app = app(3);
        app.answer_current(); // answers q1, cursor -> 1
        app.next_question(); // cursor -> 2
        app.answer_current(); // answers q3, cursor stays (last)

        app.jump_to_next_unanswered();
        assert_eq!(app.cursor(), 1);
    }
}
