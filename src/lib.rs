//! # roadmap-qcm
//!
//! Terminal runner for roadmap QCM (multiple-choice quiz) attempts on a
//! recruitment platform. Resolves the roadmap's skills from the backend,
//! draws a bounded random question set from the bundled bank, runs a
//! timed session, and persists the scored attempt.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use roadmap_qcm::{HttpBackend, QcmQuiz, QuizContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(HttpBackend::new("http://localhost:3001")?);
//!     let context = QuizContext::new("42").with_candidate("cand-7");
//!
//!     QcmQuiz::new(context, backend)?.run().await?;
//!     Ok(())
//! }
//! ```

mod api;
mod app;
mod badge;
mod bank;
mod config;
mod models;
mod score;
mod select;
mod session;
pub mod terminal;
mod timer;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tokio::sync::Mutex;

pub use api::{ApiError, Backend, BadgeRequest, HttpBackend, SaveResultsRequest, SaveResultsResponse};
pub use app::{App, View};
pub use badge::BADGE_THRESHOLD;
pub use bank::{BankQuestion, LoadError, QuestionBank};
pub use config::QuizContext;
pub use models::{Question, QuestionOption};
pub use score::{CourseBreakdown, QuestionReview, ScoreResult, Verdict};
pub use select::{MAX_PER_SKILL, MAX_TOTAL, Selection, select_questions};
pub use session::{QuizSession, SessionStatus};
pub use timer::{QuizTimer, TIME_BUDGET_SECS, TimePressure};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QcmError {
    #[error("failed to load question bank: {0}")]
    Bank(#[from] LoadError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

type SharedApp = Arc<Mutex<App>>;

/// A quiz attempt ready to run in the terminal.
pub struct QcmQuiz {
    context: QuizContext,
    backend: Arc<dyn Backend>,
    bank: QuestionBank,
}

impl QcmQuiz {
    /// Create a quiz over the bundled question bank.
    pub fn new(context: QuizContext, backend: Arc<dyn Backend>) -> Result<Self, QcmError> {
        Ok(Self::with_bank(context, backend, QuestionBank::bundled()?))
    }

    /// Create a quiz over a caller-supplied question bank.
    pub fn with_bank(context: QuizContext, backend: Arc<dyn Backend>, bank: QuestionBank) -> Self {
        Self {
            context,
            backend,
            bank,
        }
    }

    /// Run the quiz in the terminal, returning when the user leaves.
    ///
    /// Roadmap/skill resolution happens first; a resolution failure
    /// renders a blocking error screen whose only action is returning.
    pub async fn run(self) -> Result<(), QcmError> {
        let resolution = self.resolve_skills().await;

        let mut term = terminal::init()?;
        let outcome = match resolution {
            Err(e) => {
                tracing::error!(error = %e, "roadmap resolution failed");
                run_error_screen(&mut term, &e.to_string())
            }
            Ok(skills) => {
                let mut rng = match self.context.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let selection = select_questions(&self.bank, &skills, &mut rng);
                if selection.questions.is_empty() {
                    run_error_screen(&mut term, "no questions available for this quiz")
                } else {
                    run_quiz(&mut term, self.context, self.backend, selection).await
                }
            }
        };
        terminal::restore()?;
        outcome
    }

    async fn resolve_skills(&self) -> Result<Vec<String>, ApiError> {
        let roadmap_id = self.backend.resolve_roadmap(&self.context.qcm_id).await?;
        let skills = self.backend.resolve_skills(&roadmap_id).await?;
        tracing::info!(%roadmap_id, skill_count = skills.len(), "roadmap resolved");
        Ok(skills)
    }
}

async fn run_quiz(
    term: &mut terminal::AppTerminal,
    context: QuizContext,
    backend: Arc<dyn Backend>,
    selection: Selection,
) -> Result<(), QcmError> {
    let session = QuizSession::new(selection.questions, context.time_budget_secs);
    let session_id = session.id();
    tracing::info!(
        %session_id,
        total = session.total_questions(),
        budget_secs = context.time_budget_secs,
        "quiz session started"
    );
    if selection.used_fallback {
        tracing::warn!(%session_id, "no skills resolved; sampled across the whole bank");
    }

    let app: SharedApp = Arc::new(Mutex::new(App::new(session, selection.used_fallback)));

    // One tick per second; the session guards against late ticks itself.
    let tick_app = Arc::clone(&app);
    let tick_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.tick().await;
        loop {
            interval.tick().await;
            let mut app = tick_app.lock().await;
            if app.should_quit {
                break;
            }
            app.tick_second();
        }
    });

    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            term.draw(|frame| ui::render(frame, &app))?;
        }

        spawn_persistence_if_finalized(&app, &backend, &context).await;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let mut app = app.lock().await;
                if handle_input(&mut app, key.code) {
                    break;
                }
            }
        }
    }

    tick_task.abort();
    Ok(())
}

/// Kick off the one-shot save + badge flow after finalization. The save
/// is fire-and-forget with respect to the UI: the results screen stays
/// usable and a failure only produces an inline notice.
async fn spawn_persistence_if_finalized(
    app: &SharedApp,
    backend: &Arc<dyn Backend>,
    context: &QuizContext,
) {
    let job = {
        let mut app = app.lock().await;
        if !app.take_pending_persist() {
            None
        } else {
            let score = app.session().result().map(|r| r.percent).unwrap_or(0.0);
            match &context.candidate_id {
                None => {
                    tracing::warn!("no candidate id in context; attempt not persisted");
                    app.set_save_notice("results not saved: no candidate id".to_string());
                    None
                }
                Some(candidate_id) => {
                    let request =
                        SaveResultsRequest::from_session(app.session(), context, candidate_id, score);
                    Some((request, candidate_id.clone(), score))
                }
            }
        }
    };

    if let Some((request, candidate_id, score)) = job {
        let app = Arc::clone(app);
        let backend = Arc::clone(backend);
        let qcm_id = context.qcm_id.clone();
        tokio::spawn(async move {
            match backend.save_results(&request).await {
                Ok(_) => tracing::info!(score, "attempt persisted"),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to persist attempt");
                    let mut app = app.lock().await;
                    app.set_save_notice(format!("could not save results: {e}"));
                }
            }
            badge::award_if_qualified(backend.as_ref(), &candidate_id, &qcm_id, score).await;
        });
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.view {
        View::Quiz => handle_quiz_input(app, key),
        View::ConfirmSubmit => handle_confirm_input(app, key),
        View::Results => handle_result_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.answer_current(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.jump_to_next_unanswered(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.request_submit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return true;
        }
        _ => {}
    }
    false
}

fn handle_confirm_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_submit(),
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('n') => app.cancel_submit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return true;
        }
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
            return true;
        }
        _ => {}
    }
    false
}

fn run_error_screen(term: &mut terminal::AppTerminal, message: &str) -> Result<(), QcmError> {
    loop {
        term.draw(|frame| ui::error::render(frame, message))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
            ) {
                return Ok(());
            }
        }
    }
}
