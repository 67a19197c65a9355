//! Backend interface.
//!
//! The quiz consumes, but does not own, a REST backend. The [`Backend`]
//! trait keeps the quiz testable against an in-memory fake; the wire
//! types pin the backend's exact JSON key names.

mod http;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::QuizContext;
use crate::session::QuizSession;

pub use http::HttpBackend;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

/// Body of `POST /api/qcm/saveResults`. Key names follow the backend's
/// mixed conventions verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResultsRequest {
    pub score: f64,
    #[serde(rename = "candidateAnswer")]
    pub candidate_answer: BTreeMap<String, String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: BTreeMap<String, String>,
    pub candidate_id: String,
    #[serde(rename = "qcm_for_roadmapId")]
    pub qcm_for_roadmap_id: String,
}

impl SaveResultsRequest {
    /// Build the persistence payload from a finalized session.
    ///
    /// `candidateAnswer` carries only answered questions; `correctAnswer`
    /// carries every question, both keyed by question id.
    pub fn from_session(
        session: &QuizSession,
        context: &QuizContext,
        candidate_id: &str,
        score: f64,
    ) -> Self {
        let candidate_answer = session
            .answers()
            .iter()
            .map(|(id, key)| (id.to_string(), key.clone()))
            .collect();

        let correct_answer = session
            .questions()
            .iter()
            .map(|q| (q.id.to_string(), q.correct_key.clone()))
            .collect();

        Self {
            score,
            candidate_answer,
            correct_answer,
            candidate_id: candidate_id.to_string(),
            qcm_for_roadmap_id: context.qcm_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveResultsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body accepted by the badge-award collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeRequest {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "qcmForRoadmapId")]
    pub qcm_for_roadmap_id: String,
    pub score: f64,
}

/// REST operations the quiz depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/roadmap/qcm/{id}`: roadmap id for a quiz id.
    async fn resolve_roadmap(&self, qcm_id: &str) -> Result<String, ApiError>;

    /// `GET /api/qcm/roadmap/{roadmapId}`: skill tags for a roadmap.
    async fn resolve_skills(&self, roadmap_id: &str) -> Result<Vec<String>, ApiError>;

    /// `POST /api/qcm/saveResults`: persist a completed attempt.
    async fn save_results(&self, request: &SaveResultsRequest)
        -> Result<SaveResultsResponse, ApiError>;

    /// Badge-creation endpoint used by the badge collaborator.
    async fn create_badge(&self, request: &BadgeRequest) -> Result<(), ApiError>;
}
