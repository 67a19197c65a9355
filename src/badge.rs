//! Badge-award collaborator.
//!
//! Runs after persistence, independently of its outcome. Failures are
//! logged and never surfaced as errors to the quiz.

use crate::api::{Backend, BadgeRequest};

/// Score strictly above this awards a badge.
pub const BADGE_THRESHOLD: f64 = 80.0;

pub fn qualifies(score: f64) -> bool {
    score > BADGE_THRESHOLD
}

/// Fire the badge-creation call when the score qualifies.
pub async fn award_if_qualified(
    backend: &dyn Backend,
    candidate_id: &str,
    qcm_for_roadmap_id: &str,
    score: f64,
) {
    if !qualifies(score) {
        return;
    }

    let request = BadgeRequest {
        candidate_id: candidate_id.to_string(),
        qcm_for_roadmap_id: qcm_for_roadmap_id.to_string(),
        score,
    };

    match backend.create_badge(&request).await {
        Ok(()) => tracing::info!(candidate_id, score, "badge awarded"),
        Err(e) => tracing::warn!(candidate_id, error = %e, "badge creation failed"),
    }
}
