pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/resume-score", post(handlers::handle_resume_score))
        .route("/api/career-coach", post(handlers::handle_career_coach))
        .route("/api/jd-match", post(handlers::handle_jd_match))
        .route("/api/interview-prep", post(handlers::handle_interview_prep))
        .with_state(state)
}
