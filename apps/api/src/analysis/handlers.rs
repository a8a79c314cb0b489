//! Axum route handlers for the analysis API.

use axum::{
    extract::{FromRequest, State},
    Json,
};
use serde_json::Value;

use crate::analysis::career_coach::{coach_career, CareerCoachRequest};
use crate::analysis::interview_prep::{prepare_interview, InterviewPrepRequest};
use crate::analysis::jd_match::{match_jd, JdMatchRequest};
use crate::analysis::resume_score::{score_resume, ResumeScore, ResumeScoreRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections render as `{ "error": ... }` with 400.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// POST /api/resume-score
///
/// Scores raw resume text and returns a normalized 0–100 score with feedback lists.
pub async fn handle_resume_score(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ResumeScoreRequest>,
) -> Result<Json<ResumeScore>, AppError> {
    let result = score_resume(&state.llm, &request).await?;
    Ok(Json(result))
}

/// POST /api/career-coach
pub async fn handle_career_coach(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CareerCoachRequest>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(coach_career(&state.llm, &request).await?))
}

/// POST /api/jd-match
pub async fn handle_jd_match(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<JdMatchRequest>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(match_jd(&state.llm, &request).await?))
}

/// POST /api/interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InterviewPrepRequest>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(prepare_interview(&state.llm, &request).await?))
}
