//! Axum route handlers for the Career API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::career::extractor::collect_steps;
use crate::career::path::{generate_career_path, generate_learning_guide};
use crate::career::summarizer::summarize_steps;
use crate::errors::AppError;
use crate::models::career::{CareerPath, StepDetail};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerPathRequest {
    pub goal: String,
}

#[derive(Debug, Deserialize)]
pub struct StepsRequest {
    pub document: String,
}

#[derive(Debug, Serialize)]
pub struct StepsResponse {
    pub steps: Vec<StepDetail>,
}

#[derive(Debug, Deserialize)]
pub struct LearningGuideRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct LearningGuideResponse {
    pub topic: String,
    pub guide: String,
}

/// POST /api/v1/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    Json(request): Json<CareerPathRequest>,
) -> Result<Json<CareerPath>, AppError> {
    let path = generate_career_path(&request.goal, &state.llm).await?;
    Ok(Json(path))
}

/// POST /api/v1/career-path/steps
///
/// Extracts the steps of a previously generated document and summarizes each one.
/// Responds 422 EXTRACTION_EMPTY when the document has no step markers.
pub async fn handle_steps(
    State(state): State<AppState>,
    Json(request): Json<StepsRequest>,
) -> Result<Json<StepsResponse>, AppError> {
    let steps = collect_steps(state.step_extractor.as_ref(), &request.document)?;
    let steps = summarize_steps(&steps, &state.llm).await?;
    Ok(Json(StepsResponse { steps }))
}

/// POST /api/v1/learning-guide
pub async fn handle_learning_guide(
    State(state): State<AppState>,
    Json(request): Json<LearningGuideRequest>,
) -> Result<Json<LearningGuideResponse>, AppError> {
    let guide = generate_learning_guide(&request.topic, &state.llm).await?;
    Ok(Json(LearningGuideResponse {
        topic: request.topic.trim().to_string(),
        guide,
    }))
}
