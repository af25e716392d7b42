//! Axum route handlers for the Report API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::report::{build_report, CareerReport, ReportSources};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub goal: String,
}

/// POST /api/v1/reports
///
/// Full pipeline for one goal: path, step summaries, ranked books, playlists, guide.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<CareerReport>, AppError> {
    let sources = ReportSources {
        llm: &state.llm,
        step_extractor: state.step_extractor.as_ref(),
        books: &state.books,
        playlists: &state.playlists,
    };

    let report = build_report(&request.goal, sources).await?;
    Ok(Json(report))
}
