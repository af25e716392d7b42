//! Axum route handlers for the Playlists API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::playlist::PlaylistRecord;
use crate::playlists::search::DEFAULT_MAX_RESULTS;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlaylistsQuery {
    pub query: String,
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistsResponse {
    pub playlists: Vec<PlaylistRecord>,
}

/// GET /api/v1/playlists?query=..&max_results=..
///
/// Search failures yield an empty list; callers check for emptiness.
pub async fn handle_playlists(
    State(state): State<AppState>,
    Query(params): Query<PlaylistsQuery>,
) -> Result<Json<PlaylistsResponse>, AppError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let playlists = state
        .playlists
        .search(query, params.max_results.unwrap_or(DEFAULT_MAX_RESULTS))
        .await;

    Ok(Json(PlaylistsResponse { playlists }))
}
