//! Axum route handlers for the Books API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::books::ranker::rank_books;
use crate::books::search::DEFAULT_MAX_RESULTS;
use crate::errors::AppError;
use crate::models::book::BookRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    pub topic: String,
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<BookRecord>,
}

/// GET /api/v1/books?topic=..&max_results=..
///
/// Searches the catalog and ranks the candidates. Search failures yield an empty list.
pub async fn handle_books(
    State(state): State<AppState>,
    Query(params): Query<BooksQuery>,
) -> Result<Json<BooksResponse>, AppError> {
    let topic = params.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let candidates = state
        .books
        .search(topic, params.max_results.unwrap_or(DEFAULT_MAX_RESULTS))
        .await;
    let books = rank_books(candidates, topic, &state.llm).await;

    Ok(Json(BooksResponse { books }))
}
