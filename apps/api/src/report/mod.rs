//! Career Report — orchestrates every branch for one goal.
//!
//! Flow: generate path → extract steps → summarize each step (sequential, in order);
//!       concurrently: search books → rank; search playlists; generate learning guide.
//!
//! Only the career branch can fail the report. Books, playlists and the guide
//! degrade to empty / absent.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::books::ranker::rank_books;
use crate::books::search::{BookSearchClient, DEFAULT_MAX_RESULTS as BOOK_RESULTS};
use crate::career::extractor::{collect_steps, StepExtractor};
use crate::career::path::{generate_career_path, generate_learning_guide};
use crate::career::summarizer::summarize_steps;
use crate::career::REGENERATE_HINT;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::book::BookRecord;
use crate::models::career::{CareerPath, StepDetail};
use crate::models::playlist::PlaylistRecord;
use crate::playlists::search::{PlaylistSearchClient, DEFAULT_MAX_RESULTS as PLAYLIST_RESULTS};

/// Outcome of step extraction. An empty extraction is its own state, not zero steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepBreakdown {
    Extracted { steps: Vec<StepDetail> },
    ExtractionEmpty { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerReport {
    pub goal: String,
    pub career_path: CareerPath,
    pub steps: StepBreakdown,
    pub books: Vec<BookRecord>,
    pub playlists: Vec<PlaylistRecord>,
    pub learning_guide: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Everything a report reads from.
#[derive(Clone, Copy)]
pub struct ReportSources<'a> {
    pub llm: &'a dyn TextGenerator,
    pub step_extractor: &'a dyn StepExtractor,
    pub books: &'a BookSearchClient,
    pub playlists: &'a PlaylistSearchClient,
}

pub async fn build_report(goal: &str, sources: ReportSources<'_>) -> Result<CareerReport, AppError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    info!("Building career report for '{goal}'");

    let (career, books, playlists, learning_guide) = tokio::join!(
        career_branch(goal, sources.llm, sources.step_extractor),
        book_branch(goal, sources.books, sources.llm),
        sources.playlists.search(goal, PLAYLIST_RESULTS),
        guide_branch(goal, sources.llm),
    );
    let (career_path, steps) = career?;

    info!(
        "Career report for '{goal}': {} books, {} playlists, guide={}",
        books.len(),
        playlists.len(),
        learning_guide.is_some()
    );

    Ok(CareerReport {
        goal: goal.to_string(),
        career_path,
        steps,
        books,
        playlists,
        learning_guide,
        generated_at: Utc::now(),
    })
}

/// Path generation, extraction and per-step summaries. Generator failures abort.
pub async fn career_branch(
    goal: &str,
    llm: &dyn TextGenerator,
    step_extractor: &dyn StepExtractor,
) -> Result<(CareerPath, StepBreakdown), AppError> {
    let path = generate_career_path(goal, llm).await?;

    let steps = match collect_steps(step_extractor, &path.document) {
        Ok(steps) => {
            info!("Extracted {} steps for '{goal}'", steps.len());
            StepBreakdown::Extracted {
                steps: summarize_steps(&steps, llm).await?,
            }
        }
        Err(AppError::ExtractionEmpty) => {
            warn!("No steps extracted from the career path for '{goal}'");
            StepBreakdown::ExtractionEmpty {
                message: REGENERATE_HINT.to_string(),
            }
        }
        Err(e) => return Err(e),
    };

    Ok((path, steps))
}

async fn book_branch(
    goal: &str,
    books: &BookSearchClient,
    llm: &dyn TextGenerator,
) -> Vec<BookRecord> {
    let candidates = books.search(goal, BOOK_RESULTS).await;
    rank_books(candidates, goal, llm).await
}

async fn guide_branch(goal: &str, llm: &dyn TextGenerator) -> Option<String> {
    match generate_learning_guide(goal, llm).await {
        Ok(guide) => Some(guide),
        Err(e) => {
            warn!("Learning guide for '{goal}' unavailable: {e}");
            None
        }
    }
}
