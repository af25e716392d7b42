//! Book Ranker — asks the model to rank catalog candidates, then keeps the
//! candidates whose titles the model named.
//!
//! Invariant: the result is always drawn from the input. A title the model
//! invents can never produce a record.

use tracing::{info, warn};

use crate::books::prompts::{build_ranking_prompt, RANKING_SYSTEM};
use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use crate::models::book::BookRecord;

pub const MAX_RANKED: usize = 5;
/// Returned unranked when the ranking call itself fails.
pub const FALLBACK_COUNT: usize = 3;

const TITLE_LABEL: &str = "Title:";

pub async fn rank_books(
    books: Vec<BookRecord>,
    topic: &str,
    llm: &dyn TextGenerator,
) -> Vec<BookRecord> {
    if books.is_empty() {
        return books;
    }

    let prompt = build_ranking_prompt(topic, &books);
    let request = CompletionRequest::with_defaults(&prompt).system(RANKING_SYSTEM);

    let ranking = match llm.complete(request).await {
        Ok(text) => text,
        // The call went through but carried no text: same as a ranking with no titles.
        Err(LlmError::EmptyContent) => String::new(),
        Err(e) => {
            warn!("Book ranking for '{topic}' failed, using first {FALLBACK_COUNT} unranked: {e}");
            return books.into_iter().take(FALLBACK_COUNT).collect();
        }
    };

    let ranked_titles = parse_ranked_titles(&ranking);
    let ranked = select_ranked(books, &ranked_titles);

    if ranked.is_empty() {
        // Known degenerate case: the model answered but named no candidate verbatim.
        warn!(
            "Book ranking for '{topic}' matched none of {} ranked titles",
            ranked_titles.len()
        );
    } else {
        info!("Ranked {} books for '{topic}'", ranked.len());
    }
    ranked
}

/// Every line containing `Title:` contributes the text after it, up to any further `Title:`.
pub fn parse_ranked_titles(ranking: &str) -> Vec<String> {
    ranking
        .lines()
        .filter_map(|line| line.split(TITLE_LABEL).nth(1))
        .map(|title| title.trim().to_string())
        .collect()
}

/// Keeps candidates whose title exactly equals a ranked title, in original order, capped.
pub fn select_ranked(books: Vec<BookRecord>, ranked_titles: &[String]) -> Vec<BookRecord> {
    books
        .into_iter()
        .filter(|book| ranked_titles.iter().any(|t| *t == book.title))
        .take(MAX_RANKED)
        .collect()
}
