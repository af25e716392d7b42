// All LLM prompt templates for the books module.

use crate::llm_client::prompts::fill_template;
use crate::models::book::BookRecord;

/// System instruction for the ranking call.
pub const RANKING_SYSTEM: &str = "Rank the books based on their relevance and usefulness.";

/// Ranking prompt header. Replace `{topic}` before sending; one candidate line follows per book.
pub const RANKING_PROMPT_HEADER: &str = "Here are some of the latest books related to {topic}. \
    Rank the top 3 best books based on their relevance and usefulness:";

/// Builds the ranking prompt, one `Title: .., Authors: .., Published Date: ..` line per candidate.
pub fn build_ranking_prompt(topic: &str, books: &[BookRecord]) -> String {
    let mut prompt = fill_template(RANKING_PROMPT_HEADER, &[("topic", topic)]);
    for book in books {
        prompt.push('\n');
        prompt.push_str(&format!(
            "Title: {}, Authors: {}, Published Date: {}",
            book.title, book.authors, book.published_date
        ));
    }
    prompt
}
