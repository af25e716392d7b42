//! Step Summarizer — one completion per step, normalized into bullet points.
//!
//! The cleanup is best-effort: it strips the artifacts the model is known to emit
//! and passes anything else through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::career::prompts::PromptRequest;
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, TextGenerator};
use crate::models::career::{Step, StepDetail, StepSummary};

pub const SUMMARY_MAX_TOKENS: u32 = 500;

const BULLET: char = '•';

/// "• ****": an empty bold run the model leaves behind after a bullet.
static BULLET_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"•\s*\*{4}").expect("bullet artifact regex is valid"));

static SKILL_NOT_AVAILABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Most Important Skill:\s*Not Available").expect("skill regex is valid")
});

static LEADING_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:•\s*)?What to Learn:").expect("label regex is valid"));

/// Requests and cleans the summary for a single step.
pub async fn summarize_step(step_name: &str, llm: &dyn TextGenerator) -> Result<StepSummary, AppError> {
    let prompt = PromptRequest::StepSummary { step_name }.render()?;
    let raw = llm
        .complete(CompletionRequest::deterministic(&prompt, SUMMARY_MAX_TOKENS))
        .await?;

    let cleaned = clean_summary(&raw);
    debug!(
        "Summarized step '{step_name}': {} raw chars, {} cleaned",
        raw.len(),
        cleaned.len()
    );

    Ok(StepSummary {
        bullets: split_bullets(&cleaned),
    })
}

/// Summarizes steps one after another, preserving their order.
pub async fn summarize_steps(
    steps: &[Step],
    llm: &dyn TextGenerator,
) -> Result<Vec<StepDetail>, AppError> {
    let mut details = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let summary = summarize_step(&step.name, llm).await?;
        details.push(StepDetail {
            position: index + 1,
            name: step.name.clone(),
            summary,
        });
    }
    Ok(details)
}

/// Applies the cleanup rules until the text stops changing, so the result is a fixed point.
pub fn clean_summary(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let text = text.trim();
    let text = BULLET_ARTIFACT.replace_all(text, "");
    let text = SKILL_NOT_AVAILABLE.replace_all(&text, "");
    let text = text.trim();
    let text = LEADING_LABEL.replace(text, "");
    text.trim().to_string()
}

/// Splits on the bullet character. Every fragment is kept, blank ones included.
pub fn split_bullets(cleaned: &str) -> Vec<String> {
    cleaned
        .split(BULLET)
        .map(|fragment| fragment.trim().to_string())
        .collect()
}
