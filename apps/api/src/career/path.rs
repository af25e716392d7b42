//! Career path and learning guide generation.

use tracing::info;

use crate::career::prompts::PromptRequest;
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, TextGenerator};
use crate::models::career::CareerPath;

pub const CAREER_PATH_MAX_TOKENS: u32 = 2000;

/// Generates the raw career-path document for a goal. Failures are surfaced, never emptied.
pub async fn generate_career_path(goal: &str, llm: &dyn TextGenerator) -> Result<CareerPath, AppError> {
    let prompt = PromptRequest::CareerPath { goal }.render()?;
    let document = llm
        .complete(CompletionRequest::deterministic(&prompt, CAREER_PATH_MAX_TOKENS))
        .await?;

    info!("Generated career path for '{goal}' ({} chars)", document.len());

    Ok(CareerPath {
        goal: goal.trim().to_string(),
        document,
    })
}

/// Generates a topic-wide learning guide with the provider's default sampling.
pub async fn generate_learning_guide(topic: &str, llm: &dyn TextGenerator) -> Result<String, AppError> {
    let prompt = PromptRequest::LearningGuide { topic }.render()?;
    let guide = llm.complete(CompletionRequest::with_defaults(&prompt)).await?;
    Ok(guide)
}
