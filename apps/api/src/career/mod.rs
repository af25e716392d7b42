// Career path generation: prompt rendering, path and guide generation,
// step extraction and per-step summaries.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod extractor;
pub mod handlers;
pub mod path;
pub mod prompts;
pub mod summarizer;

/// Shown when a generated path contains no recognizable steps.
pub const REGENERATE_HINT: &str = "No steps extracted. Try regenerating the career path.";
