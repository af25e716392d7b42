// Book recommendations: catalog search, then LLM ranking of the candidates.

pub mod handlers;
pub mod prompts;
pub mod ranker;
pub mod search;
