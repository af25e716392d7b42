use std::sync::Arc;

use reqwest::Client;

use crate::books::search::BookSearchClient;
use crate::career::extractor::{MarkerStepExtractor, StepExtractor};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::playlists::search::PlaylistSearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub books: BookSearchClient,
    pub playlists: PlaylistSearchClient,
    /// Pluggable step extraction strategy. Default: MarkerStepExtractor.
    pub step_extractor: Arc<dyn StepExtractor>,
}

impl AppState {
    /// Builds every service client from the one config, sharing a single connection pool.
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            llm: LlmClient::new(http.clone(), config),
            books: BookSearchClient::new(http.clone(), config),
            playlists: PlaylistSearchClient::new(http, config),
            step_extractor: Arc::new(MarkerStepExtractor),
        }
    }
}
