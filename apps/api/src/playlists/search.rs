//! Playlist Search — queries the video platform for playlists matching a topic.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::SearchError;
use crate::models::playlist::PlaylistRecord;

pub const DEFAULT_MAX_RESULTS: u32 = 3;

const PLAYLIST_URL_PREFIX: &str = "https://www.youtube.com/playlist?list=";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: ItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    playlist_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

pub fn playlist_url(playlist_id: &str) -> String {
    format!("{PLAYLIST_URL_PREFIX}{playlist_id}")
}

impl SearchItem {
    /// Items without a playlist id cannot be linked and are dropped.
    fn into_record(self) -> Option<PlaylistRecord> {
        let playlist_id = self.id.playlist_id?;
        Some(PlaylistRecord {
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            thumbnail_url: self
                .snippet
                .thumbnails
                .medium
                .map(|t| t.url)
                .unwrap_or_default(),
            url: playlist_url(&playlist_id),
        })
    }
}

/// Video-platform search client restricted to playlists. One GET per search, no retry.
#[derive(Clone)]
pub struct PlaylistSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlaylistSearchClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.youtube_api_url.trim_end_matches('/').to_string(),
            api_key: config.youtube_api_key.clone(),
        }
    }

    /// Searches for playlists; any failure is logged and yields an empty list.
    pub async fn search(&self, query: &str, max_results: u32) -> Vec<PlaylistRecord> {
        match self.try_search(query, max_results).await {
            Ok(playlists) => playlists,
            Err(e) => {
                warn!("Playlist search for '{query}' failed, continuing without playlists: {e}");
                Vec::new()
            }
        }
    }

    pub async fn try_search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistRecord>, SearchError> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("type", "playlist"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: SearchResponse = serde_json::from_str(&text)?;
        let total = body.items.len();
        let playlists: Vec<PlaylistRecord> = body
            .items
            .into_iter()
            .filter_map(SearchItem::into_record)
            .collect();

        if playlists.len() < total {
            debug!(
                "Dropped {} search items without a playlist id",
                total - playlists.len()
            );
        }
        Ok(playlists)
    }
}
