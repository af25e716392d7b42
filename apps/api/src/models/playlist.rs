use serde::{Deserialize, Serialize};

/// A normalized video-platform playlist. `url` is derived from the platform playlist id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub title: String,
    pub channel: String,
    pub thumbnail_url: String,
    pub url: String,
}
