use serde::{Deserialize, Serialize};

/// A normalized catalog entry. `title` is the identity key used by ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    /// Comma-joined author names.
    pub authors: String,
    pub link: String,
    pub thumbnail_url: String,
    pub published_date: String,
}
