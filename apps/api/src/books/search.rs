//! Book Search — queries the catalog API and normalizes volumes into `BookRecord`s.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::SearchError;
use crate::models::book::BookRecord;

pub const DEFAULT_MAX_RESULTS: u32 = 10;

const NO_TITLE: &str = "No Title";
const UNKNOWN_AUTHOR: &str = "Unknown Author";
const NO_LINK: &str = "#";
const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/128";
const UNKNOWN_DATE: &str = "Unknown Date";

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    info_link: Option<String>,
    image_links: Option<ImageLinks>,
    published_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl From<VolumeInfo> for BookRecord {
    fn from(info: VolumeInfo) -> Self {
        let authors = info
            .authors
            .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()])
            .join(", ");

        BookRecord {
            title: info.title.unwrap_or_else(|| NO_TITLE.to_string()),
            authors,
            link: info.info_link.unwrap_or_else(|| NO_LINK.to_string()),
            thumbnail_url: info
                .image_links
                .and_then(|links| links.thumbnail)
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            published_date: info
                .published_date
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        }
    }
}

/// Catalog search client. One GET per search, newest first, no retry.
#[derive(Clone)]
pub struct BookSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BookSearchClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.books_api_url.trim_end_matches('/').to_string(),
            api_key: config.google_books_api_key.clone(),
        }
    }

    /// Searches the catalog; any failure is logged and yields an empty list.
    pub async fn search(&self, topic: &str, max_results: u32) -> Vec<BookRecord> {
        match self.try_search(topic, max_results).await {
            Ok(books) => books,
            Err(e) => {
                warn!("Book search for '{topic}' failed, continuing without books: {e}");
                Vec::new()
            }
        }
    }

    pub async fn try_search(
        &self,
        topic: &str,
        max_results: u32,
    ) -> Result<Vec<BookRecord>, SearchError> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .query(&[
                ("q", topic),
                ("maxResults", max_results.as_str()),
                ("orderBy", "newest"),
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

        let body: VolumesResponse = serde_json::from_str(&text)?;
        let books: Vec<BookRecord> = body
            .items
            .into_iter()
            .map(|volume| BookRecord::from(volume.volume_info))
            .collect();

        debug!("Book search for '{topic}' returned {} records", books.len());
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> BookSearchClient {
        BookSearchClient::new(Client::new(), &test_config(&server.url()))
    }

    #[tokio::test]
    async fn test_missing_fields_get_defaults() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items":[{"volumeInfo":{"title":"Clean Code"}}]}"#)
            .create_async()
            .await;

        let books = client_for(&server).search("software", 10).await;

        assert_eq!(
            books,
            vec![BookRecord {
                title: "Clean Code".to_string(),
                authors: "Unknown Author".to_string(),
                link: "#".to_string(),
                thumbnail_url: PLACEHOLDER_THUMBNAIL.to_string(),
                published_date: "Unknown Date".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_full_volume_is_mapped_and_authors_joined() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/volumes")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".to_string(), "data science".to_string()),
                Matcher::UrlEncoded("maxResults".to_string(), "10".to_string()),
                Matcher::UrlEncoded("orderBy".to_string(), "newest".to_string()),
                Matcher::UrlEncoded("key".to_string(), "books-test-key".to_string()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items":[{"volumeInfo":{
                    "title":"Python for Data Analysis",
                    "authors":["Wes McKinney","Jane Doe"],
                    "infoLink":"https://books.example/pda",
                    "imageLinks":{"thumbnail":"https://img.example/pda.jpg"},
                    "publishedDate":"2022-08-09"
                }}]}"#,
            )
            .create_async()
            .await;

        let books = client_for(&server)
            .try_search("data science", DEFAULT_MAX_RESULTS)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].authors, "Wes McKinney, Jane Doe");
        assert_eq!(books[0].link, "https://books.example/pda");
        assert_eq!(books[0].thumbnail_url, "https://img.example/pda.jpg");
        assert_eq!(books[0].published_date, "2022-08-09");
    }

    #[tokio::test]
    async fn test_no_items_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"kind":"books#volumes","totalItems":0}"#)
            .create_async()
            .await;

        assert!(client_for(&server).search("nothing", 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_degrades_to_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.search("rust", 10).await.is_empty());

        let err = client.try_search("rust", 10).await.unwrap_err();
        assert!(matches!(err, SearchError::Upstream { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_degrades_to_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        assert!(client.search("rust", 10).await.is_empty());
        assert!(matches!(
            client.try_search("rust", 10).await.unwrap_err(),
            SearchError::Parse(_)
        ));
    }
}
