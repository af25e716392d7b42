use thiserror::Error;

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1";
const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("Environment variable '{key}' has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
/// Built once at startup and handed by reference to every service client.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub google_books_api_key: String,
    pub youtube_api_key: String,
    pub groq_api_url: String,
    pub groq_model: String,
    pub books_api_url: String,
    pub youtube_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. A blank value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = optional("PORT", "8080");
        let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            key: "PORT",
            value: port.clone(),
        })?;

        Ok(Config {
            groq_api_key: require("GROQ_API_KEY")?,
            google_books_api_key: require("GOOGLE_BOOKS_API_KEY")?,
            youtube_api_key: require("YOUTUBE_API_KEY")?,
            groq_api_url: optional("GROQ_API_URL", DEFAULT_GROQ_API_URL),
            groq_model: optional("GROQ_MODEL", DEFAULT_GROQ_MODEL),
            books_api_url: optional("BOOKS_API_URL", DEFAULT_BOOKS_API_URL),
            youtube_api_url: optional("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL),
            port,
            rust_log: optional("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        groq_api_key: "groq-test-key".to_string(),
        google_books_api_key: "books-test-key".to_string(),
        youtube_api_key: "youtube-test-key".to_string(),
        groq_api_url: base_url.to_string(),
        groq_model: "test-model".to_string(),
        books_api_url: base_url.to_string(),
        youtube_api_url: base_url.to_string(),
        port: 8080,
        rust_log: "debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const ALL_KEYS: [(&str, &str); 3] = [
        ("GROQ_API_KEY", "g"),
        ("GOOGLE_BOOKS_API_KEY", "b"),
        ("YOUTUBE_API_KEY", "y"),
    ];

    #[test]
    fn test_all_credentials_present_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&ALL_KEYS)).unwrap();
        assert_eq!(config.groq_api_key, "g");
        assert_eq!(config.groq_model, DEFAULT_GROQ_MODEL);
        assert_eq!(config.books_api_url, DEFAULT_BOOKS_API_URL);
        assert_eq!(config.youtube_api_url, DEFAULT_YOUTUBE_API_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_credential_is_named() {
        let err = Config::from_lookup(lookup_from(&ALL_KEYS[..2])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("YOUTUBE_API_KEY"));
        assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "   "),
            ("GOOGLE_BOOKS_API_KEY", "b"),
            ("YOUTUBE_API_KEY", "y"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("GROQ_API_KEY"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut pairs = ALL_KEYS.to_vec();
        pairs.push(("PORT", "not-a-port"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_overrides_are_respected() {
        let mut pairs = ALL_KEYS.to_vec();
        pairs.push(("GROQ_MODEL", "llama-3.1-70b"));
        pairs.push(("PORT", "9000"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.groq_model, "llama-3.1-70b");
        assert_eq!(config.port, 9000);
    }
}
