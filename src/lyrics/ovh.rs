//! lyrics.ovh API client
//!
//! Single endpoint: `GET /v1/{artist}/{title}` returning `{"lyrics": "..."}`.
//! Unknown songs answer 404 with `{"error": "No lyrics found"}`.

use super::text::encode_param;
use super::{LookupError, LyricsLookup};
use crate::config::ApiConfig;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

/// lyrics.ovh API response
#[derive(Debug, Deserialize)]
struct OvhResponse {
    lyrics: Option<String>,
}

/// lyrics.ovh API client
#[derive(Debug, Clone)]
pub struct OvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl OvhClient {
    pub fn new(cfg: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/{artist}/{title}` with both segments normalized and encoded
    pub fn request_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            encode_param(artist),
            encode_param(title)
        )
    }

    /// Fetch raw lyrics for an exact artist/title pair
    pub async fn get_lyrics(&self, artist: &str, title: &str) -> Result<String, LookupError> {
        let url = self.request_url(artist, title);
        tracing::debug!(%url, "lyrics request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: OvhResponse = response.json().await?;
        match body.lyrics {
            Some(lyrics) if !lyrics.trim().is_empty() => Ok(lyrics),
            _ => Err(LookupError::NoLyrics),
        }
    }
}

#[async_trait]
impl LyricsLookup for OvhClient {
    async fn lookup(&self, artist: &str, title: &str) -> Result<String, LookupError> {
        self.get_lyrics(artist, title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> OvhClient {
        let cfg = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        OvhClient::new(&cfg).unwrap()
    }

    #[test]
    fn test_request_url() {
        let c = client("https://api.lyrics.ovh/v1");
        assert_eq!(
            c.request_url("  Guns N\u{2019}  Roses", "Sweet Child O' Mine"),
            "https://api.lyrics.ovh/v1/Guns%20N%27%20Roses/Sweet%20Child%20O%27%20Mine"
        );
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let c = client("http://localhost:8080/v1/");
        assert_eq!(c.request_url("a", "b?"), "http://localhost:8080/v1/a/b%3F");
    }

    #[test]
    fn test_empty_title_segment() {
        let c = client("https://api.lyrics.ovh/v1");
        assert_eq!(c.request_url("Adele", ""), "https://api.lyrics.ovh/v1/Adele/");
    }

    #[test]
    fn test_response_shapes() {
        let ok: OvhResponse = serde_json::from_str(r#"{"lyrics":"la la"}"#).unwrap();
        assert_eq!(ok.lyrics.as_deref(), Some("la la"));
        let missing: OvhResponse = serde_json::from_str(r#"{"error":"No lyrics found"}"#).unwrap();
        assert!(missing.lyrics.is_none());
    }
}
