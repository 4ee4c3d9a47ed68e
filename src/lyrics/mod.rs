//! Lyrics lookup
//!
//! This module provides:
//! - the `LyricsLookup` seam and the lyrics.ovh client behind it
//! - title variations tried when an exact title misses
//! - the sequential search over those variations
//! - text normalization and lyrics cleanup helpers

pub mod ovh;
pub mod search;
pub mod text;
pub mod variations;

use async_trait::async_trait;

pub use ovh::OvhClient;
pub use search::{SearchError, SearchHit, SearchRequest};

/// Why a single lookup attempt failed. Never shown to the user directly;
/// the search turns the last one into a `SearchError`.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("song not found")]
    NotFound,

    #[error("server error: {0}")]
    Status(u16),

    #[error("response had no lyrics")]
    NoLyrics,

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

/// One exact-match lyrics lookup against a remote service.
#[async_trait]
pub trait LyricsLookup: Send + Sync {
    /// Raw (uncleaned) lyrics for this exact artist/title pair.
    async fn lookup(&self, artist: &str, title: &str) -> Result<String, LookupError>;
}

#[cfg(test)]
pub mod testing {
    use super::{LookupError, LyricsLookup};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers from a fixed title table and records every call.
    #[derive(Debug, Default)]
    pub struct FakeLookup {
        hits: HashMap<String, String>,
        miss_status: Option<u16>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeLookup {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_hit(mut self, title: &str, lyrics: &str) -> Self {
            self.hits.insert(title.to_string(), lyrics.to_string());
            self
        }

        /// Misses answer with this HTTP status instead of 404.
        pub fn with_miss_status(mut self, status: u16) -> Self {
            self.miss_status = Some(status);
            self
        }

        pub fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn titles_tried(&self) -> Vec<String> {
            self.calls().into_iter().map(|(_, t)| t).collect()
        }
    }

    #[async_trait]
    impl LyricsLookup for FakeLookup {
        async fn lookup(&self, artist: &str, title: &str) -> Result<String, LookupError> {
            self.calls
                .lock()
                .unwrap()
                .push((artist.to_string(), title.to_string()));
            match (self.hits.get(title), self.miss_status) {
                (Some(lyrics), _) => Ok(lyrics.clone()),
                (None, Some(status)) => Err(LookupError::Status(status)),
                (None, None) => Err(LookupError::NotFound),
            }
        }
    }
}
