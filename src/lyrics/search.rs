//! Sequential search over title variations
//!
//! Attempts run one after another and stop at the first hit, so a search
//! costs exactly as many requests as the position of the matching variation.

use super::text::clean_lyrics;
use super::variations::title_variations;
use super::{LookupError, LyricsLookup};
use crate::models::Song;

/// Failure of a whole search, as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter both an artist and a song title.")]
    Validation,

    #[error("A search is already in progress.")]
    Busy,

    #[error("Song not found. Check the artist and song title.")]
    NotFound,

    #[error("Server error: {0}")]
    Server(u16),
}

/// A validated search: trimmed inputs plus the titles to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub artist: String,
    pub title: String,
    pub variations: Vec<String>,
}

impl SearchRequest {
    pub fn new(artist: &str, title: &str) -> Result<Self, SearchError> {
        let artist = artist.trim();
        let title = title.trim();
        if artist.is_empty() || title.is_empty() {
            return Err(SearchError::Validation);
        }
        Ok(Self {
            artist: artist.to_string(),
            title: title.to_string(),
            variations: title_variations(title),
        })
    }
}

/// Successful search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Original artist/title as typed, with cleaned lyrics
    pub song: Song,
    /// The variation the service actually matched
    pub matched_title: String,
    /// Number of lookups issued, including the successful one
    pub attempts: usize,
}

pub async fn run(
    lookup: &dyn LyricsLookup,
    request: &SearchRequest,
) -> Result<SearchHit, SearchError> {
    let total = request.variations.len();
    tracing::debug!(variations = ?request.variations, "searching");

    let mut last_failure = None;
    for (i, variation) in request.variations.iter().enumerate() {
        tracing::debug!("attempt {}/{}: {:?}", i + 1, total, variation);

        let failure = match lookup.lookup(&request.artist, variation).await {
            Ok(raw) => {
                let lyrics = clean_lyrics(&raw);
                if !lyrics.is_empty() {
                    tracing::info!(artist = %request.artist, matched = %variation, "lyrics found");
                    return Ok(SearchHit {
                        song: Song::new(&request.artist, &request.title).with_lyrics(lyrics),
                        matched_title: variation.clone(),
                        attempts: i + 1,
                    });
                }
                LookupError::NoLyrics
            }
            Err(e) => e,
        };

        match &failure {
            LookupError::NotFound => tracing::debug!("not found: {:?}", variation),
            other => tracing::debug!("lookup failed for {:?}: {}", variation, other),
        }
        last_failure = Some(failure);
    }

    tracing::info!(artist = %request.artist, title = %request.title, "no variation matched");
    Err(match last_failure {
        Some(LookupError::Status(status)) => SearchError::Server(status),
        _ => SearchError::NotFound,
    })
}
