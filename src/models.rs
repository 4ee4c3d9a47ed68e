use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub artist: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub added_at: Option<OffsetDateTime>,
}

impl Song {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            lyrics: None,
            added_at: None,
        }
    }

    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = Some(lyrics.into());
        self
    }

    /// Two songs are the same when artist and title match ignoring case.
    pub fn same_identity(&self, other: &Song) -> bool {
        self.artist.to_lowercase() == other.artist.to_lowercase()
            && self.title.to_lowercase() == other.title.to_lowercase()
    }

    /// `"Artist - Title"`, as shown above the lyrics.
    pub fn heading(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    pub fn has_lyrics(&self) -> bool {
        self.lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}
