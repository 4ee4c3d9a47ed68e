//! Lyrics session state
//!
//! Everything a front-end can do goes through `Session`: submitting a search,
//! clearing, and managing favorites. It owns the current song and the loading
//! flag, and refuses a second search while one is running.

use crate::favorites::{FavoritesStore, Toggled};
use crate::lyrics::{LyricsLookup, SearchError, SearchHit, SearchRequest, search};
use crate::models::Song;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use time::OffsetDateTime;

/// What opening a favorite needs from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteLoad {
    /// Saved lyrics were shown directly.
    Cached(Song),
    /// No saved lyrics; run this search (already marked as in flight).
    Search(SearchRequest),
    /// No favorite at that index.
    Missing,
}

pub struct Session<S> {
    lookup: Arc<dyn LyricsLookup>,
    favorites: FavoritesStore<S>,
    current_song: Option<Song>,
    loading: bool,
    error: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(lookup: Arc<dyn LyricsLookup>, favorites: FavoritesStore<S>) -> Self {
        Self {
            lookup,
            favorites,
            current_song: None,
            loading: false,
            error: None,
        }
    }

    /// Shared handle for running a search off the owning task.
    pub fn lookup(&self) -> Arc<dyn LyricsLookup> {
        Arc::clone(&self.lookup)
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// Validate input and mark a search as in flight.
    pub fn begin_search(&mut self, artist: &str, title: &str) -> Result<SearchRequest, SearchError> {
        if self.loading {
            return Err(SearchError::Busy);
        }
        let request = match SearchRequest::new(artist, title) {
            Ok(r) => r,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        self.error = None;
        self.current_song = None;
        self.loading = true;
        Ok(request)
    }

    /// Record the outcome of a search started with `begin_search`.
    pub fn finish_search(&mut self, result: &Result<SearchHit, SearchError>) {
        self.loading = false;
        match result {
            Ok(hit) => {
                self.current_song = Some(hit.song.clone());
                self.error = None;
            }
            Err(e) => {
                tracing::info!("search failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Run a request from `begin_search` to completion on this task.
    pub async fn run_search(&mut self, request: &SearchRequest) -> Result<SearchHit, SearchError> {
        let result = search::run(self.lookup.as_ref(), request).await;
        self.finish_search(&result);
        result
    }

    pub async fn submit(&mut self, artist: &str, title: &str) -> Result<SearchHit, SearchError> {
        let request = self.begin_search(artist, title)?;
        self.run_search(&request).await
    }

    pub fn clear(&mut self) {
        self.current_song = None;
        self.error = None;
        self.loading = false;
    }

    /// Save or unsave the current song. `None` when nothing is displayed.
    pub fn toggle_favorite(&mut self) -> Option<Toggled> {
        let toggled = self.favorites.toggle(self.current_song.as_ref());
        if let (Some(t), Some(song)) = (toggled, &self.current_song) {
            tracing::info!(artist = %song.artist, title = %song.title, "favorite {:?}", t);
        }
        toggled
    }

    /// Save the current song unless it is already a favorite.
    pub fn save_current_favorite(&mut self) -> bool {
        let Some(song) = &self.current_song else {
            return false;
        };
        self.favorites.add(Song {
            added_at: Some(OffsetDateTime::now_utc()),
            ..song.clone()
        })
    }

    pub fn is_current_favorite(&self) -> bool {
        self.current_song
            .as_ref()
            .is_some_and(|song| self.favorites.is_favorite(song))
    }

    pub fn load_favorite(&mut self, index: usize) -> Result<FavoriteLoad, SearchError> {
        if self.loading {
            return Err(SearchError::Busy);
        }
        let Some(fav) = self.favorites.get(index).cloned() else {
            return Ok(FavoriteLoad::Missing);
        };
        if fav.has_lyrics() {
            self.error = None;
            self.current_song = Some(fav.clone());
            return Ok(FavoriteLoad::Cached(fav));
        }
        self.begin_search(&fav.artist, &fav.title)
            .map(FavoriteLoad::Search)
    }

    pub fn remove_favorite(&mut self, index: usize) -> Option<Song> {
        self.favorites.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::testing::FakeLookup;
    use crate::storage::Storage;

    fn session(lookup: FakeLookup) -> (Session<Storage>, Arc<FakeLookup>) {
        let lookup = Arc::new(lookup);
        let favorites = FavoritesStore::new(Storage::open_in_memory().unwrap());
        (Session::new(lookup.clone(), favorites), lookup)
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let (mut s, lookup) = session(FakeLookup::new());
        assert_eq!(s.submit("", "Hello").await, Err(SearchError::Validation));
        assert_eq!(s.submit("Adele", "  ").await, Err(SearchError::Validation));
        assert!(lookup.calls().is_empty());
        assert_eq!(s.error(), Some("Please enter both an artist and a song title."));
        assert!(!s.loading());
    }

    #[tokio::test]
    async fn test_submit_sets_current_song() {
        let (mut s, lookup) = session(FakeLookup::new().with_hit("Hello!", "Hello from the other side"));
        let hit = s.submit(" Adele ", "Hello").await.unwrap();
        assert_eq!(hit.attempts, 2);
        assert_eq!(lookup.calls().len(), 2);

        let current = s.current_song().unwrap();
        assert_eq!(current.heading(), "Adele - Hello");
        assert_eq!(current.lyrics.as_deref(), Some("Hello from the other side"));
        assert!(s.error().is_none());
        assert!(!s.loading());
    }

    #[tokio::test]
    async fn test_failed_search_records_error() {
        let (mut s, _) = session(FakeLookup::new());
        assert_eq!(s.submit("Nobody", "Nothing").await, Err(SearchError::NotFound));
        assert!(s.current_song().is_none());
        assert_eq!(s.error(), Some("Song not found. Check the artist and song title."));
    }

    #[test]
    fn test_second_search_rejected_while_loading() {
        let (mut s, _) = session(FakeLookup::new());
        s.begin_search("Adele", "Hello").unwrap();
        assert!(s.loading());
        assert_eq!(s.begin_search("Queen", "Innuendo"), Err(SearchError::Busy));
        assert_eq!(s.load_favorite(0), Err(SearchError::Busy));
    }

    #[tokio::test]
    async fn test_toggle_requires_current_song() {
        let (mut s, _) = session(FakeLookup::new().with_hit("Hello", "lyrics"));
        assert_eq!(s.toggle_favorite(), None);

        s.submit("Adele", "Hello").await.unwrap();
        assert!(!s.is_current_favorite());
        assert_eq!(s.toggle_favorite(), Some(Toggled::Added));
        assert!(s.is_current_favorite());
        assert_eq!(s.toggle_favorite(), Some(Toggled::Removed));
        assert!(s.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_save_current_is_idempotent() {
        let (mut s, _) = session(FakeLookup::new().with_hit("Hello", "lyrics"));
        assert!(!s.save_current_favorite());
        s.submit("Adele", "Hello").await.unwrap();
        assert!(s.save_current_favorite());
        assert!(!s.save_current_favorite());
        assert_eq!(s.favorites().len(), 1);
        assert!(s.favorites().get(0).unwrap().added_at.is_some());
    }

    #[tokio::test]
    async fn test_clear_resets_transient_state() {
        let (mut s, _) = session(FakeLookup::new().with_hit("Hello", "lyrics"));
        s.submit("Adele", "Hello").await.unwrap();
        s.toggle_favorite();
        s.clear();
        assert!(s.current_song().is_none());
        assert!(s.error().is_none());
        assert_eq!(s.favorites().len(), 1);
        assert_eq!(s.toggle_favorite(), None);
    }

    #[tokio::test]
    async fn test_load_favorite_with_saved_lyrics_skips_network() {
        let (mut s, lookup) = session(FakeLookup::new().with_hit("Hello", "saved words"));
        s.submit("Adele", "Hello").await.unwrap();
        s.toggle_favorite();
        s.clear();
        let calls_before = lookup.calls().len();

        match s.load_favorite(0).unwrap() {
            FavoriteLoad::Cached(song) => assert_eq!(song.lyrics.as_deref(), Some("saved words")),
            other => panic!("expected cached lyrics, got {other:?}"),
        }
        assert_eq!(lookup.calls().len(), calls_before);
        assert!(s.is_current_favorite());
        assert_eq!(s.load_favorite(5), Ok(FavoriteLoad::Missing));
    }

    #[tokio::test]
    async fn test_load_favorite_without_lyrics_searches() {
        let (mut s, lookup) = session(FakeLookup::new().with_hit("One More Time", "one more time"));
        // Favorites saved by older clients may lack lyrics.
        let mut favs = FavoritesStore::new(Storage::open_in_memory().unwrap());
        favs.add(Song::new("Daft Punk", "One More Time"));
        s.favorites = favs;

        let FavoriteLoad::Search(request) = s.load_favorite(0).unwrap() else {
            panic!("expected a search");
        };
        assert!(s.loading());
        let hit = s.run_search(&request).await.unwrap();
        assert_eq!(hit.song.title, "One More Time");
        assert_eq!(lookup.calls().len(), 1);
        assert!(!s.loading());
    }

    #[tokio::test]
    async fn test_remove_favorite_updates_indicator() {
        let (mut s, _) = session(FakeLookup::new().with_hit("Hello", "lyrics"));
        s.submit("Adele", "Hello").await.unwrap();
        s.toggle_favorite();
        assert!(s.remove_favorite(0).is_some());
        assert!(!s.is_current_favorite());
        assert!(s.remove_favorite(0).is_none());
    }
}
