//! Saved songs
//!
//! An ordered list (insertion order is display order) with at most one entry
//! per song identity. The whole list is written back as JSON after every
//! change.

use crate::models::Song;
use crate::storage::KeyValueStore;
use time::OffsetDateTime;

pub const FAVORITES_KEY: &str = "lyrics_favorites";

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("malformed favorites data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

pub struct FavoritesStore<S> {
    store: S,
    items: Vec<Song>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Empty list over `store`; call `load` to read what was saved.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing key is an empty list. On error the list is left empty and
    /// the caller decides whether that matters.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        self.items.clear();
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(());
        };
        self.items = serde_json::from_str::<Vec<Song>>(&raw)?;
        tracing::debug!(count = self.items.len(), "favorites loaded");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.items.iter()
    }

    pub fn position(&self, song: &Song) -> Option<usize> {
        self.items.iter().position(|fav| fav.same_identity(song))
    }

    pub fn is_favorite(&self, song: &Song) -> bool {
        self.position(song).is_some()
    }

    /// Append unless the identity is already saved. Returns whether it was added.
    pub fn add(&mut self, song: Song) -> bool {
        if self.is_favorite(&song) {
            return false;
        }
        self.items.push(song);
        self.persist();
        true
    }

    /// Remove by position. Out-of-range indices change nothing.
    pub fn remove(&mut self, index: usize) -> Option<Song> {
        if index >= self.items.len() {
            return None;
        }
        let song = self.items.remove(index);
        self.persist();
        Some(song)
    }

    /// Remove `song` if saved, otherwise save it stamped with the current time.
    pub fn toggle(&mut self, song: Option<&Song>) -> Option<Toggled> {
        let song = song?;
        if let Some(index) = self.position(song) {
            self.items.remove(index);
            self.persist();
            return Some(Toggled::Removed);
        }

        self.items.push(Song {
            artist: song.artist.clone(),
            title: song.title.clone(),
            lyrics: song.lyrics.clone(),
            added_at: Some(OffsetDateTime::now_utc()),
        });
        self.persist();
        Some(Toggled::Added)
    }

    /// Write the full list. Failures are logged; memory keeps the change.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("failed to save favorites: {e}");
        }
    }

    fn save(&self) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(&self.items)?;
        self.store.set(FAVORITES_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn song(artist: &str, title: &str) -> Song {
        Song::new(artist, title).with_lyrics(format!("{title} lyrics"))
    }

    fn empty() -> FavoritesStore<Storage> {
        FavoritesStore::new(Storage::open_in_memory().unwrap())
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> rusqlite::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> rusqlite::Result<()> {
            Err(rusqlite::Error::InvalidQuery)
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut favs = empty();
        favs.add(song("Queen", "Bohemian Rhapsody"));
        let hello = song("Adele", "Hello");

        assert_eq!(favs.toggle(Some(&hello)), Some(Toggled::Added));
        assert_eq!(favs.len(), 2);
        assert!(favs.get(1).unwrap().added_at.is_some());

        assert_eq!(favs.toggle(Some(&hello)), Some(Toggled::Removed));
        assert_eq!(favs.len(), 1);
        assert_eq!(favs.get(0).unwrap().title, "Bohemian Rhapsody");
    }

    #[test]
    fn test_toggle_without_song_is_noop() {
        let mut favs = empty();
        assert_eq!(favs.toggle(None), None);
        assert!(favs.is_empty());
    }

    #[test]
    fn test_identity_is_case_insensitive() {
        let mut favs = empty();
        favs.add(song("Adele", "Hello"));
        assert!(favs.is_favorite(&Song::new("adele", "hello")));
        assert!(!favs.add(song("ADELE", "HELLO")));
        assert_eq!(favs.toggle(Some(&Song::new("adele", "HELLO"))), Some(Toggled::Removed));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_remove_by_index() {
        let mut favs = empty();
        favs.add(song("A", "1"));
        favs.add(song("B", "2"));
        favs.add(song("C", "3"));

        assert_eq!(favs.remove(1).unwrap().artist, "B");
        assert!(favs.remove(7).is_none());
        let titles: Vec<_> = favs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["1", "3"]);
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut favs = empty();
        favs.add(song("Adele", "Hello"));
        favs.toggle(Some(&song("Queen", "Bohemian Rhapsody")));
        favs.add(Song::new("Daft Punk", "One More Time"));
        let before: Vec<Song> = favs.iter().cloned().collect();

        let FavoritesStore { store, .. } = favs;
        let mut reloaded = FavoritesStore::new(store);
        reloaded.load().unwrap();
        let after: Vec<Song> = reloaded.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        for raw in ["not json", r#"{"artist":"Adele"}"#, r#"[{"nope":1}]"#, "[1,2]"] {
            let mut favs = empty();
            favs.add(song("stale", "entry"));
            favs.store.set(FAVORITES_KEY, raw).unwrap();

            let err = favs.load().unwrap_err();
            assert!(matches!(err, PersistenceError::Malformed(_)), "{raw}: {err}");
            assert!(favs.is_empty());
        }
    }

    #[test]
    fn test_reads_list_written_by_browser() {
        let store = Storage::open_in_memory().unwrap();
        store
            .set(
                FAVORITES_KEY,
                r#"[{"artist":"Adele","title":"Hello","lyrics":"Hello, it's me","addedAt":"2024-01-05T09:30:00.000Z"}]"#,
            )
            .unwrap();
        let mut favs = FavoritesStore::new(store);
        favs.load().unwrap();
        assert_eq!(favs.len(), 1);
        assert_eq!(favs.get(0).unwrap().lyrics.as_deref(), Some("Hello, it's me"));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut favs = FavoritesStore::new(ReadOnlyStore);
        assert_eq!(favs.toggle(Some(&song("Adele", "Hello"))), Some(Toggled::Added));
        assert_eq!(favs.len(), 1);
    }
}
