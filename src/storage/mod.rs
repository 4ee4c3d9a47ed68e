use anyhow::Context;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Minimal string key-value persistence used for favorites.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> rusqlite::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> rusqlite::Result<()>;
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let s = Self {
            conn: Connection::open_in_memory().context("open in-memory db")?,
        };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |row| row.get(0))
            .optional()
    }

    fn set(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.conn.execute(
            r#"
INSERT INTO kv(key, value, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
"#,
            params![key, value, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let s = Storage::open_in_memory().unwrap();
        assert_eq!(s.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let s = Storage::open_in_memory().unwrap();
        s.set("k", "one").unwrap();
        s.set("k", "two").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_survives_reopen() {
        let path = std::env::temp_dir().join(format!("verso-kv-{}.sqlite3", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let s = Storage::open(&path).unwrap();
            s.set("lyrics_favorites", "[]").unwrap();
        }
        let s = Storage::open(&path).unwrap();
        assert_eq!(s.get("lyrics_favorites").unwrap().as_deref(), Some("[]"));
        drop(s);
        let _ = std::fs::remove_file(&path);
    }
}
