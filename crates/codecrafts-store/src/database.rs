//! SQLite-backed key-value store.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees that
//! migrations are run before any other operation. All application state lives
//! in a single `kv` table; see [`crate::kv::KeyValueStore`].

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/codecrafts/codecrafts.db`
    /// - macOS:   `~/Library/Application Support/com.codecrafts.codecrafts/codecrafts.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\codecrafts\codecrafts\data\codecrafts.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "codecrafts", "codecrafts").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("codecrafts.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Self::init(conn)
    }

    /// Open a private database that disappears when dropped.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()
            .map_err(StoreError::Sqlite)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open_at(&path).expect("should open");
        assert!(db.path().is_some());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kv.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.set("theme", b"dark").unwrap();
            db.set("theme", b"light").unwrap();
            db.set("currentUser", b"alice").unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.get("theme").unwrap().as_deref(), Some(&b"light"[..]));
        assert_eq!(db.get_string("currentUser").unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn remove_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.set("currentUser", b"bob").unwrap();
        db.remove("currentUser").unwrap();
        db.remove("currentUser").unwrap();
        assert_eq!(db.get("currentUser").unwrap(), None);
    }

    #[test]
    fn non_utf8_text_is_reported() {
        let db = Database::open_in_memory().unwrap();
        db.set("currentUser", &[0xff, 0xfe]).unwrap();
        assert!(matches!(
            db.get_string("currentUser"),
            Err(StoreError::InvalidUtf8(_))
        ));
    }
}
