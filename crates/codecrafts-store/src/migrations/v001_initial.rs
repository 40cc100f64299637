//! Schema v1: the `kv` table behind [`crate::KeyValueStore`].

use rusqlite::Connection;

const KV_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,     -- 'users', 'currentUser', 'theme'
    value      BLOB NOT NULL,                 -- JSON or UTF-8 text
    updated_at TEXT NOT NULL                  -- RFC-3339
);
"#;

pub fn up(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(KV_TABLE)
}
