//! Schema versioning for the key-value table.
//!
//! The schema version lives in SQLite's `user_version` pragma. Every entry in
//! [`MIGRATIONS`] newer than the stored version is applied in order, each one
//! in its own transaction together with the version bump.

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// One schema step, identified by the `user_version` it leaves behind.
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub up: fn(&Connection) -> rusqlite::Result<()>,
}

/// All schema steps, strictly ascending by version.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "kv table",
    up: v001_initial::up,
}];

/// Version of a fully migrated database.
pub fn current_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

fn stored_version(conn: &Connection) -> Result<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Bring the schema up to [`current_version`]. Returns how many steps ran.
pub fn run_migrations(conn: &Connection) -> Result<usize> {
    let stored = stored_version(conn)?;
    let target = current_version();
    if stored > target {
        return Err(StoreError::Migration(format!(
            "database schema v{stored} is newer than supported v{target}"
        )));
    }

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > stored).collect();
    if pending.is_empty() {
        tracing::debug!(version = stored, "schema up to date");
        return Ok(0);
    }

    for migration in &pending {
        tracing::info!(
            from = stored,
            to = migration.version,
            name = migration.name,
            "applying schema migration"
        );
        let tx = conn.unchecked_transaction()?;
        (migration.up)(&tx).map_err(|e| {
            StoreError::Migration(format!("v{} {}: {e}", migration.version, migration.name))
        })?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
    }

    Ok(pending.len())
}
