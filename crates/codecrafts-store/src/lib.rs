//! # codecrafts-store
//!
//! Local persistence for CodeCrafts.
//!
//! Everything is kept in a flat key-value store behind the [`KeyValueStore`]
//! port. Two adapters ship with the crate: [`Database`], a SQLite file, and
//! [`MemoryStore`], an in-process map. On top of the port sit the
//! [`UserDirectory`] (accounts and enrollment ledgers), the [`Session`]
//! (current user) and the theme preference.

pub mod database;
pub mod directory;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod preferences;
pub mod session;

mod error;

pub use database::Database;
pub use directory::UserDirectory;
pub use error::{Result, StoreError};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use models::*;
pub use session::Session;
