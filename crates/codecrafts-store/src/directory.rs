//! User directory: the full list of [`UserRecord`]s stored as one JSON blob.
//!
//! Every mutation reads the whole list, changes it in memory and writes the
//! whole list back. There is no locking between the read and the write.

use codecrafts_shared::constants::KEY_USERS;
use codecrafts_shared::CourseId;

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::models::{LedgerUpdate, UserRecord};

pub struct UserDirectory<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> UserDirectory<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All records in insertion order. An absent or unparseable blob reads
    /// as an empty directory.
    pub fn list_users(&self) -> Result<Vec<UserRecord>> {
        let Some(bytes) = self.store.get(KEY_USERS)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<UserRecord>>(&bytes) {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::warn!(error = %e, "stored user list is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<()> {
        let json = serde_json::to_vec(users)?;
        self.store.set(KEY_USERS, &json)
    }

    /// Exact, case-sensitive match on both fields.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|u| u.username == username && u.password == password))
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self.list_users()?.into_iter().find(|u| u.username == username))
    }

    pub fn exists_by_username(&self, username: &str) -> Result<bool> {
        Ok(self.list_users()?.iter().any(|u| u.username == username))
    }

    /// Append a new record. Callers validate the input first; the directory
    /// itself does not reject duplicates or short values.
    pub fn register(&self, username: &str, password: &str) -> Result<UserRecord> {
        let mut users = self.list_users()?;
        let user = UserRecord::new(username, password);
        users.push(user.clone());
        self.save_users(&users)?;

        tracing::info!(username, total_users = users.len(), "user registered");
        Ok(user)
    }

    /// Append `course_id` to the user's registered list.
    pub fn enroll(&self, username: &str, course_id: CourseId) -> Result<LedgerUpdate> {
        let outcome = self.update_ledger(username, |user| {
            if user.is_registered(course_id) {
                return LedgerUpdate::AlreadyPresent;
            }
            user.registered_courses.push(course_id);
            LedgerUpdate::Applied
        })?;

        tracing::debug!(username, course = %course_id, ?outcome, "enroll");
        Ok(outcome)
    }

    /// Append `course_id` to the user's completed list. Enrollment is not
    /// checked.
    pub fn mark_complete(&self, username: &str, course_id: CourseId) -> Result<LedgerUpdate> {
        let outcome = self.update_ledger(username, |user| {
            if user.is_completed(course_id) {
                return LedgerUpdate::AlreadyPresent;
            }
            user.completed_courses.push(course_id);
            LedgerUpdate::Applied
        })?;

        tracing::debug!(username, course = %course_id, ?outcome, "mark complete");
        Ok(outcome)
    }

    fn update_ledger<F>(&self, username: &str, apply: F) -> Result<LedgerUpdate>
    where
        F: FnOnce(&mut UserRecord) -> LedgerUpdate,
    {
        let mut users = self.list_users()?;
        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;

        let outcome = apply(user);
        if outcome == LedgerUpdate::Applied {
            self.save_users(&users)?;
        }
        Ok(outcome)
    }
}
