//! Current-user tracking.
//!
//! The session is nothing more than the `currentUser` key. It has no expiry;
//! it lasts until the next login or logout.

use codecrafts_shared::constants::KEY_CURRENT_USER;

use crate::directory::UserDirectory;
use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::UserRecord;

pub struct Session<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn login(&self, username: &str) -> Result<()> {
        self.store.set_string(KEY_CURRENT_USER, username)?;
        tracing::info!(username, "session started");
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.store.remove(KEY_CURRENT_USER)?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Raw value of the session key, even if it names no known user.
    pub fn current_username(&self) -> Result<Option<String>> {
        self.store.get_string(KEY_CURRENT_USER)
    }

    /// Whether a session key is present at all.
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.store.get(KEY_CURRENT_USER)?.is_some())
    }

    /// The logged-in user's record. A session naming a user missing from the
    /// directory counts as a guest.
    pub fn current(&self) -> Result<Option<UserRecord>> {
        let Some(username) = self.current_username()? else {
            return Ok(None);
        };

        let user = UserDirectory::new(self.store).find_by_username(&username)?;
        if user.is_none() {
            tracing::debug!(username, "session names an unknown user, treating as guest");
        }
        Ok(user)
    }
}
