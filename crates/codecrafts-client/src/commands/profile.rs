use std::sync::Mutex;

use super::lock;
use crate::state::AppState;

/// Placeholder action behind the "Edit Profile" button.
pub fn edit_profile(state: &Mutex<AppState>) -> Result<(), String> {
    let mut guard = lock(state)?;
    guard
        .modals
        .show_notice("Profile editing feature would be implemented here.");
    Ok(())
}
