use std::sync::Mutex;

use super::lock;
use crate::modals::Dismissal;
use crate::state::AppState;

/// The notice's OK button. Never touches the auth dialog.
pub fn close_notice(state: &Mutex<AppState>) -> Result<bool, String> {
    let mut guard = lock(state)?;
    Ok(guard.modals.dismiss_notice())
}

/// Close or backdrop click: the notice sits above the auth dialog, so it
/// goes first.
pub fn dismiss_top(state: &Mutex<AppState>, how: Dismissal) -> Result<bool, String> {
    let mut guard = lock(state)?;
    if guard.modals.notice().is_some() {
        return Ok(guard.modals.dismiss_notice());
    }
    Ok(guard.modals.dismiss_auth(how))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    #[test]
    fn notice_closes_before_auth() {
        let state = test_state();
        {
            let mut guard = state.lock().unwrap();
            guard.modals.show_auth();
            guard.modals.show_notice("Logged out successfully");
        }

        assert!(dismiss_top(&state, Dismissal::Backdrop).unwrap());
        assert!(state.lock().unwrap().modals.auth_visible());
        assert!(dismiss_top(&state, Dismissal::CloseButton).unwrap());
        assert!(!state.lock().unwrap().modals.auth_visible());
        assert!(!dismiss_top(&state, Dismissal::Backdrop).unwrap());
    }

    #[test]
    fn ok_closes_notice_only() {
        let state = test_state();
        assert!(!close_notice(&state).unwrap());
        state.lock().unwrap().modals.show_notice("hi");
        assert!(close_notice(&state).unwrap());
    }

    #[test]
    fn ok_leaves_auth_dialog_open() {
        let state = test_state();
        state.lock().unwrap().modals.show_auth();
        assert!(!close_notice(&state).unwrap());
        assert!(state.lock().unwrap().modals.auth_visible());
    }
}
