use std::sync::Mutex;

use codecrafts_shared::validation::{LoginForm, RegistrationForm};
use codecrafts_shared::{AuthTab, ValidationError};
use tracing::{debug, info};

use super::{lock, store_err};
use crate::modals::Dismissal;
use crate::state::AppState;

/// Attempt a login. Returns whether a session was established.
pub fn login(state: &Mutex<AppState>, username: &str, password: &str) -> Result<bool, String> {
    let mut guard = lock(state)?;

    let form = LoginForm::new(username, password);
    if let Err(e) = form.validate() {
        guard.modals.show_notice(e.to_string());
        return Ok(false);
    }

    let user = guard
        .directory()
        .find_by_credentials(&form.username, &form.password)
        .map_err(store_err)?;

    match user {
        Some(user) => {
            guard.session().login(&user.username).map_err(store_err)?;
            guard.modals.hide_auth();
            guard
                .modals
                .show_notice(format!("Welcome back, {}!", user.username));
            info!(username = %user.username, "logged in");
            Ok(true)
        }
        None => {
            debug!("login rejected");
            guard.modals.show_notice("Invalid username or password");
            Ok(false)
        }
    }
}

/// Create an account and log into it. Field errors stay in the auth dialog.
pub fn register(
    state: &Mutex<AppState>,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<bool, String> {
    let mut guard = lock(state)?;

    let form = RegistrationForm::new(username, password, confirm_password);
    let taken = guard
        .directory()
        .exists_by_username(&form.username)
        .map_err(store_err)?;

    match form.validate(taken) {
        Ok(()) => {}
        Err(ValidationError::Registration(errors)) => {
            guard.modals.show_registration_errors(errors);
            return Ok(false);
        }
        Err(other) => {
            guard.modals.show_notice(other.to_string());
            return Ok(false);
        }
    }

    guard
        .directory()
        .register(&form.username, &form.password)
        .map_err(store_err)?;
    guard.session().login(&form.username).map_err(store_err)?;
    guard.modals.clear_registration_errors();
    guard.modals.hide_auth();
    guard.modals.show_notice(format!(
        "Account created successfully! Welcome, {}",
        form.username
    ));
    Ok(true)
}

pub fn logout(state: &Mutex<AppState>) -> Result<(), String> {
    let mut guard = lock(state)?;
    guard.session().logout().map_err(store_err)?;
    guard.modals.show_notice("Logged out successfully");
    guard.modals.show_auth();
    info!("logged out");
    Ok(())
}

pub fn show_auth(state: &Mutex<AppState>) -> Result<(), String> {
    let mut guard = lock(state)?;
    guard.modals.show_auth();
    Ok(())
}

pub fn select_auth_tab(state: &Mutex<AppState>, tab: AuthTab) -> Result<(), String> {
    let mut guard = lock(state)?;
    guard.modals.select_tab(tab);
    Ok(())
}

/// Close the auth dialog via its close control or the backdrop.
pub fn close_auth(state: &Mutex<AppState>, how: Dismissal) -> Result<bool, String> {
    let mut guard = lock(state)?;
    Ok(guard.modals.dismiss_auth(how))
}

/// Fired once after start-up: prompt for login unless a session exists by
/// now. Returns whether the dialog was shown.
pub fn prompt_if_guest(state: &Mutex<AppState>) -> Result<bool, String> {
    let mut guard = lock(state)?;
    if guard.session().is_logged_in().map_err(store_err)? {
        return Ok(false);
    }
    guard.modals.show_auth();
    debug!("showing delayed login prompt");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{capture_logs, logged_in_state, test_state};

    #[test]
    fn register_logs_in_and_closes_dialog() {
        let state = test_state();
        show_auth(&state).unwrap();

        assert!(register(&state, " alice ", "secret1", "secret1").unwrap());

        let guard = state.lock().unwrap();
        assert_eq!(guard.session().current_username().unwrap().as_deref(), Some("alice"));
        assert!(!guard.modals.auth_visible());
        assert_eq!(
            guard.modals.notice(),
            Some("Account created successfully! Welcome, alice")
        );
        assert!(guard
            .directory()
            .find_by_credentials("alice", "secret1")
            .unwrap()
            .is_some());
    }

    #[test]
    fn register_existing_username_fails() {
        let state = logged_in_state("alice");
        logout(&state).unwrap();

        assert!(!register(&state, "alice", "another1", "another1").unwrap());

        let guard = state.lock().unwrap();
        assert_eq!(
            guard.modals.registration_errors().username.as_deref(),
            Some("Username already exists")
        );
        assert_eq!(guard.directory().list_users().unwrap().len(), 1);
        assert!(!guard.session().is_logged_in().unwrap());
    }

    #[test]
    fn register_reports_field_errors_together() {
        let state = test_state();
        assert!(!register(&state, "al", "abc", "abd").unwrap());

        let guard = state.lock().unwrap();
        let errors = guard.modals.registration_errors();
        assert_eq!(
            errors.username.as_deref(),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(errors.password.as_deref(), Some("Passwords do not match"));
        assert_eq!(guard.modals.auth_tab(), AuthTab::Register);
        assert!(guard.modals.notice().is_none());
    }

    #[test]
    fn login_with_valid_credentials() {
        let state = logged_in_state("alice");
        logout(&state).unwrap();

        assert!(login(&state, "alice", "secret1").unwrap());
        let guard = state.lock().unwrap();
        assert_eq!(guard.modals.notice(), Some("Welcome back, alice!"));
        assert!(!guard.modals.auth_visible());
    }

    #[test]
    fn login_rejects_bad_password_and_empty_fields() {
        let state = logged_in_state("alice");
        logout(&state).unwrap();

        assert!(!login(&state, "alice", "wrong").unwrap());
        assert_eq!(
            state.lock().unwrap().modals.notice(),
            Some("Invalid username or password")
        );

        assert!(!login(&state, "   ", "secret1").unwrap());
        assert_eq!(
            state.lock().unwrap().modals.notice(),
            Some("Please enter both username and password")
        );
    }

    #[test]
    fn rejected_login_does_not_log_username() {
        let state = test_state();
        let (accepted, logs) = capture_logs(|| login(&state, "mallory", "guess123"));
        assert!(!accepted.unwrap());
        assert!(logs.contains("login rejected"));
        assert!(!logs.contains("mallory"));
    }

    #[test]
    fn logout_shows_notice_and_dialog() {
        let state = logged_in_state("alice");
        logout(&state).unwrap();

        let guard = state.lock().unwrap();
        assert!(!guard.session().is_logged_in().unwrap());
        assert_eq!(guard.modals.notice(), Some("Logged out successfully"));
        assert!(guard.modals.auth_visible());
    }

    #[test]
    fn delayed_prompt_respects_session() {
        let state = test_state();
        assert!(prompt_if_guest(&state).unwrap());
        assert!(state.lock().unwrap().modals.auth_visible());

        let state = logged_in_state("alice");
        assert!(!prompt_if_guest(&state).unwrap());
        assert!(!state.lock().unwrap().modals.auth_visible());
    }

    #[test]
    fn close_auth_by_backdrop() {
        let state = test_state();
        show_auth(&state).unwrap();
        select_auth_tab(&state, AuthTab::Register).unwrap();
        assert!(close_auth(&state, Dismissal::Backdrop).unwrap());
        assert!(!close_auth(&state, Dismissal::CloseButton).unwrap());
        assert_eq!(state.lock().unwrap().modals.auth_tab(), AuthTab::Register);
    }
}
