//! Overlay dialogs.
//!
//! The auth dialog and the notice dialog live outside the panel state
//! machine. Each is either shown or hidden, independently of the other.

use codecrafts_shared::{AuthTab, RegistrationErrors};

/// How the user asked an overlay to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The close (×) control.
    CloseButton,
    /// A click on the dimmed area around the dialog.
    Backdrop,
    /// The notice dialog's OK button.
    Ok,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    auth_visible: bool,
    auth_tab: AuthTab,
    registration_errors: RegistrationErrors,
    notice: Option<String>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth_visible(&self) -> bool {
        self.auth_visible
    }

    pub fn auth_tab(&self) -> AuthTab {
        self.auth_tab
    }

    pub fn registration_errors(&self) -> &RegistrationErrors {
        &self.registration_errors
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Show the auth dialog with cleared field errors. The selected tab is
    /// kept from the last time the dialog was open.
    pub fn show_auth(&mut self) {
        self.auth_visible = true;
        self.registration_errors = RegistrationErrors::default();
    }

    pub fn hide_auth(&mut self) {
        self.auth_visible = false;
    }

    pub fn select_tab(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
    }

    /// Put field errors under the registration form, opening it if needed.
    pub fn show_registration_errors(&mut self, errors: RegistrationErrors) {
        self.auth_visible = true;
        self.auth_tab = AuthTab::Register;
        self.registration_errors = errors;
    }

    pub fn clear_registration_errors(&mut self) {
        self.registration_errors = RegistrationErrors::default();
    }

    /// Replace any visible notice with `message`.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        tracing::debug!("notice shown");
    }

    pub fn hide_notice(&mut self) {
        self.notice = None;
    }

    /// Dismiss the auth dialog. Returns whether anything changed.
    pub fn dismiss_auth(&mut self, how: Dismissal) -> bool {
        match how {
            Dismissal::CloseButton | Dismissal::Backdrop if self.auth_visible => {
                self.hide_auth();
                true
            }
            _ => false,
        }
    }

    /// Dismiss the notice dialog by any of its controls. Returns whether
    /// anything changed.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_are_independent() {
        let mut modals = ModalState::new();
        modals.show_auth();
        modals.show_notice("Logged out successfully");
        assert!(modals.auth_visible());
        assert_eq!(modals.notice(), Some("Logged out successfully"));

        assert!(modals.dismiss_notice());
        assert!(modals.auth_visible());
        assert_eq!(modals.notice(), None);
    }

    #[test]
    fn only_one_notice_at_a_time() {
        let mut modals = ModalState::new();
        modals.show_notice("first");
        modals.show_notice("second");
        assert_eq!(modals.notice(), Some("second"));
    }

    #[test]
    fn auth_dismissed_by_close_or_backdrop() {
        let mut modals = ModalState::new();
        modals.show_auth();
        assert!(!modals.dismiss_auth(Dismissal::Ok));
        assert!(modals.dismiss_auth(Dismissal::Backdrop));
        assert!(!modals.auth_visible());
        assert!(!modals.dismiss_auth(Dismissal::CloseButton));
    }

    #[test]
    fn showing_auth_clears_field_errors_and_keeps_tab() {
        let mut modals = ModalState::new();
        modals.show_registration_errors(RegistrationErrors {
            username: Some("Username already exists".into()),
            password: None,
        });
        assert_eq!(modals.auth_tab(), AuthTab::Register);

        modals.hide_auth();
        modals.show_auth();
        assert!(modals.registration_errors().is_empty());
        assert_eq!(modals.auth_tab(), AuthTab::Register);
    }
}
