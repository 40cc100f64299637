//! Client-side form validation.
//!
//! All inputs are trimmed before checking. Lengths are counted in characters,
//! not bytes.

use crate::constants::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
use crate::error::{FieldError, RegistrationErrors, ValidationError};

/// Trimmed login form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

/// Trimmed registration form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(username: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
            confirm_password: confirm_password.trim().to_string(),
        }
    }

    /// Check every rule. A later failing rule on the same field replaces the
    /// earlier message, so at most one message per field is reported.
    pub fn validate(&self, username_taken: bool) -> Result<(), ValidationError> {
        let mut errors = RegistrationErrors::default();

        if self.username.chars().count() < MIN_USERNAME_LEN {
            errors.username = Some(FieldError::UsernameTooShort(MIN_USERNAME_LEN).to_string());
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.password = Some(FieldError::PasswordTooShort(MIN_PASSWORD_LEN).to_string());
        }

        if self.password != self.confirm_password {
            errors.password = Some(FieldError::PasswordMismatch.to_string());
        }

        if username_taken {
            errors.username = Some(FieldError::UsernameTaken.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Registration(errors))
        }
    }
}

/// Trimmed contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingContactFields);
        }
        Ok(())
    }

    /// Acknowledgement shown after the (simulated) send.
    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent. We'll get back to you at {} soon.",
            self.name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration_errors(result: Result<(), ValidationError>) -> RegistrationErrors {
        match result {
            Err(ValidationError::Registration(errors)) => errors,
            other => panic!("expected registration errors, got {other:?}"),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(LoginForm::new("alice", "secret1").validate().is_ok());
        assert_eq!(
            LoginForm::new("  ", "secret1").validate(),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            LoginForm::new("alice", "   ").validate(),
            Err(ValidationError::MissingCredentials)
        );
    }

    #[test]
    fn registration_accepts_valid_input() {
        let form = RegistrationForm::new(" bob ", "hunter22", "hunter22");
        assert_eq!(form.username, "bob");
        assert!(form.validate(false).is_ok());
    }

    #[test]
    fn registration_reports_short_fields() {
        let errors = registration_errors(RegistrationForm::new("al", "abc", "abc").validate(false));
        assert_eq!(
            errors.username.as_deref(),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn mismatch_overrides_short_password_message() {
        let errors = registration_errors(RegistrationForm::new("carol", "abc", "abd").validate(false));
        assert_eq!(errors.username, None);
        assert_eq!(errors.password.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn taken_username_fails_regardless_of_password() {
        let errors =
            registration_errors(RegistrationForm::new("dave", "longenough", "longenough").validate(true));
        assert_eq!(errors.username.as_deref(), Some("Username already exists"));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn lengths_count_characters() {
        // three multi-byte characters
        assert!(RegistrationForm::new("äöü", "ßßßßßß", "ßßßßßß").validate(false).is_ok());
    }

    #[test]
    fn contact_form_requires_every_field() {
        let form = ContactForm::new("Eve", "eve@example.com", "hi");
        assert!(form.validate().is_ok());
        assert_eq!(
            form.acknowledgement(),
            "Thank you, Eve! Your message has been sent. We'll get back to you at eve@example.com soon."
        );
        assert_eq!(
            ContactForm::new("Eve", "", "hi").validate(),
            Err(ValidationError::MissingContactFields)
        );
    }
}
