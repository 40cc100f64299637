use serde::Serialize;
use thiserror::Error;

/// Form-level validation failures surfaced to the user as a notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both username and password")]
    MissingCredentials,

    #[error("Please fill in all fields")]
    MissingContactFields,

    #[error("Registration form has errors")]
    Registration(RegistrationErrors),
}

/// Per-field messages shown under the registration form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username already exists")]
    UsernameTaken,
}
