//! # codecrafts-shared
//!
//! Reference data and pure domain rules shared by the store and client
//! crates: the static course catalog, panel/theme types, form validation
//! and the store key names.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod types;
pub mod validation;

pub use catalog::CourseDescriptor;
pub use error::{RegistrationErrors, ValidationError};
pub use types::{AuthTab, CourseId, Panel, Theme};
