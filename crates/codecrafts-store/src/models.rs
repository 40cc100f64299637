//! Domain records persisted through the key-value store.
//!
//! Field names on the wire follow the stored JSON format (`createdAt`,
//! `registeredCourses`, `completedCourses`) so existing data keeps loading.

use chrono::{DateTime, Utc};
use codecrafts_shared::CourseId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered account together with its enrollment ledger.
///
/// The password is kept in plaintext and compared verbatim. This matches the
/// stored format and is only acceptable for a local demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique key, case-sensitive.
    pub username: String,
    pub password: String,
    /// Absent in records written by older builds.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Enrolled course ids, in enrollment order.
    #[serde(default, alias = "registeredCourseIds")]
    pub registered_courses: Vec<CourseId>,
    /// Completed course ids, in completion order. Not required to be a
    /// subset of `registered_courses`.
    #[serde(default, alias = "completedCourseIds")]
    pub completed_courses: Vec<CourseId>,
}

impl UserRecord {
    /// A fresh record with empty ledgers, stamped now.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            created_at: Some(Utc::now()),
            registered_courses: Vec::new(),
            completed_courses: Vec::new(),
        }
    }

    pub fn is_registered(&self, course_id: CourseId) -> bool {
        self.registered_courses.contains(&course_id)
    }

    pub fn is_completed(&self, course_id: CourseId) -> bool {
        self.completed_courses.contains(&course_id)
    }
}

/// Result of an enrollment-ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerUpdate {
    /// The id was appended and the directory persisted.
    Applied,
    /// The id was already present; nothing was written.
    AlreadyPresent,
}
