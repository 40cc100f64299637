use std::sync::Mutex;

use codecrafts_shared::{catalog, CourseId};
use codecrafts_store::{LedgerUpdate, StoreError};

use super::{lock, store_err};
use crate::state::AppState;

/// Register the current user for a course. Guests get the login dialog.
pub fn enroll(state: &Mutex<AppState>, course_id: CourseId) -> Result<(), String> {
    let mut guard = lock(state)?;

    let Some(user) = guard.current_user().map_err(store_err)? else {
        guard.modals.show_auth();
        return Ok(());
    };

    let Some(course) = catalog::find_by_id(course_id) else {
        guard.modals.show_notice("Course not found");
        return Ok(());
    };

    let notice = match guard.directory().enroll(&user.username, course_id) {
        Ok(LedgerUpdate::Applied) => format!("Successfully registered for \"{}\"!", course.title),
        Ok(LedgerUpdate::AlreadyPresent) => {
            format!("You are already registered for \"{}\"", course.title)
        }
        Err(StoreError::UserNotFound(_)) => "User not found".to_string(),
        Err(e) => return Err(store_err(e)),
    };
    guard.modals.show_notice(notice);
    Ok(())
}

pub fn details(state: &Mutex<AppState>, course_id: CourseId) -> Result<(), String> {
    let mut guard = lock(state)?;
    match catalog::find_by_id(course_id) {
        Some(course) => guard.modals.show_notice(format!(
            "Details for \"{}\" would be displayed here.",
            course.title
        )),
        None => guard.modals.show_notice("Course not found"),
    }
    Ok(())
}
