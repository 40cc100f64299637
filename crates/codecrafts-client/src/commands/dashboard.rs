use std::sync::Mutex;

use codecrafts_shared::CourseId;
use codecrafts_store::{LedgerUpdate, StoreError};

use super::{lock, store_err};
use crate::state::AppState;

/// Record a completion for the current user. Enrollment is not required.
pub fn mark_complete(state: &Mutex<AppState>, course_id: CourseId) -> Result<(), String> {
    let mut guard = lock(state)?;

    let Some(user) = guard.current_user().map_err(store_err)? else {
        guard.modals.show_auth();
        return Ok(());
    };

    let notice = match guard.directory().mark_complete(&user.username, course_id) {
        Ok(LedgerUpdate::Applied) => "Course marked as complete!",
        Ok(LedgerUpdate::AlreadyPresent) => "Course already marked as complete",
        Err(StoreError::UserNotFound(_)) => "User not found",
        Err(e) => return Err(store_err(e)),
    };
    guard.modals.show_notice(notice);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::courses::enroll;
    use crate::commands::{logged_in_state, test_state};
    use crate::views::completion_percent;

    #[test]
    fn guest_is_prompted() {
        let state = test_state();
        mark_complete(&state, CourseId(1)).unwrap();
        assert!(state.lock().unwrap().modals.auth_visible());
    }

    #[test]
    fn complete_then_duplicate() {
        let state = logged_in_state("alice");
        for id in 1..=4 {
            enroll(&state, CourseId(id)).unwrap();
        }

        mark_complete(&state, CourseId(2)).unwrap();
        assert_eq!(
            state.lock().unwrap().modals.notice(),
            Some("Course marked as complete!")
        );
        mark_complete(&state, CourseId(2)).unwrap();
        assert_eq!(
            state.lock().unwrap().modals.notice(),
            Some("Course already marked as complete")
        );

        let user = state.lock().unwrap().current_user().unwrap().unwrap();
        assert_eq!(user.completed_courses, vec![CourseId(2)]);
        assert_eq!(
            completion_percent(user.completed_courses.len(), user.registered_courses.len()),
            25
        );
    }

    #[test]
    fn completion_without_enrollment_is_accepted() {
        let state = logged_in_state("alice");
        mark_complete(&state, CourseId(7)).unwrap();
        let user = state.lock().unwrap().current_user().unwrap().unwrap();
        assert!(user.registered_courses.is_empty());
        assert_eq!(user.completed_courses, vec![CourseId(7)]);
    }
}
