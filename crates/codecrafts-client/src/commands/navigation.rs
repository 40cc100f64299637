use std::sync::Mutex;

use codecrafts_shared::Panel;

use super::lock;
use crate::state::AppState;

/// Activate `panel`. In compact layout an expanded sidebar collapses.
pub fn navigate(state: &Mutex<AppState>, panel: Panel) -> Result<Panel, String> {
    let mut guard = lock(state)?;
    let previous = guard.panels.activate(panel);
    if guard.compact_layout {
        guard.sidebar_expanded = false;
    }
    Ok(previous)
}

/// The landing page's call to action.
pub fn start_learning(state: &Mutex<AppState>) -> Result<Panel, String> {
    navigate(state, Panel::Courses)
}

pub fn toggle_sidebar(state: &Mutex<AppState>) -> Result<bool, String> {
    let mut guard = lock(state)?;
    guard.sidebar_expanded = !guard.sidebar_expanded;
    Ok(guard.sidebar_expanded)
}

/// A click outside the sidebar. Only collapses it in compact layout.
pub fn dismiss_sidebar(state: &Mutex<AppState>) -> Result<bool, String> {
    let mut guard = lock(state)?;
    if guard.compact_layout && guard.sidebar_expanded {
        guard.sidebar_expanded = false;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    #[test]
    fn start_learning_opens_courses() {
        let state = test_state();
        assert_eq!(start_learning(&state).unwrap(), Panel::Landing);
        assert_eq!(state.lock().unwrap().panels.active(), Panel::Courses);
    }

    #[test]
    fn wide_layout_keeps_sidebar_open() {
        let state = test_state();
        toggle_sidebar(&state).unwrap();
        navigate(&state, Panel::Profile).unwrap();
        assert!(!dismiss_sidebar(&state).unwrap());
        assert!(state.lock().unwrap().sidebar_expanded);
    }

    #[test]
    fn compact_layout_collapses_sidebar() {
        let state = test_state();
        state.lock().unwrap().compact_layout = true;

        assert!(toggle_sidebar(&state).unwrap());
        navigate(&state, Panel::Dashboard).unwrap();
        assert!(!state.lock().unwrap().sidebar_expanded);

        toggle_sidebar(&state).unwrap();
        assert!(dismiss_sidebar(&state).unwrap());
        assert!(!dismiss_sidebar(&state).unwrap());
    }
}
