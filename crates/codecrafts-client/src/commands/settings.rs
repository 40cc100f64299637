use std::sync::Mutex;

use codecrafts_shared::Theme;
use codecrafts_store::preferences;
use tracing::info;

use super::{lock, store_err};
use crate::state::AppState;

/// Flip between light and dark and persist the choice.
pub fn toggle_theme(state: &Mutex<AppState>) -> Result<Theme, String> {
    let mut guard = lock(state)?;
    let theme = guard.theme.toggled();
    preferences::save_theme(guard.store.as_ref(), theme).map_err(store_err)?;
    guard.theme = theme;
    info!(theme = theme.as_str(), "theme changed");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    #[test]
    fn toggle_persists() {
        let state = test_state();
        assert_eq!(toggle_theme(&state).unwrap(), Theme::Dark);
        {
            let guard = state.lock().unwrap();
            assert_eq!(preferences::load_theme(guard.store.as_ref()).unwrap(), Theme::Dark);
        }
        assert_eq!(toggle_theme(&state).unwrap(), Theme::Light);
        let guard = state.lock().unwrap();
        assert_eq!(preferences::load_theme(guard.store.as_ref()).unwrap(), Theme::Light);
    }
}
