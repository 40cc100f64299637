use codecrafts_shared::constants::KEY_THEME;
use codecrafts_shared::Theme;

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Saved theme, falling back to light for an absent or unknown value.
pub fn load_theme(store: &dyn KeyValueStore) -> Result<Theme> {
    let saved = store.get_string(KEY_THEME)?;
    Ok(saved.as_deref().and_then(Theme::parse).unwrap_or_default())
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
    store.set_string(KEY_THEME, theme.as_str())
}
