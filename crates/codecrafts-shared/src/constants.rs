/// Application name
pub const APP_NAME: &str = "CodeCrafts";

/// Store key holding the JSON-encoded user list
pub const KEY_USERS: &str = "users";

/// Store key holding the logged-in username
pub const KEY_CURRENT_USER: &str = "currentUser";

/// Store key holding the UI theme (`light` / `dark`)
pub const KEY_THEME: &str = "theme";

/// Minimum username length in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Delay before the login prompt appears on first load without a session
pub const AUTH_PROMPT_DELAY_MS: u64 = 1000;

/// Viewport width at or below which the sidebar behaves as an overlay
pub const COMPACT_LAYOUT_MAX_WIDTH: u32 = 768;

/// Progress ring track colours
pub const RING_TRACK_LIGHT: &str = "#e0e0e0";
pub const RING_TRACK_DARK: &str = "#2d3748";
