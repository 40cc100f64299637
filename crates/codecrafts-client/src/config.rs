//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the shell can start with zero
//! configuration.

use std::path::PathBuf;
use std::time::Duration;

use codecrafts_shared::constants::{AUTH_PROMPT_DELAY_MS, COMPACT_LAYOUT_MAX_WIDTH};
use codecrafts_store::{Database, KeyValueStore, MemoryStore, StoreError};

use crate::render::RendererKind;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit database file.
    /// Env: `CODECRAFTS_DB_PATH`
    /// Default: platform data directory.
    pub db_path: Option<PathBuf>,

    /// Keep everything in memory and forget it on exit.
    /// Env: `CODECRAFTS_EPHEMERAL` (true/false)
    /// Default: `false`
    pub ephemeral: bool,

    /// Address fragment selecting the initial panel, e.g. `#dashboard`.
    /// Env: `CODECRAFTS_START_PANEL`
    /// Default: none (landing panel).
    pub start_fragment: Option<String>,

    /// Delay before the login prompt appears when nobody is logged in.
    /// Env: `CODECRAFTS_AUTH_PROMPT_DELAY_MS`
    /// Default: 1000 ms.
    pub auth_prompt_delay: Duration,

    /// Output adapter for rendered frames.
    /// Env: `CODECRAFTS_RENDERER` (text/html/json)
    /// Default: `text`
    pub renderer: RendererKind,

    /// Width used to decide whether the sidebar behaves as an overlay.
    /// Env: `CODECRAFTS_VIEWPORT_WIDTH`
    /// Default: `1280`
    pub viewport_width: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            ephemeral: false,
            start_fragment: None,
            auth_prompt_delay: Duration::from_millis(AUTH_PROMPT_DELAY_MS),
            renderer: RendererKind::Text,
            viewport_width: 1280,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("CODECRAFTS_DB_PATH") {
            if !path.is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Some(val) = lookup("CODECRAFTS_EPHEMERAL") {
            match val.as_str() {
                "true" | "1" => config.ephemeral = true,
                "false" | "0" => config.ephemeral = false,
                _ => {
                    tracing::warn!(value = %val, "Invalid CODECRAFTS_EPHEMERAL, using default");
                }
            }
        }

        if let Some(fragment) = lookup("CODECRAFTS_START_PANEL") {
            if !fragment.is_empty() {
                config.start_fragment = Some(fragment);
            }
        }

        if let Some(val) = lookup("CODECRAFTS_AUTH_PROMPT_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.auth_prompt_delay = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(
                        value = %val,
                        "Invalid CODECRAFTS_AUTH_PROMPT_DELAY_MS, using default"
                    );
                }
            }
        }

        if let Some(val) = lookup("CODECRAFTS_RENDERER") {
            match RendererKind::parse(&val) {
                Some(kind) => config.renderer = kind,
                None => {
                    tracing::warn!(value = %val, "Unknown CODECRAFTS_RENDERER, using text");
                }
            }
        }

        if let Some(val) = lookup("CODECRAFTS_VIEWPORT_WIDTH") {
            match val.parse::<u32>() {
                Ok(width) => config.viewport_width = width,
                Err(_) => {
                    tracing::warn!(
                        value = %val,
                        "Invalid CODECRAFTS_VIEWPORT_WIDTH, using default"
                    );
                }
            }
        }

        config
    }

    /// Whether the sidebar collapses after navigation and on outside clicks.
    pub fn compact_layout(&self) -> bool {
        self.viewport_width <= COMPACT_LAYOUT_MAX_WIDTH
    }

    /// Open the configured storage backend.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>, StoreError> {
        if self.ephemeral {
            tracing::info!("using ephemeral in-memory store");
            return Ok(Box::new(MemoryStore::new()));
        }

        let db = match &self.db_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "opening database");
                Database::open_at(path)?
            }
            None => Database::new()?,
        };
        Ok(Box::new(db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::capture_logs;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.auth_prompt_delay, Duration::from_millis(1000));
        assert_eq!(config.renderer, RendererKind::Text);
        assert!(!config.compact_layout());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CODECRAFTS_EPHEMERAL", "1"),
            ("CODECRAFTS_START_PANEL", "#profile"),
            ("CODECRAFTS_AUTH_PROMPT_DELAY_MS", "0"),
            ("CODECRAFTS_RENDERER", "html"),
            ("CODECRAFTS_VIEWPORT_WIDTH", "768"),
        ]);
        assert!(config.ephemeral);
        assert_eq!(config.start_fragment.as_deref(), Some("#profile"));
        assert_eq!(config.auth_prompt_delay, Duration::ZERO);
        assert_eq!(config.renderer, RendererKind::Html);
        assert!(config.compact_layout());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("CODECRAFTS_AUTH_PROMPT_DELAY_MS", "soon"),
            ("CODECRAFTS_RENDERER", "pdf"),
            ("CODECRAFTS_VIEWPORT_WIDTH", "wide"),
        ]);
        assert_eq!(config.auth_prompt_delay, Duration::from_millis(1000));
        assert_eq!(config.renderer, RendererKind::Text);
        assert_eq!(config.viewport_width, 1280);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let (config, logs) = capture_logs(|| {
            config_from(&[
                ("CODECRAFTS_EPHEMERAL", "yes"),
                ("CODECRAFTS_VIEWPORT_WIDTH", "wide"),
            ])
        });
        assert!(!config.ephemeral);
        assert_eq!(config.viewport_width, 1280);
        assert!(logs.contains("Invalid CODECRAFTS_EPHEMERAL, using default"));
        assert!(logs.contains("Invalid CODECRAFTS_VIEWPORT_WIDTH, using default"));
        assert!(logs.contains("value=wide"));
    }

    #[test]
    fn test_open_store_at_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            db_path: Some(dir.path().join("codecrafts.db")),
            ..Default::default()
        };

        let store = config.open_store().unwrap();
        store.set_string("theme", "dark").unwrap();
        assert_eq!(store.get_string("theme").unwrap().as_deref(), Some("dark"));
    }
}
