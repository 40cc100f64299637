pub mod commands;
pub mod config;
pub mod events;
pub mod modals;
pub mod panels;
pub mod render;
pub mod shell;
pub mod state;
pub mod views;

use std::sync::{Arc, Mutex};

use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ClientConfig;
use crate::shell::{spawn_auth_prompt, Shell};
use crate::state::AppState;

/// Install the global tracing subscriber. Logs go to stderr so they never
/// mix with rendered frames on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("codecrafts_client_lib=debug,codecrafts_client=debug,codecrafts_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Open the store, restore the saved UI state and run the shell on
/// stdin/stdout until EOF or `quit`.
pub async fn run(config: ClientConfig) -> anyhow::Result<()> {
    tracing::info!(renderer = ?config.renderer, "Starting CodeCrafts");

    let store = config.open_store()?;
    let state = AppState::from_config(store, &config)?;
    let state = Arc::new(Mutex::new(state));

    let (notify_tx, notify_rx) = mpsc::channel(4);
    let prompt = spawn_auth_prompt(state.clone(), config.auth_prompt_delay, notify_tx);

    let mut shell = Shell::new(state, config.renderer.build(), std::io::stdout());
    let result = shell
        .run(BufReader::new(tokio::io::stdin()), notify_rx)
        .await;

    prompt.abort();
    result
}
