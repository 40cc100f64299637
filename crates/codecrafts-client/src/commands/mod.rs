//! Command handlers.
//!
//! Each sub-module groups the handlers for one area of the page. Every
//! handler takes the shared [`AppState`] mutex, applies one user action and
//! leaves the outcome in the state for the next render. User-facing
//! failures become notices; `Err` is reserved for lock poisoning and store
//! failures.

use std::sync::{Mutex, MutexGuard};

use crate::state::AppState;

pub mod auth;
pub mod contact;
pub mod courses;
pub mod dashboard;
pub mod navigation;
pub mod overlays;
pub mod profile;
pub mod settings;

pub(crate) fn lock(state: &Mutex<AppState>) -> Result<MutexGuard<'_, AppState>, String> {
    state.lock().map_err(|e| format!("Lock poisoned: {e}"))
}

pub(crate) fn store_err(e: codecrafts_store::StoreError) -> String {
    format!("Store error: {e}")
}

#[cfg(test)]
pub(crate) fn test_state() -> Mutex<AppState> {
    Mutex::new(AppState::new(Box::new(codecrafts_store::MemoryStore::new())))
}

/// Registered and logged-in state for `username`.
#[cfg(test)]
pub(crate) fn logged_in_state(username: &str) -> Mutex<AppState> {
    let state = test_state();
    {
        let guard = lock(&state).unwrap();
        guard.directory().register(username, "secret1").unwrap();
        guard.session().login(username).unwrap();
    }
    state
}

#[cfg(test)]
#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
#[cfg(test)]
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = CapturedLogs::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&captured.0.lock().unwrap()).into_owned();
    (out, logs)
}
