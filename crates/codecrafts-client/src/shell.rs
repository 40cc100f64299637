//! Interactive terminal loop.
//!
//! Reads one command per line, dispatches it, and writes the rendered frame.
//! A one-shot timer task may open the login dialog after start-up; it
//! notifies the loop through a channel so the frame is redrawn.

use std::borrow::Cow;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::commands;
use crate::events::{self, Flow, HELP};
use crate::render::Renderer;
use crate::state::AppState;
use crate::views::build_frame;

/// Messages from background tasks to the input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellNotification {
    /// State changed outside the input loop; draw a new frame.
    Redraw,
}

/// Show the login dialog after `delay` unless someone has logged in by then.
pub fn spawn_auth_prompt(
    state: Arc<Mutex<AppState>>,
    delay: Duration,
    notify: mpsc::Sender<ShellNotification>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match commands::auth::prompt_if_guest(&state) {
            Ok(true) => {
                let _ = notify.send(ShellNotification::Redraw).await;
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Delayed login prompt failed"),
        }
    })
}

pub struct Shell<W> {
    state: Arc<Mutex<AppState>>,
    renderer: Box<dyn Renderer>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(state: Arc<Mutex<AppState>>, renderer: Box<dyn Renderer>, out: W) -> Self {
        Self {
            state,
            renderer,
            out,
        }
    }

    /// Render the current state to the output.
    pub fn draw(&mut self) -> anyhow::Result<()> {
        let frame = {
            let guard = commands::lock(&self.state).map_err(anyhow::Error::msg)?;
            build_frame(&guard, Utc::now())?
        };
        let text = self.renderer.render(&frame)?;
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle one input line. Returns `false` when the shell should exit.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let event = match events::parse_line(line) {
            Ok(Some(event)) => event,
            Ok(None) => return Ok(true),
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(true);
            }
        };

        match events::dispatch(&self.state, event).map_err(anyhow::Error::msg)? {
            Flow::Render => self.draw()?,
            Flow::Help => writeln!(self.out, "{HELP}")?,
            Flow::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Draw the first frame, then process input until EOF or `quit`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the
    /// session.
    pub async fn run<R>(
        &mut self,
        mut input: R,
        mut notifications: mpsc::Receiver<ShellNotification>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.draw()?;
        // kept across iterations so a read cancelled by `select!` loses nothing
        let mut buf = Vec::new();
        let mut notifications_open = true;

        loop {
            tokio::select! {
                read = input.read_until(b'\n', &mut buf) => {
                    if read? == 0 {
                        debug!("input closed");
                        break;
                    }
                    let raw = String::from_utf8_lossy(&buf);
                    if matches!(raw, Cow::Owned(_)) {
                        warn!("input line was not valid UTF-8");
                    }
                    let line = raw.trim_end_matches(['\r', '\n']).to_string();
                    buf.clear();
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                notification = notifications.recv(), if notifications_open => {
                    match notification {
                        Some(ShellNotification::Redraw) => self.draw()?,
                        None => notifications_open = false,
                    }
                }
            }
        }

        info!("shell exiting");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RendererKind;
    use codecrafts_shared::Panel;
    use codecrafts_store::MemoryStore;

    fn shared_state() -> Arc<Mutex<AppState>> {
        Arc::new(Mutex::new(AppState::new(Box::new(MemoryStore::new()))))
    }

    #[tokio::test]
    async fn scripted_session_renders_frames() {
        let state = shared_state();
        let mut shell = Shell::new(state.clone(), RendererKind::Text.build(), Vec::new());
        let (_tx, rx) = mpsc::channel(1);

        let input: &[u8] = b"register alice secret1 secret1\nok\nstart\nenroll 2\nbogus\nquit\nnav profile\n";
        shell.run(input, rx).await.unwrap();

        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains("Account created successfully! Welcome, alice"));
        assert!(out.contains("Successfully registered for \"Python Programming\"!"));
        assert!(out.contains("unknown command: bogus"));

        // quit stops before the last line
        assert_eq!(state.lock().unwrap().panels.active(), Panel::Courses);
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped() {
        let state = shared_state();
        let mut shell = Shell::new(state.clone(), RendererKind::Text.build(), Vec::new());
        let (_tx, rx) = mpsc::channel(1);

        let input: &[u8] = b"nav courses\n\xff\xfe\nnav dashboard\n";
        shell.run(input, rx).await.unwrap();

        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains("unknown command: \u{fffd}\u{fffd}"));
        assert_eq!(state.lock().unwrap().panels.active(), Panel::Dashboard);
    }

    #[tokio::test]
    async fn auth_prompt_fires_for_guests() {
        let state = shared_state();
        let (tx, mut rx) = mpsc::channel(1);

        spawn_auth_prompt(state.clone(), Duration::ZERO, tx)
            .await
            .unwrap();

        assert_eq!(rx.recv().await, Some(ShellNotification::Redraw));
        assert!(state.lock().unwrap().modals.auth_visible());
    }

    #[tokio::test]
    async fn auth_prompt_skipped_when_logged_in() {
        let state = shared_state();
        {
            let guard = state.lock().unwrap();
            guard.directory().register("alice", "secret1").unwrap();
            guard.session().login("alice").unwrap();
        }
        let (tx, mut rx) = mpsc::channel(1);

        spawn_auth_prompt(state.clone(), Duration::ZERO, tx)
            .await
            .unwrap();

        assert_eq!(rx.recv().await, None);
        assert!(!state.lock().unwrap().modals.auth_visible());
    }

    #[test]
    fn help_prints_usage() {
        let mut shell = Shell::new(shared_state(), RendererKind::Text.build(), Vec::new());
        assert!(shell.handle_line("help").unwrap());
        assert!(!shell.handle_line("quit").unwrap());
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains("register <username> <password> <confirm>"));
    }
}
