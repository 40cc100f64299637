//! UI events.
//!
//! Each line typed into the shell is parsed into a [`UiEvent`] and
//! dispatched to the matching command handler.

use std::sync::Mutex;

use codecrafts_shared::{AuthTab, CourseId, Panel};
use thiserror::Error;

use crate::commands;
use crate::modals::Dismissal;
use crate::state::AppState;

pub const HELP: &str = "\
Commands:
  nav <landing|courses|dashboard|profile|contact>
  start                          open the course catalog
  theme                          toggle light/dark
  sidebar                        toggle the navigation sidebar
  outside                        click outside the sidebar
  auth                           open the login dialog
  tab <login|register>           switch dialog tab
  login <username> <password>
  register <username> <password> <confirm>
  logout
  enroll <id>
  details <id>
  complete <id>
  edit-profile
  contact <name> <email> <message...>
  ok | close | backdrop          dismiss dialogs
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Navigate(Panel),
    StartLearning,
    ToggleTheme,
    ToggleSidebar,
    ClickOutside,
    ShowAuth,
    SelectTab(AuthTab),
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
        confirm_password: String,
    },
    Logout,
    Enroll(CourseId),
    Details(CourseId),
    Complete(CourseId),
    EditProfile,
    Contact {
        name: String,
        email: String,
        message: String,
    },
    Dismiss(Dismissal),
    Help,
    Quit,
}

impl UiEvent {
    /// Short name for logging. Never includes field values.
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Navigate(_) => "navigate",
            UiEvent::StartLearning => "start_learning",
            UiEvent::ToggleTheme => "toggle_theme",
            UiEvent::ToggleSidebar => "toggle_sidebar",
            UiEvent::ClickOutside => "click_outside",
            UiEvent::ShowAuth => "show_auth",
            UiEvent::SelectTab(_) => "select_tab",
            UiEvent::Login { .. } => "login",
            UiEvent::Register { .. } => "register",
            UiEvent::Logout => "logout",
            UiEvent::Enroll(_) => "enroll",
            UiEvent::Details(_) => "details",
            UiEvent::Complete(_) => "complete",
            UiEvent::EditProfile => "edit_profile",
            UiEvent::Contact { .. } => "contact",
            UiEvent::Dismiss(_) => "dismiss",
            UiEvent::Help => "help",
            UiEvent::Quit => "quit",
        }
    }
}

/// What the shell should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Render the new frame.
    Render,
    /// Print the help text instead of a frame.
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseError(pub String);

fn usage(text: &str) -> ParseError {
    ParseError(format!("usage: {text}"))
}

fn course_arg(arg: Option<&str>, command: &str) -> Result<CourseId, ParseError> {
    arg.and_then(CourseId::parse)
        .ok_or_else(|| usage(&format!("{command} <course id>")))
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Arguments are whitespace separated; the contact message takes the rest of
/// the line. Missing login/register arguments are passed through empty so
/// validation can report them.
pub fn parse_line(line: &str) -> Result<Option<UiEvent>, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };

    let event = match command {
        "nav" => {
            let name = parts.next().unwrap_or_default();
            let panel = Panel::from_fragment(name)
                .ok_or_else(|| usage("nav <landing|courses|dashboard|profile|contact>"))?;
            UiEvent::Navigate(panel)
        }
        "start" => UiEvent::StartLearning,
        "theme" => UiEvent::ToggleTheme,
        "sidebar" => UiEvent::ToggleSidebar,
        "outside" => UiEvent::ClickOutside,
        "auth" => UiEvent::ShowAuth,
        "tab" => {
            let tab = parts
                .next()
                .and_then(AuthTab::parse)
                .ok_or_else(|| usage("tab <login|register>"))?;
            UiEvent::SelectTab(tab)
        }
        "login" => UiEvent::Login {
            username: parts.next().unwrap_or_default().to_string(),
            password: parts.next().unwrap_or_default().to_string(),
        },
        "register" => UiEvent::Register {
            username: parts.next().unwrap_or_default().to_string(),
            password: parts.next().unwrap_or_default().to_string(),
            confirm_password: parts.next().unwrap_or_default().to_string(),
        },
        "logout" => UiEvent::Logout,
        "enroll" => UiEvent::Enroll(course_arg(parts.next(), "enroll")?),
        "details" => UiEvent::Details(course_arg(parts.next(), "details")?),
        "complete" => UiEvent::Complete(course_arg(parts.next(), "complete")?),
        "edit-profile" => UiEvent::EditProfile,
        "contact" => {
            let name = parts.next().unwrap_or_default().to_string();
            let email = parts.next().unwrap_or_default().to_string();
            let message = parts.collect::<Vec<_>>().join(" ");
            UiEvent::Contact {
                name,
                email,
                message,
            }
        }
        "ok" => UiEvent::Dismiss(Dismissal::Ok),
        "close" => UiEvent::Dismiss(Dismissal::CloseButton),
        "backdrop" => UiEvent::Dismiss(Dismissal::Backdrop),
        "help" | "?" => UiEvent::Help,
        "quit" | "exit" => UiEvent::Quit,
        other => return Err(ParseError(format!("unknown command: {other} (try help)"))),
    };
    Ok(Some(event))
}

/// Apply one event to the shared state.
pub fn dispatch(state: &Mutex<AppState>, event: UiEvent) -> Result<Flow, String> {
    tracing::debug!(event = event.kind(), "dispatch");
    match event {
        UiEvent::Navigate(panel) => {
            commands::navigation::navigate(state, panel)?;
        }
        UiEvent::StartLearning => {
            commands::navigation::start_learning(state)?;
        }
        UiEvent::ToggleTheme => {
            commands::settings::toggle_theme(state)?;
        }
        UiEvent::ToggleSidebar => {
            commands::navigation::toggle_sidebar(state)?;
        }
        UiEvent::ClickOutside => {
            commands::navigation::dismiss_sidebar(state)?;
        }
        UiEvent::ShowAuth => commands::auth::show_auth(state)?,
        UiEvent::SelectTab(tab) => commands::auth::select_auth_tab(state, tab)?,
        UiEvent::Login { username, password } => {
            commands::auth::login(state, &username, &password)?;
        }
        UiEvent::Register {
            username,
            password,
            confirm_password,
        } => {
            commands::auth::register(state, &username, &password, &confirm_password)?;
        }
        UiEvent::Logout => commands::auth::logout(state)?,
        UiEvent::Enroll(id) => commands::courses::enroll(state, id)?,
        UiEvent::Details(id) => commands::courses::details(state, id)?,
        UiEvent::Complete(id) => commands::dashboard::mark_complete(state, id)?,
        UiEvent::EditProfile => commands::profile::edit_profile(state)?,
        UiEvent::Contact {
            name,
            email,
            message,
        } => {
            commands::contact::submit_contact(state, &name, &email, &message)?;
        }
        UiEvent::Dismiss(Dismissal::Ok) => {
            commands::overlays::close_notice(state)?;
        }
        UiEvent::Dismiss(how) => {
            commands::overlays::dismiss_top(state, how)?;
        }
        UiEvent::Help => return Ok(Flow::Help),
        UiEvent::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    #[test]
    fn parses_navigation() {
        assert_eq!(
            parse_line("nav dashboard").unwrap(),
            Some(UiEvent::Navigate(Panel::Dashboard))
        );
        assert_eq!(
            parse_line("nav #profile").unwrap(),
            Some(UiEvent::Navigate(Panel::Profile))
        );
        assert!(parse_line("nav settings").is_err());
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn parses_course_ids() {
        assert_eq!(
            parse_line("enroll 4").unwrap(),
            Some(UiEvent::Enroll(CourseId(4)))
        );
        assert!(parse_line("complete x").is_err());
        assert!(parse_line("details").is_err());
    }

    #[test]
    fn contact_message_takes_rest_of_line() {
        assert_eq!(
            parse_line("contact Ann ann@example.com I have   a question").unwrap(),
            Some(UiEvent::Contact {
                name: "Ann".into(),
                email: "ann@example.com".into(),
                message: "I have a question".into(),
            })
        );
    }

    #[test]
    fn missing_login_fields_reach_validation() {
        let event = parse_line("login alice").unwrap().unwrap();
        let state = test_state();
        assert_eq!(dispatch(&state, event).unwrap(), Flow::Render);
        assert_eq!(
            state.lock().unwrap().modals.notice(),
            Some("Please enter both username and password")
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse_line("dance").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[test]
    fn session_walkthrough() {
        let state = test_state();
        let script = [
            "register alice secret1 secret1",
            "ok",
            "nav courses",
            "enroll 1",
            "enroll 2",
            "ok",
            "nav dashboard",
            "complete 1",
            "ok",
        ];
        for line in script {
            let event = parse_line(line).unwrap().unwrap();
            assert_eq!(dispatch(&state, event).unwrap(), Flow::Render);
        }

        let guard = state.lock().unwrap();
        assert_eq!(guard.panels.active(), Panel::Dashboard);
        assert!(guard.modals.notice().is_none());
        let user = guard.current_user().unwrap().unwrap();
        assert_eq!(user.registered_courses, vec![CourseId(1), CourseId(2)]);
        assert_eq!(user.completed_courses, vec![CourseId(1)]);
    }

    #[test]
    fn help_and_quit_flow() {
        let state = test_state();
        assert_eq!(dispatch(&state, UiEvent::Help).unwrap(), Flow::Help);
        assert_eq!(dispatch(&state, UiEvent::Quit).unwrap(), Flow::Quit);
    }
}
