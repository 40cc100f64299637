use std::fmt::Write;

use super::Renderer;
use crate::views::{
    AuthView, CatalogView, ContactView, CourseList, DashboardView, Frame, LandingView, PanelView,
    ProfileView,
};
use codecrafts_shared::AuthTab;

/// Plain terminal output.
pub struct TextRenderer;

const RULE: &str = "────────────────────────────────────────";

impl Renderer for TextRenderer {
    fn render(&self, frame: &Frame) -> anyhow::Result<String> {
        let mut out = String::new();

        writeln!(
            out,
            "{} | {} | theme: {}",
            frame.header.app_name,
            frame.header.display_name,
            frame.theme.as_str()
        )?;

        let nav: Vec<String> = frame
            .nav
            .iter()
            .map(|link| {
                if link.active {
                    format!("[{}]", link.title)
                } else {
                    link.title.to_string()
                }
            })
            .collect();
        let sidebar = if frame.sidebar_expanded { "x" } else { "≡" };
        writeln!(out, "{sidebar} {}", nav.join("  "))?;
        writeln!(out, "{RULE}")?;

        match &frame.panel {
            PanelView::Landing(view) => landing(&mut out, view)?,
            PanelView::Courses(view) => courses(&mut out, view)?,
            PanelView::Dashboard(view) => dashboard(&mut out, view)?,
            PanelView::Profile(view) => profile(&mut out, view)?,
            PanelView::Contact(view) => contact(&mut out, view)?,
        }

        if let Some(auth) = &frame.auth {
            auth_dialog(&mut out, auth)?;
        }
        if let Some(notice) = &frame.notice {
            writeln!(out, "{RULE}")?;
            writeln!(out, "(!) {notice}  [ok]")?;
        }
        Ok(out)
    }
}

fn landing(out: &mut String, view: &LandingView) -> std::fmt::Result {
    writeln!(out, "{}", view.headline)?;
    writeln!(out, "> {} (start)", view.call_to_action)
}

fn courses(out: &mut String, view: &CatalogView) -> std::fmt::Result {
    for card in &view.cards {
        let marker = if card.enrolled { "*" } else { " " };
        writeln!(
            out,
            "{marker}{:>3}. {} | {} | {}",
            card.id, card.title, card.price, card.duration
        )?;
        writeln!(out, "      {}", card.description)?;
    }
    Ok(())
}

fn course_list(out: &mut String, heading: &str, list: &CourseList) -> std::fmt::Result {
    writeln!(out, "{heading}")?;
    match list {
        CourseList::LoginRequired { message } => writeln!(out, "  {message}"),
        CourseList::Empty {
            message,
            browse_link,
        } => {
            if *browse_link {
                writeln!(out, "  {message} Browse courses (nav courses)")
            } else {
                writeln!(out, "  {message}")
            }
        }
        CourseList::Items { items } => {
            for item in items {
                let action = if item.can_mark_complete {
                    format!("  [complete {}]", item.id)
                } else if item.completed {
                    "  ✓".to_string()
                } else {
                    String::new()
                };
                writeln!(out, "  {:>3}. {} ({}){action}", item.id, item.title, item.price)?;
            }
            Ok(())
        }
    }
}

fn dashboard(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    writeln!(
        out,
        "Enrolled: {}  Completed: {}  Progress: {}%",
        view.enrolled_count, view.completed_count, view.progress_percent
    )?;
    course_list(out, "Registered courses", &view.registered)?;
    course_list(out, "Completed courses", &view.completed)
}

fn profile(out: &mut String, view: &ProfileView) -> std::fmt::Result {
    writeln!(out, "{}", view.username)?;
    writeln!(out, "Member since: {}", view.member_since)?;
    writeln!(out, "Last login:   {}", view.last_login)?;
    writeln!(out, "Enrolled:     {}", view.enrolled)?;
    writeln!(out, "Completed:    {}", view.completed)?;
    writeln!(out, "In progress:  {}", view.in_progress)?;
    writeln!(out, "Progress:     {}% {}", view.progress_percent, bar(view.progress_percent))
}

fn contact(out: &mut String, view: &ContactView) -> std::fmt::Result {
    writeln!(out, "Contact us: contact <name> <email> <message>")?;
    if !view.name.is_empty() || !view.email.is_empty() || !view.message.is_empty() {
        writeln!(out, "  name:    {}", view.name)?;
        writeln!(out, "  email:   {}", view.email)?;
        writeln!(out, "  message: {}", view.message)?;
    }
    Ok(())
}

fn auth_dialog(out: &mut String, view: &AuthView) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    let (login, register) = match view.tab {
        AuthTab::Login => ("[Login]", "Register"),
        AuthTab::Register => ("Login", "[Register]"),
    };
    writeln!(out, "{login} {register}  [close]")?;
    match view.tab {
        AuthTab::Login => writeln!(out, "login <username> <password>")?,
        AuthTab::Register => {
            writeln!(out, "register <username> <password> <confirm>")?;
            if let Some(err) = &view.errors.username {
                writeln!(out, "  username: {err}")?;
            }
            if let Some(err) = &view.errors.password {
                writeln!(out, "  password: {err}")?;
            }
        }
    }
    Ok(())
}

/// Ten-cell bar; values above 100 fill it.
fn bar(percent: u32) -> String {
    let filled = (percent.min(100) / 10) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}
