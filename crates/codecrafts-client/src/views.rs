//! View models.
//!
//! Pure functions from (session user, catalog, ledger, theme) to plain
//! serializable structures. Nothing here touches a renderer or mutates
//! state; every call recomputes from the data it is given.

use chrono::{DateTime, Utc};
use codecrafts_shared::constants::{APP_NAME, RING_TRACK_DARK, RING_TRACK_LIGHT};
use codecrafts_shared::{catalog, AuthTab, CourseId, Panel, RegistrationErrors, Theme};
use codecrafts_store::{StoreError, UserRecord};
use serde::Serialize;

use crate::panels::NavLink;
use crate::state::AppState;

/// Everything visible on screen after one event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub theme: Theme,
    pub header: HeaderView,
    pub nav: Vec<NavLink>,
    pub sidebar_expanded: bool,
    pub panel: PanelView,
    pub auth: Option<AuthView>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub app_name: &'static str,
    pub display_name: String,
    pub logged_in: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum PanelView {
    Landing(LandingView),
    Courses(CatalogView),
    Dashboard(DashboardView),
    Profile(ProfileView),
    Contact(ContactView),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub headline: String,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub cards: Vec<CourseCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    pub id: CourseId,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
    pub enrolled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub enrolled_count: usize,
    pub completed_count: usize,
    pub progress_percent: u32,
    pub registered: CourseList,
    pub completed: CourseList,
}

/// A dashboard course list in one of its three presentations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CourseList {
    /// Guest: prompt to log in.
    LoginRequired { message: &'static str },
    /// Logged in but nothing to show.
    Empty {
        message: &'static str,
        #[serde(rename = "browseLink")]
        browse_link: bool,
    },
    Items { items: Vec<DashboardItem> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    pub id: CourseId,
    pub title: &'static str,
    pub price: &'static str,
    pub completed: bool,
    /// Offer the "Mark Complete" action.
    pub can_mark_complete: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub username: String,
    pub member_since: String,
    pub last_login: String,
    pub enrolled: String,
    pub completed: String,
    pub in_progress: String,
    pub progress_percent: u32,
    pub ring: ProgressRing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRing {
    pub percent: u32,
    pub track_color: &'static str,
    /// CSS background for the ring element.
    pub gradient: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthView {
    pub tab: AuthTab,
    pub errors: RegistrationErrors,
}

const NOT_AVAILABLE: &str = "Not available";

/// round(completed / registered × 100), or 0 with nothing registered.
///
/// Completed may exceed registered because the ledger does not enforce the
/// subset relation; the result is then above 100.
pub fn completion_percent(completed: usize, registered: usize) -> u32 {
    if registered == 0 {
        return 0;
    }
    ((completed as f64 / registered as f64) * 100.0).round() as u32
}

pub fn header_view(user: Option<&UserRecord>) -> HeaderView {
    HeaderView {
        app_name: APP_NAME,
        display_name: user.map_or_else(|| "Guest".to_string(), |u| u.username.clone()),
        logged_in: user.is_some(),
    }
}

pub fn landing_view(user: Option<&UserRecord>) -> LandingView {
    let headline = match user {
        Some(u) => format!("Welcome back to {APP_NAME}, {}", u.username),
        None => format!("Learn to code with {APP_NAME}"),
    };
    LandingView {
        headline,
        call_to_action: "Start Learning",
    }
}

pub fn catalog_view(user: Option<&UserRecord>) -> CatalogView {
    let cards = catalog::all()
        .iter()
        .map(|course| CourseCard {
            id: course.id,
            title: course.title,
            description: course.description,
            price: course.price,
            duration: course.duration,
            icon: course.icon,
            enrolled: user.is_some_and(|u| u.is_registered(course.id)),
        })
        .collect();
    CatalogView { cards }
}

pub fn dashboard_view(user: Option<&UserRecord>) -> DashboardView {
    let Some(user) = user else {
        return DashboardView {
            enrolled_count: 0,
            completed_count: 0,
            progress_percent: 0,
            registered: CourseList::LoginRequired {
                message: "Please login to view your registered courses",
            },
            completed: CourseList::LoginRequired {
                message: "Please login to view your completed courses",
            },
        };
    };

    let registered_ids = &user.registered_courses;
    let completed_ids = &user.completed_courses;

    let registered = if registered_ids.is_empty() {
        CourseList::Empty {
            message: "No courses registered yet.",
            browse_link: true,
        }
    } else {
        // ids missing from the catalog are skipped
        let items = registered_ids
            .iter()
            .filter_map(|id| catalog::find_by_id(*id))
            .map(|course| {
                let completed = user.is_completed(course.id);
                DashboardItem {
                    id: course.id,
                    title: course.title,
                    price: course.price,
                    completed,
                    can_mark_complete: !completed,
                }
            })
            .collect();
        CourseList::Items { items }
    };

    let completed = if completed_ids.is_empty() {
        CourseList::Empty {
            message: "No courses completed yet.",
            browse_link: false,
        }
    } else {
        let items = completed_ids
            .iter()
            .filter_map(|id| catalog::find_by_id(*id))
            .map(|course| DashboardItem {
                id: course.id,
                title: course.title,
                price: course.price,
                completed: true,
                can_mark_complete: false,
            })
            .collect();
        CourseList::Items { items }
    };

    DashboardView {
        enrolled_count: registered_ids.len(),
        completed_count: completed_ids.len(),
        progress_percent: completion_percent(completed_ids.len(), registered_ids.len()),
        registered,
        completed,
    }
}

pub fn progress_ring(percent: u32, theme: Theme) -> ProgressRing {
    let track_color = match theme {
        Theme::Light => RING_TRACK_LIGHT,
        Theme::Dark => RING_TRACK_DARK,
    };
    ProgressRing {
        percent,
        track_color,
        gradient: format!(
            "conic-gradient(var(--primary-color) 0% {percent}%, {track_color} {percent}% 100%)"
        ),
    }
}

/// `now` stands in for both the last-login time and a missing creation date.
pub fn profile_view(user: Option<&UserRecord>, theme: Theme, now: DateTime<Utc>) -> ProfileView {
    let Some(user) = user else {
        return ProfileView {
            username: "Guest User".to_string(),
            member_since: NOT_AVAILABLE.to_string(),
            last_login: NOT_AVAILABLE.to_string(),
            enrolled: course_count(0),
            completed: course_count(0),
            in_progress: course_count(0),
            progress_percent: 0,
            ring: progress_ring(0, theme),
        };
    };

    let registered = user.registered_courses.len();
    let completed = user.completed_courses.len();
    // negative when completions were recorded without enrollment
    let in_progress = registered as i64 - completed as i64;
    let percent = completion_percent(completed, registered);

    ProfileView {
        username: user.username.clone(),
        member_since: long_date(user.created_at.unwrap_or(now)),
        last_login: long_date_time(now),
        enrolled: course_count(registered as i64),
        completed: course_count(completed as i64),
        in_progress: course_count(in_progress),
        progress_percent: percent,
        ring: progress_ring(percent, theme),
    }
}

pub fn contact_view(state: &AppState) -> ContactView {
    ContactView {
        name: state.contact_form.name.clone(),
        email: state.contact_form.email.clone(),
        message: state.contact_form.message.clone(),
    }
}

fn course_count(n: i64) -> String {
    format!("{n} courses")
}

/// e.g. "March 5, 2024"
fn long_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// e.g. "March 5, 2024 at 09:30 AM"
fn long_date_time(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Build the full frame for the current state, reading user data fresh from
/// the store.
pub fn build_frame(state: &AppState, now: DateTime<Utc>) -> Result<Frame, StoreError> {
    let user = state.current_user()?;
    let user = user.as_ref();

    let panel = match state.panels.active() {
        Panel::Landing => PanelView::Landing(landing_view(user)),
        Panel::Courses => PanelView::Courses(catalog_view(user)),
        Panel::Dashboard => PanelView::Dashboard(dashboard_view(user)),
        Panel::Profile => PanelView::Profile(profile_view(user, state.theme, now)),
        Panel::Contact => PanelView::Contact(contact_view(state)),
    };

    let auth = state.modals.auth_visible().then(|| AuthView {
        tab: state.modals.auth_tab(),
        errors: state.modals.registration_errors().clone(),
    });

    Ok(Frame {
        theme: state.theme,
        header: header_view(user),
        nav: state.panels.nav_links(),
        sidebar_expanded: state.sidebar_expanded,
        panel,
        auth,
        notice: state.modals.notice().map(str::to_string),
    })
}
