//! HTML fragments using the page's element ids and CSS class names.
//!
//! Every string that originates from user input or the catalog goes through
//! [`escape_html`].

use std::fmt::Write;

use super::Renderer;
use crate::views::{
    AuthView, CatalogView, ContactView, CourseList, DashboardView, Frame, LandingView, PanelView,
    ProfileView,
};
use codecrafts_shared::{AuthTab, Panel, Theme};

pub struct HtmlRenderer;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `id` of the section element for a panel, e.g. `dashboardPage`.
fn page_id(panel: Panel) -> String {
    format!("{}Page", panel.as_str())
}

impl Renderer for HtmlRenderer {
    fn render(&self, frame: &Frame) -> anyhow::Result<String> {
        let mut out = String::new();
        let (body_class, theme_icon) = match frame.theme {
            Theme::Light => ("light-theme", "fas fa-moon theme-icon"),
            Theme::Dark => ("dark-theme", "fas fa-sun theme-icon"),
        };
        writeln!(out, r#"<body class="{body_class}">"#)?;

        write!(
            out,
            concat!(
                r#"<header class="header"><span class="logo">{app}</span>"#,
                r#"<button class="theme-toggle"><i class="{theme_icon}"></i></button>"#,
                r#"<div id="userInfo" style="display: flex;"><span id="currentUser">{user}</span>"#
            ),
            app = escape_html(frame.header.app_name),
            theme_icon = theme_icon,
            user = escape_html(&frame.header.display_name),
        )?;
        if frame.header.logged_in {
            write!(out, r#"<button id="logoutBtn" style="display: block;">Logout</button>"#)?;
        }
        writeln!(out, "</div></header>")?;

        let (sidebar_class, toggle_icon) = if frame.sidebar_expanded {
            ("sidebar expanded", "fas fa-times")
        } else {
            ("sidebar", "fas fa-bars")
        };
        writeln!(
            out,
            r#"<button class="sidebar-toggle" id="sidebarToggle"><i class="{toggle_icon}"></i></button>"#
        )?;
        write!(out, r#"<nav class="{sidebar_class}" id="sidebar">"#)?;
        for link in &frame.nav {
            let class = if link.active { "nav-link active" } else { "nav-link" };
            write!(
                out,
                r##"<a href="#{page}" class="{class}" data-page="{page}">{title}</a>"##,
                page = link.panel.as_str(),
                title = escape_html(link.title)
            )?;
        }
        writeln!(out, "</nav>")?;

        match &frame.panel {
            PanelView::Landing(view) => landing(&mut out, view)?,
            PanelView::Courses(view) => courses(&mut out, view)?,
            PanelView::Dashboard(view) => dashboard(&mut out, view)?,
            PanelView::Profile(view) => profile(&mut out, view)?,
            PanelView::Contact(view) => contact(&mut out, view)?,
        }

        if let Some(auth) = &frame.auth {
            auth_modal(&mut out, auth)?;
        }
        if let Some(notice) = &frame.notice {
            writeln!(
                out,
                concat!(
                    r#"<div class="modal active" id="successModal"><div class="modal-content">"#,
                    r#"<span class="close-modal" id="closeSuccessModal">&times;</span>"#,
                    r#"<p id="successMessage">{}</p>"#,
                    r#"<button class="btn-primary" id="okSuccessBtn">OK</button>"#,
                    r#"</div></div>"#
                ),
                escape_html(notice)
            )?;
        }

        writeln!(out, "</body>")?;
        Ok(out)
    }
}

fn landing(out: &mut String, view: &LandingView) -> std::fmt::Result {
    writeln!(
        out,
        r#"<section class="page active" id="{id}"><h1>{headline}</h1><button class="btn-primary" id="startLearningBtn">{cta}</button></section>"#,
        id = page_id(Panel::Landing),
        headline = escape_html(&view.headline),
        cta = escape_html(view.call_to_action)
    )
}

fn courses(out: &mut String, view: &CatalogView) -> std::fmt::Result {
    write!(
        out,
        r#"<section class="page active" id="{}"><div id="coursesContainer">"#,
        page_id(Panel::Courses)
    )?;
    for card in &view.cards {
        let label = if card.enrolled { "Registered" } else { "Register Now" };
        write!(
            out,
            concat!(
                r#"<div class="course-card">"#,
                r#"<div class="course-image"><i class="{icon}"></i></div>"#,
                r#"<div class="course-content">"#,
                r#"<h3 class="course-title">{title}</h3>"#,
                r#"<p class="course-description">{description}</p>"#,
                r#"<div class="course-meta"><div class="course-price">{price}</div>"#,
                r#"<div class="course-duration"><i class="fas fa-clock"></i><span>{duration}</span></div></div>"#,
                r#"<div class="course-actions">"#,
                r#"<button class="btn-enroll" data-course-id="{id}">{label}</button>"#,
                r#"<button class="btn-details" data-course-id="{id}">View Details</button>"#,
                r#"</div></div></div>"#
            ),
            icon = escape_html(card.icon),
            title = escape_html(card.title),
            description = escape_html(card.description),
            price = escape_html(card.price),
            duration = escape_html(card.duration),
            id = card.id,
            label = label,
        )?;
    }
    writeln!(out, "</div></section>")
}

fn course_list(
    out: &mut String,
    container_id: &str,
    list: &CourseList,
    login_link: bool,
) -> std::fmt::Result {
    write!(out, r#"<div id="{container_id}">"#)?;
    match list {
        CourseList::LoginRequired { message } => {
            let mut text = escape_html(message);
            if login_link {
                text = text.replacen("login", r##"<a href="#" id="loginFromDashboard">login</a>"##, 1);
            }
            write!(out, r#"<p class="empty-message">{text}</p>"#)?;
        }
        CourseList::Empty {
            message,
            browse_link,
        } => {
            write!(out, r#"<p class="empty-message">{}"#, escape_html(message))?;
            if *browse_link {
                write!(out, r##" <a href="#courses">Browse courses</a>"##)?;
            }
            write!(out, "</p>")?;
        }
        CourseList::Items { items } => {
            for item in items {
                let class = if item.completed {
                    "course-item completed"
                } else {
                    "course-item"
                };
                write!(
                    out,
                    r#"<div class="{class}"><div><h4>{}</h4><p>{}</p></div>"#,
                    escape_html(item.title),
                    escape_html(item.price)
                )?;
                if item.can_mark_complete {
                    write!(
                        out,
                        r#"<button class="btn-complete" data-course-id="{}">Mark Complete</button>"#,
                        item.id
                    )?;
                } else if item.completed {
                    write!(out, r#"<i class="fas fa-check"></i>"#)?;
                }
                write!(out, "</div>")?;
            }
        }
    }
    write!(out, "</div>")
}

fn dashboard(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    write!(
        out,
        r#"<section class="page active" id="{}"><div class="stats"><span id="enrolledCount">{}</span><span id="completedCount">{}</span><span id="progressPercent">{}%</span></div>"#,
        page_id(Panel::Dashboard),
        view.enrolled_count,
        view.completed_count,
        view.progress_percent
    )?;
    course_list(out, "registeredCourses", &view.registered, true)?;
    course_list(out, "completedCourses", &view.completed, false)?;
    writeln!(out, "</section>")
}

fn profile(out: &mut String, view: &ProfileView) -> std::fmt::Result {
    writeln!(
        out,
        concat!(
            r#"<section class="page active" id="{page}">"#,
            r#"<h2 id="profileUsername">{username}</h2>"#,
            r#"<p id="memberSince">{member_since}</p>"#,
            r#"<p id="lastLogin">{last_login}</p>"#,
            r#"<div class="progress-circle" id="progressCircle" style="background: {gradient};"><span class="progress-text" id="progressText">{percent}%</span></div>"#,
            r#"<span id="statEnrolled">{enrolled}</span>"#,
            r#"<span id="statCompleted">{completed}</span>"#,
            r#"<span id="statInProgress">{in_progress}</span>"#,
            r#"<button class="btn-secondary" id="editProfileBtn">Edit Profile</button>"#,
            r#"</section>"#
        ),
        page = page_id(Panel::Profile),
        username = escape_html(&view.username),
        member_since = escape_html(&view.member_since),
        last_login = escape_html(&view.last_login),
        enrolled = escape_html(&view.enrolled),
        completed = escape_html(&view.completed),
        in_progress = escape_html(&view.in_progress),
        gradient = escape_html(&view.ring.gradient),
        percent = view.progress_percent,
    )
}

fn contact(out: &mut String, view: &ContactView) -> std::fmt::Result {
    writeln!(
        out,
        concat!(
            r#"<section class="page active" id="{page}"><form id="messageForm">"#,
            r#"<input type="text" id="contactName" value="{name}">"#,
            r#"<input type="email" id="contactEmail" value="{email}">"#,
            r#"<textarea id="contactMessage">{message}</textarea>"#,
            r#"<button type="submit" class="btn-primary">Send Message</button>"#,
            r#"</form></section>"#
        ),
        page = page_id(Panel::Contact),
        name = escape_html(&view.name),
        email = escape_html(&view.email),
        message = escape_html(&view.message),
    )
}

fn auth_modal(out: &mut String, view: &AuthView) -> std::fmt::Result {
    let (login_class, register_class) = match view.tab {
        AuthTab::Login => ("tab-btn active", "tab-btn"),
        AuthTab::Register => ("tab-btn", "tab-btn active"),
    };
    write!(
        out,
        concat!(
            r#"<div class="modal active" id="authModal"><div class="modal-content">"#,
            r#"<span class="close-modal" id="closeAuthModal">&times;</span>"#,
            r#"<div class="auth-tabs"><button class="{login_class}" data-tab="login">Login</button>"#,
            r#"<button class="{register_class}" data-tab="register">Register</button></div>"#
        ),
        login_class = login_class,
        register_class = register_class,
    )?;
    match view.tab {
        AuthTab::Login => write!(
            out,
            concat!(
                r#"<form class="auth-form active" id="loginForm">"#,
                r#"<input type="text" id="loginUsername"><input type="password" id="loginPassword">"#,
                r#"<button type="submit" class="btn-primary">Login</button>"#,
                r##"<p>No account? <a href="#" id="showRegister">Register</a></p></form>"##
            )
        )?,
        AuthTab::Register => {
            write!(
                out,
                r#"<form class="auth-form active" id="registerForm"><input type="text" id="regUsername">"#
            )?;
            field_error(out, "usernameError", view.errors.username.as_deref())?;
            write!(
                out,
                r#"<input type="password" id="regPassword"><input type="password" id="confirmPassword">"#
            )?;
            field_error(out, "passwordError", view.errors.password.as_deref())?;
            write!(
                out,
                concat!(
                    r#"<button type="submit" class="btn-primary">Register</button>"#,
                    r##"<p>Have an account? <a href="#" id="showLogin">Login</a></p></form>"##
                )
            )?;
        }
    }
    writeln!(out, "</div></div>")
}

fn field_error(out: &mut String, id: &str, message: Option<&str>) -> std::fmt::Result {
    match message {
        Some(message) => write!(
            out,
            r#"<span class="error-message" id="{id}">{}</span>"#,
            escape_html(message)
        ),
        None => write!(out, r#"<span class="error-message" id="{id}"></span>"#),
    }
}
