use serde::{Deserialize, Serialize};

// Course identity = small positive integer from the static catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl CourseId {
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u32>().ok().map(Self)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Top-level, mutually exclusive UI sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Landing,
    Courses,
    Dashboard,
    Profile,
    Contact,
}

impl Panel {
    /// Navigation order.
    pub const ALL: [Panel; 5] = [
        Panel::Landing,
        Panel::Courses,
        Panel::Dashboard,
        Panel::Profile,
        Panel::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Landing => "landing",
            Panel::Courses => "courses",
            Panel::Dashboard => "dashboard",
            Panel::Profile => "profile",
            Panel::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Resolve an address fragment such as `#dashboard`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        if name.is_empty() {
            return None;
        }
        Self::from_name(name)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Landing => "Home",
            Panel::Courses => "Courses",
            Panel::Dashboard => "Dashboard",
            Panel::Profile => "Profile",
            Panel::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "login" => Some(AuthTab::Login),
            "register" => Some(AuthTab::Register),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_resolves_known_panels() {
        assert_eq!(Panel::from_fragment("#dashboard"), Some(Panel::Dashboard));
        assert_eq!(Panel::from_fragment("profile"), Some(Panel::Profile));
        assert_eq!(Panel::from_fragment("#"), None);
        assert_eq!(Panel::from_fragment(""), None);
        assert_eq!(Panel::from_fragment("#settings"), None);
    }

    #[test]
    fn course_id_is_a_bare_integer_in_json() {
        let json = serde_json::to_string(&vec![CourseId(3), CourseId(7)]).unwrap();
        assert_eq!(json, "[3,7]");
        assert_eq!(CourseId::parse(" 4 "), Some(CourseId(4)));
        assert_eq!(CourseId::parse("four"), None);
    }

    #[test]
    fn theme_toggles_and_parses() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
