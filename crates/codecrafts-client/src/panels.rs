//! Panel state machine: exactly one top-level section is active at a time.

use codecrafts_shared::Panel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelController {
    active: Panel,
}

/// One entry of the navigation menu.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub panel: Panel,
    pub title: &'static str,
    pub active: bool,
}

impl PanelController {
    pub fn new() -> Self {
        Self {
            active: Panel::Landing,
        }
    }

    /// Initial state for a page loaded with an address fragment. Unknown
    /// fragments leave the landing panel active.
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        let mut controller = Self::new();
        if let Some(panel) = fragment.and_then(Panel::from_fragment) {
            controller.activate(panel);
        }
        controller
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    /// Switch panels, returning the one that was active before.
    pub fn activate(&mut self, panel: Panel) -> Panel {
        let previous = std::mem::replace(&mut self.active, panel);
        if previous != panel {
            tracing::debug!(from = %previous, to = %panel, "panel switched");
        }
        previous
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        Panel::ALL
            .into_iter()
            .map(|panel| NavLink {
                panel,
                title: panel.title(),
                active: self.is_active(panel),
            })
            .collect()
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}
