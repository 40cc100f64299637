//! Application state shared by the shell and every command.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<>>` so that the input
//! loop and the delayed login prompt can both reach it.

use codecrafts_shared::validation::ContactForm;
use codecrafts_shared::Theme;
use codecrafts_store::{preferences, KeyValueStore, Session, StoreError, UserDirectory, UserRecord};

use crate::config::ClientConfig;
use crate::modals::ModalState;
use crate::panels::PanelController;

/// Central application state.
///
/// Holds the storage backend and every piece of transient UI state. User
/// data is never cached here: it is read back from the store on demand.
pub struct AppState {
    /// Injected persistence backend.
    pub store: Box<dyn KeyValueStore>,

    /// Which top-level panel is visible.
    pub panels: PanelController,

    /// Auth and notice overlays.
    pub modals: ModalState,

    /// Current colour scheme, mirrored to the store on change.
    pub theme: Theme,

    /// Whether the navigation sidebar is expanded.
    pub sidebar_expanded: bool,

    /// Narrow-viewport behaviour: the sidebar collapses after navigation and
    /// on clicks outside it.
    pub compact_layout: bool,

    /// Last submitted contact form, cleared after a successful send.
    pub contact_form: ContactForm,
}

impl AppState {
    /// Fresh state over `store`: landing panel, light theme, no overlays.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            panels: PanelController::new(),
            modals: ModalState::new(),
            theme: Theme::default(),
            sidebar_expanded: false,
            compact_layout: false,
            contact_form: ContactForm::default(),
        }
    }

    /// State for a first page load: saved theme, panel from the address
    /// fragment, layout from the viewport width.
    pub fn from_config(store: Box<dyn KeyValueStore>, config: &ClientConfig) -> Result<Self, StoreError> {
        let theme = preferences::load_theme(store.as_ref())?;
        let mut state = Self::new(store);
        state.theme = theme;
        state.panels = PanelController::from_fragment(config.start_fragment.as_deref());
        state.compact_layout = config.compact_layout();
        Ok(state)
    }

    pub fn directory(&self) -> UserDirectory<'_> {
        UserDirectory::new(self.store.as_ref())
    }

    pub fn session(&self) -> Session<'_> {
        Session::new(self.store.as_ref())
    }

    /// The logged-in user's record, re-read from the store.
    pub fn current_user(&self) -> Result<Option<UserRecord>, StoreError> {
        self.session().current()
    }
}
