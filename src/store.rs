//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use form_gateway::Theme;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ClosedProject;

/// Dashboard-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projects accepted from the review queue
    pub closed_projects: Vec<ClosedProject>,
    /// Set when the closed list could not be fetched
    pub closed_load_failed: bool,
    /// Sidebar badge mirrored from the pending review queue
    pub pending_reviews: u32,
    /// Current theme (cached in local storage)
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the closed list after a fetch; `None` marks the fetch as failed
pub fn store_set_closed_projects(store: &AppStore, projects: Option<Vec<ClosedProject>>) {
    store.closed_load_failed().set(projects.is_none());
    *store.closed_projects().write() = projects.unwrap_or_default();
}

pub fn store_set_pending_reviews(store: &AppStore, count: u32) {
    if store.pending_reviews().get_untracked() != count {
        store.pending_reviews().set(count);
    }
}
