//! Theme Toggle Component

use form_gateway::Theme;
use leptos::prelude::*;

use crate::browser::{self, LocalStore};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_: web_sys::MouseEvent| {
        let theme = Theme::toggle(&LocalStore::open());
        browser::apply_theme(theme);
        store.theme().set(theme);
    };

    view! {
        <button type="button" class="btn btn-outline-secondary theme-toggle" on:click=toggle>
            {move || match store.theme().get() {
                Theme::Light => "🌙 Dark",
                Theme::Dark => "☀️ Light",
            }}
        </button>
    }
}
