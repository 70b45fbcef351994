//! Workforce Frontend App
//!
//! Provides config, context and store, then mounts the dashboard matching
//! the page URL. The server renders one HTML shell per role.

use form_gateway::Theme;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{self, LocalStore};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{AdminPage, AuthPage, EmployeePage, LeaderPage, ResetPasswordPage};
use crate::store::AppState;

const RESET_PREFIX: &str = "/auth/reset-password/";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Admin,
    Employee,
    Leader,
    ResetPassword(String),
    Auth,
}

impl Route {
    fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if let Some(token) = path.strip_prefix(RESET_PREFIX).filter(|t| !t.is_empty()) {
            return Route::ResetPassword(token.to_string());
        }
        match path.split('/').nth(1).unwrap_or("") {
            "admin" => Route::Admin,
            "employee" => Route::Employee,
            "leader" => Route::Leader,
            _ => Route::Auth,
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let theme = Theme::load(&LocalStore::open());
    browser::apply_theme(theme);

    // Provide context to all children
    provide_context(config);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Store::new(AppState::new(theme)));

    let route = Route::from_path(&browser::pathname());
    log::info!("[APP] Route {:?}", route);

    match route {
        Route::Admin => view! { <AdminPage /> }.into_any(),
        Route::Employee => view! { <EmployeePage /> }.into_any(),
        Route::Leader => view! { <LeaderPage /> }.into_any(),
        Route::ResetPassword(token) => view! { <ResetPasswordPage token=token /> }.into_any(),
        Route::Auth => view! { <AuthPage /> }.into_any(),
    }
}
