//! Pages
//!
//! One root component per dashboard, picked by URL path in `App`.

mod admin;
mod auth;
mod employee;
mod leader;

pub use admin::AdminPage;
pub use auth::{AuthPage, ResetPasswordPage};
pub use employee::EmployeePage;
pub use leader::LeaderPage;

use leptos::prelude::*;

use crate::components::ThemeToggle;

/// Top bar shared by the dashboards
#[component]
fn DashboardHeader(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand bg-body-tertiary mb-4 px-3">
            <span class="navbar-brand">{title}</span>
            <div class="ms-auto d-flex gap-2 align-items-center">
                {children.map(|children| children())}
                <ThemeToggle />
                <a class="btn btn-outline-danger" href="/auth/logout">"Logout"</a>
            </div>
        </nav>
    }
}
