//! Project Watch Lists
//!
//! Two small admin cards: projects at risk of missing their end date and
//! the most recently created projects. Both re-fetch on the app reload
//! signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::{RecentProject, RiskProject};

#[component]
pub fn RiskProjects() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();
    let projects = RwSignal::new(None::<Vec<RiskProject>>);

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(async move {
            match commands::list_risk_projects(&config.get_value()).await {
                Ok(list) => {
                    projects.try_set(Some(list));
                }
                Err(e) => log::error!("[Watch] could not load risk projects: {}", e),
            }
        });
    });

    view! {
        <section class="risk-projects card mb-4 border-danger">
            <div class="card-header"><h5 class="mb-0">"At Risk"</h5></div>
            <ul class="list-group list-group-flush">
                {move || match projects.get() {
                    None => view! { <li class="list-group-item text-muted">"Loading..."</li> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <li class="list-group-item text-muted">"No projects at risk"</li>
                    }
                    .into_any(),
                    Some(list) => list
                        .into_iter()
                        .map(|p| view! {
                            <li class="list-group-item d-flex justify-content-between">
                                <span>{p.project_name}</span>
                                <small class="text-danger">
                                    {format!("{}%", p.progress.unwrap_or(0))} " by " {p.end_date.unwrap_or_default()}
                                </small>
                            </li>
                        })
                        .collect_view()
                        .into_any(),
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn RecentProjects() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();
    let projects = RwSignal::new(None::<Vec<RecentProject>>);

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(async move {
            match commands::list_recent_projects(&config.get_value()).await {
                Ok(list) => {
                    projects.try_set(Some(list));
                }
                Err(e) => log::error!("[Watch] could not load recent projects: {}", e),
            }
        });
    });

    view! {
        <section class="recent-projects card mb-4">
            <div class="card-header"><h5 class="mb-0">"Recent Projects"</h5></div>
            <ul class="list-group list-group-flush">
                {move || match projects.get() {
                    None => view! { <li class="list-group-item text-muted">"Loading..."</li> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <li class="list-group-item text-muted">"No projects yet"</li>
                    }
                    .into_any(),
                    Some(list) => list
                        .into_iter()
                        .map(|p| view! {
                            <li class="list-group-item d-flex justify-content-between">
                                <span>{p.project_name}</span>
                                <small class="text-muted">
                                    {p.status.unwrap_or_default()} " " {format!("{}%", p.progress.unwrap_or(0))}
                                </small>
                            </li>
                        })
                        .collect_view()
                        .into_any(),
                }}
            </ul>
        </section>
    }
}
