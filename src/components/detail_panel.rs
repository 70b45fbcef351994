//! Detail Panels
//!
//! Read-only cards for one employee or one project, fetched when a row's
//! "View" button selects it. Closing the panel clears the selection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::use_config;
use crate::models::{EmployeeDetail, ProjectDetail};

/// Fetch state of a detail panel
#[derive(Debug, Clone, PartialEq)]
enum Loaded<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
pub fn EmployeeDetails(selected: RwSignal<Option<u32>>) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let state = RwSignal::new(Loaded::<EmployeeDetail>::Loading);

    Effect::new(move |_| {
        let Some(id) = selected.get() else {
            return;
        };
        state.set(Loaded::Loading);
        spawn_local(async move {
            let loaded = match commands::get_employee(&config.get_value(), id).await {
                Ok(detail) => Loaded::Ready(detail),
                Err(e) => {
                    log::error!("[Detail] employee {}: {}", id, e);
                    Loaded::Failed(config.with_value(|c| c.network_error.clone()))
                }
            };
            state.try_set(loaded);
        });
    });

    move || {
        selected.get().map(|_| {
            let body = match state.get() {
                Loaded::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Loaded::Failed(message) => view! { <p class="text-danger">{message}</p> }.into_any(),
                Loaded::Ready(detail) => employee_body(detail).into_any(),
            };
            view! {
                <section class="detail-panel card mb-4">
                    <div class="card-header d-flex justify-content-between">
                        <h5 class="mb-0">"Employee Details"</h5>
                        <button type="button" class="btn-close" on:click=move |_| selected.set(None)></button>
                    </div>
                    <div class="card-body">{body}</div>
                </section>
            }
        })
    }
}

fn employee_body(detail: EmployeeDetail) -> impl IntoView {
    let e = detail.employee;
    let status = match (e.is_active, e.is_registered) {
        (false, _) => "Inactive",
        (true, false) => "Not registered",
        (true, true) => "Active",
    };
    view! {
        <dl class="row mb-3">
            <dt class="col-sm-4">"Name"</dt><dd class="col-sm-8">{e.name}</dd>
            <dt class="col-sm-4">"Username"</dt><dd class="col-sm-8">{e.username.unwrap_or_default()}</dd>
            <dt class="col-sm-4">"Email"</dt><dd class="col-sm-8">{e.email}</dd>
            <dt class="col-sm-4">"Role"</dt><dd class="col-sm-8">{e.role}</dd>
            <dt class="col-sm-4">"Designation"</dt><dd class="col-sm-8">{e.designation.unwrap_or_default()}</dd>
            <dt class="col-sm-4">"Status"</dt><dd class="col-sm-8">{status}</dd>
            <dt class="col-sm-4">"Last login"</dt>
            <dd class="col-sm-8">{detail.last_login.unwrap_or_else(|| "Never".to_string())}</dd>
        </dl>
        <h6>"Projects"</h6>
        <ul class="list-group mb-3">
            {if detail.projects.is_empty() {
                view! { <li class="list-group-item text-muted">"No active projects"</li> }.into_any()
            } else {
                detail.projects
                    .into_iter()
                    .map(|p| view! {
                        <li class="list-group-item d-flex justify-content-between">
                            <span>{p.project_name}</span>
                            <small class="text-muted">{p.status.unwrap_or_default()}</small>
                        </li>
                    })
                    .collect_view()
                    .into_any()
            }}
        </ul>
        <h6>"Team"</h6>
        <ul class="list-group">
            {if detail.team_members.is_empty() {
                view! { <li class="list-group-item text-muted">"No colleagues yet"</li> }.into_any()
            } else {
                detail.team_members
                    .into_iter()
                    .map(|m| view! {
                        <li class="list-group-item d-flex justify-content-between">
                            <span>{m.name}</span>
                            <small class="text-muted">{m.project_role.unwrap_or_default()}</small>
                        </li>
                    })
                    .collect_view()
                    .into_any()
            }}
        </ul>
    }
}

#[component]
pub fn ProjectDetails(selected: RwSignal<Option<u32>>) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let state = RwSignal::new(Loaded::<ProjectDetail>::Loading);

    Effect::new(move |_| {
        let Some(id) = selected.get() else {
            return;
        };
        state.set(Loaded::Loading);
        spawn_local(async move {
            let loaded = match commands::get_project(&config.get_value(), id).await {
                Ok(detail) => Loaded::Ready(detail),
                Err(e) => {
                    log::error!("[Detail] project {}: {}", id, e);
                    Loaded::Failed(config.with_value(|c| c.network_error.clone()))
                }
            };
            state.try_set(loaded);
        });
    });

    move || {
        selected.get().map(|_| {
            let body = match state.get() {
                Loaded::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Loaded::Failed(message) => view! { <p class="text-danger">{message}</p> }.into_any(),
                Loaded::Ready(detail) => project_body(detail).into_any(),
            };
            view! {
                <section class="detail-panel card mb-4">
                    <div class="card-header d-flex justify-content-between">
                        <h5 class="mb-0">"Project Details"</h5>
                        <button type="button" class="btn-close" on:click=move |_| selected.set(None)></button>
                    </div>
                    <div class="card-body">{body}</div>
                </section>
            }
        })
    }
}

fn project_body(detail: ProjectDetail) -> impl IntoView {
    let p = detail.project;
    let progress = p.progress.unwrap_or(0);
    let leader = match (p.leader_name, p.leader_designation) {
        (Some(name), Some(designation)) => format!("{} ({})", name, designation),
        (Some(name), None) => name,
        (None, _) => "Unassigned".to_string(),
    };
    view! {
        <h6>{p.project_name}</h6>
        <p class="text-muted">{p.description.unwrap_or_default()}</p>
        <div class="progress mb-3" role="progressbar">
            <div class="progress-bar" style=format!("width: {}%", progress)>{format!("{}%", progress)}</div>
        </div>
        <dl class="row mb-3">
            <dt class="col-sm-4">"Leader"</dt><dd class="col-sm-8">{leader}</dd>
            <dt class="col-sm-4">"Start"</dt><dd class="col-sm-8">{p.start_date.unwrap_or_default()}</dd>
            <dt class="col-sm-4">"End"</dt><dd class="col-sm-8">{p.end_date.unwrap_or_default()}</dd>
        </dl>
        <h6>"Members"</h6>
        <ul class="list-group">
            {if detail.members.is_empty() {
                view! { <li class="list-group-item text-muted">"No members yet"</li> }.into_any()
            } else {
                detail.members
                    .into_iter()
                    .map(|m| view! {
                        <li class="list-group-item d-flex justify-content-between">
                            <span>{m.name}</span>
                            <small class="text-muted">
                                {if m.is_leader { "Leader".to_string() } else { m.designation.unwrap_or_default() }}
                            </small>
                        </li>
                    })
                    .collect_view()
                    .into_any()
            }}
        </ul>
    }
}
