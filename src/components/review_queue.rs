//! Review Queue Component
//!
//! Items waiting for a decision: projects for the admin, submitted tasks
//! for a project leader. Accepting or rejecting removes the row
//! optimistically; a rejection needs a reason. The project queue re-fetches
//! on every app reload signal; the task queue comes from page data, so the
//! page reloads after a decision.

use form_gateway::{endpoints, DisplayRow, FormValues, Notice, RowAction, RowOutcome, RowState, TableRow, TableViewModel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::row_action::{self, NoticeBanner};
use super::ConfirmButton;
use crate::browser;
use crate::commands;
use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::{ReviewItem, SubmittedTask};
use crate::store::{store_set_closed_projects, store_set_pending_reviews, use_app_store, AppStateStoreFields};

/// Page-embedded JSON with the leader's submitted tasks
pub const SUBMITTED_TASKS: &str = "submitted-tasks-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewKind {
    Project,
    Task,
}

impl ReviewKind {
    fn accept(self, id: u32) -> RowAction {
        match self {
            ReviewKind::Project => endpoints::review_project(id, &endpoints::ReviewDecision::Accept),
            ReviewKind::Task => endpoints::approve_task(id),
        }
    }

    fn reject(self, id: u32, reason: &str) -> RowAction {
        match self {
            ReviewKind::Project => {
                endpoints::review_project(id, &endpoints::ReviewDecision::Reject(reason.to_string()))
            }
            ReviewKind::Task => endpoints::reject_task(id, reason),
        }
    }

    fn title(self) -> &'static str {
        match self {
            ReviewKind::Project => "Pending Reviews",
            ReviewKind::Task => "Submitted Tasks",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            ReviewKind::Project => "No projects pending review",
            ReviewKind::Task => "No tasks waiting for approval",
        }
    }
}

#[component]
pub fn ReviewQueue(kind: ReviewKind) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();
    let store = use_app_store();

    let table = RwSignal::new(TableViewModel::<ReviewItem>::new(kind.empty_message()));
    let notice = RwSignal::new(None::<Notice>);
    let rejecting = RwSignal::new(None::<u32>);
    let reason = RwSignal::new(String::new());
    let reason_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(async move {
            let config = config.get_value();
            let items: Result<Vec<ReviewItem>, String> = match kind {
                ReviewKind::Project => commands::list_pending_reviews(&config)
                    .await
                    .map(|list| list.into_iter().map(ReviewItem::from).collect()),
                ReviewKind::Task => Ok(browser::embedded_json::<Vec<SubmittedTask>>(SUBMITTED_TASKS)
                    .unwrap_or_default()
                    .into_iter()
                    .map(ReviewItem::from)
                    .collect()),
            };
            match items {
                Ok(items) => {
                    log::info!("[Review] {} item(s) waiting", items.len());
                    table.try_update(|t| t.load(items.into_iter().map(|item| (item.id, item))));
                }
                Err(e) => {
                    log::error!("[Review] could not load queue: {}", e);
                    notice.try_set(Some(Notice::Error(config.network_error.clone())));
                }
            }
        });
    });

    if kind == ReviewKind::Project {
        Effect::new(move |_| {
            let count = table.with(|t| t.count());
            store_set_pending_reviews(&store, count);
        });
    }

    let settle = move |outcome: RowOutcome| async move {
        notice.set(row_action::notice_for(&outcome));
        match kind {
            ReviewKind::Project if row_action::changed(&outcome) => ctx.reload(),
            ReviewKind::Project => {}
            ReviewKind::Task => row_action::refresh_after(&config.get_value(), ctx, &outcome).await,
        }
    };

    let accept = Callback::new(move |id: u32| {
        spawn_local(async move {
            let outcome = row_action::run(&config.get_value(), kind.accept(id), id, table).await;
            settle(outcome).await;
        });
    });

    let open_reject = move |id: u32| {
        reason.set(String::new());
        reason_error.set(None);
        rejecting.set(Some(id));
    };

    let confirm_reject = move |_: web_sys::MouseEvent| {
        let Some(id) = rejecting.get_untracked() else {
            return;
        };
        let text = reason.get_untracked();
        let report = endpoints::rejection_reason().validate_now(&FormValues::new().with("reason", &text));
        if !report.is_ok() {
            reason_error.set(Some(report.joined(" ")));
            return;
        }
        rejecting.set(None);
        spawn_local(async move {
            let outcome = row_action::run(&config.get_value(), kind.reject(id, text.trim()), id, table).await;
            settle(outcome).await;
        });
    };

    let row_view = move |row: &TableRow<ReviewItem>| {
        let id = row.key;
        let item = row.data.clone();
        let pending = row.state == RowState::Pending;
        let failure = match &row.state {
            RowState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let progress = item.progress.map(|p| format!("{}%", p)).unwrap_or_else(|| "-".to_string());
        view! {
            <tr class:table-warning=pending>
                <td>{item.title}</td>
                <td>{item.owner.unwrap_or_else(|| "Unassigned".to_string())}</td>
                <td>{progress}</td>
                <td>{item.end_date.unwrap_or_default()}</td>
                <td class="text-end">
                    {if pending {
                        view! { <span class="text-muted">"Processing..."</span> }.into_any()
                    } else {
                        view! {
                            <ConfirmButton
                                label="Accept"
                                button_class="btn btn-sm btn-success"
                                on_confirm=move |_| accept.run(id)
                            />
                            <button
                                type="button"
                                class="btn btn-sm btn-outline-danger ms-1"
                                on:click=move |_| open_reject(id)
                            >
                                "Reject"
                            </button>
                        }
                        .into_any()
                    }}
                    {failure.map(|message| view! { <div class="small text-danger">{message}</div> })}
                </td>
            </tr>
        }
    };

    view! {
        <section class="review-queue card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">{kind.title()}</h5>
                <span class="badge bg-primary">{move || table.with(|t| t.count())}</span>
            </div>
            <div class="card-body">
                <NoticeBanner notice=notice />
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Owner"</th>
                            <th>"Progress"</th>
                            <th>"Due"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.with(|t| {
                            t.display()
                                .into_iter()
                                .map(|row| match row {
                                    DisplayRow::Row(row) => row_view(row).into_any(),
                                    DisplayRow::Placeholder(text) => view! {
                                        <tr><td colspan="5" class="text-center text-muted">{text.to_string()}</td></tr>
                                    }
                                    .into_any(),
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>

                <Show when=move || rejecting.get().is_some()>
                    <div class="reject-panel border rounded p-3">
                        <label class="form-label" for="reject-reason">"Reason for rejection"</label>
                        <textarea
                            id="reject-reason"
                            class=move || if reason_error.get().is_some() { "form-control is-invalid" } else { "form-control" }
                            rows="3"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        />
                        {move || reason_error.get().map(|e| view! { <div class="invalid-feedback d-block">{e}</div> })}
                        <div class="mt-2">
                            <button type="button" class="btn btn-danger" on:click=confirm_reject>"Reject"</button>
                            <button type="button" class="btn btn-secondary ms-1" on:click=move |_| rejecting.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}

/// Projects accepted from the queue; re-fetched on every app reload signal
#[component]
pub fn ClosedProjects() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        ctx.reload_trigger.track();
        spawn_local(async move {
            match commands::list_closed_projects(&config.get_value()).await {
                Ok(projects) => store_set_closed_projects(&store, Some(projects)),
                Err(e) => {
                    log::error!("[Review] could not load closed projects: {}", e);
                    store_set_closed_projects(&store, None);
                }
            }
        });
    });

    view! {
        <section class="closed-projects card mb-4">
            <div class="card-header"><h5 class="mb-0">"Closed Projects"</h5></div>
            <ul class="list-group list-group-flush">
                {move || {
                    if store.closed_load_failed().get() {
                        return view! {
                            <li class="list-group-item text-danger">"Could not load closed projects"</li>
                        }
                        .into_any();
                    }
                    let projects = store.closed_projects().get();
                    if projects.is_empty() {
                        return view! {
                            <li class="list-group-item text-muted">"No closed projects"</li>
                        }
                        .into_any();
                    }
                    projects
                        .into_iter()
                        .map(|p| view! {
                            <li class="list-group-item d-flex justify-content-between">
                                <span>{p.project_name}</span>
                                <small class="text-muted">
                                    {p.leader_name.unwrap_or_default()} " " {p.end_date.unwrap_or_default()}
                                </small>
                            </li>
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </section>
    }
}
