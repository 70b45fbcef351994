//! Task List Component
//!
//! An employee's open tasks. Submitting one sends it to the leader's
//! review queue and takes it off this list.

use form_gateway::{endpoints, DisplayRow, Notice, RowState, TableViewModel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::row_action::{self, NoticeBanner};
use super::ConfirmButton;
use crate::browser;
use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::EmployeeTask;

/// Page-embedded JSON with the employee's tasks
pub const TASKS: &str = "tasks-data";

#[component]
pub fn TaskList() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();

    let tasks: Vec<EmployeeTask> = browser::embedded_json(TASKS).unwrap_or_default();
    let mut initial = TableViewModel::new("No open tasks. Nice work!");
    initial.load(tasks.into_iter().filter(|t| t.can_submit()).map(|t| (t.task_id, t)));
    let table = RwSignal::new(initial);
    let notice = RwSignal::new(None::<Notice>);

    let submit = Callback::new(move |id: u32| {
        spawn_local(async move {
            let config = config.get_value();
            let outcome = row_action::run(&config, endpoints::submit_task(id), id, table).await;
            log::info!("[Tasks] submit {} -> {:?}", id, outcome);
            notice.set(row_action::notice_for(&outcome));
            row_action::refresh_after(&config, ctx, &outcome).await;
        });
    });

    view! {
        <section class="task-list card mb-4">
            <div class="card-header d-flex justify-content-between">
                <h5 class="mb-0">"My Tasks"</h5>
                <span class="badge bg-secondary">{move || table.with(|t| t.count())}</span>
            </div>
            <div class="card-body">
                <NoticeBanner notice=notice />
                <ul class="list-group">
                    {move || table.with(|t| {
                        t.display()
                            .into_iter()
                            .map(|row| match row {
                                DisplayRow::Placeholder(text) => view! {
                                    <li class="list-group-item text-muted">{text.to_string()}</li>
                                }
                                .into_any(),
                                DisplayRow::Row(row) => {
                                    let id = row.key;
                                    let task = row.data.clone();
                                    let pending = row.state == RowState::Pending;
                                    let failure = match &row.state {
                                        RowState::Failed(message) => Some(message.clone()),
                                        _ => None,
                                    };
                                    view! {
                                        <li class="list-group-item d-flex justify-content-between align-items-center">
                                            <div>
                                                <strong>{task.title}</strong>
                                                <small class="ms-2 text-muted">{task.status}</small>
                                                {task.due_date.map(|d| view! { <small class="ms-2">"Due " {d}</small> })}
                                                {failure.map(|m| view! { <div class="small text-danger">{m}</div> })}
                                            </div>
                                            <ConfirmButton
                                                label=if pending { "Submitting..." } else { "Submit" }
                                                button_class="btn btn-sm btn-primary"
                                                disabled=Signal::stored(pending)
                                                on_confirm=move |_| submit.run(id)
                                            />
                                        </li>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()
                    })}
                </ul>
            </div>
        </section>
    }
}
