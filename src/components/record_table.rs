//! Record Table Component
//!
//! Plain table of text cells with one row action (delete, remove, submit)
//! and optional edit and view buttons. Used for the smaller lists on each
//! dashboard; rows come from page data, so a change reloads the page.

use form_gateway::{DisplayRow, Notice, RowAction, RowState, RowText, TableViewModel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::row_action::{self, NoticeBanner};
use super::ConfirmButton;
use crate::config::use_config;
use crate::context::use_app_context;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: u32,
    pub cells: Vec<String>,
}

impl Record {
    pub fn new(key: u32, cells: impl IntoIterator<Item = String>) -> Self {
        Self {
            key,
            cells: cells.into_iter().collect(),
        }
    }
}

impl RowText for Record {
    fn text(&self) -> String {
        self.cells.join(" ")
    }

    fn column(&self, _name: &str) -> Option<String> {
        None
    }
}

#[component]
pub fn RecordTable(
    #[prop(into)] title: String,
    headers: &'static [&'static str],
    records: Vec<Record>,
    #[prop(into)] empty_message: String,
    #[prop(into)] action_label: String,
    action: fn(u32) -> RowAction,
    #[prop(optional, into)] on_edit: Option<Callback<u32>>,
    #[prop(optional, into)] on_view: Option<Callback<u32>>,
) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();
    let mut initial = TableViewModel::new(&empty_message);
    initial.load(records.into_iter().map(|r| (r.key, r)));
    let table = RwSignal::new(initial);
    let notice = RwSignal::new(None::<Notice>);
    let action_label = StoredValue::new(action_label);
    let columns = headers.len() + 1;

    let run = Callback::new(move |key: u32| {
        spawn_local(async move {
            let config = config.get_value();
            let outcome = row_action::run(&config, action(key), key, table).await;
            notice.set(row_action::notice_for(&outcome));
            row_action::refresh_after(&config, ctx, &outcome).await;
        });
    });

    view! {
        <section class="record-table card mb-4">
            <div class="card-header d-flex justify-content-between">
                <h5 class="mb-0">{title}</h5>
                <span class="badge bg-secondary">{move || table.with(|t| t.count())}</span>
            </div>
            <div class="card-body">
                <NoticeBanner notice=notice />
                <table class="table table-sm align-middle">
                    <thead>
                        <tr>
                            {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || table.with(|t| {
                            t.display()
                                .into_iter()
                                .map(|row| match row {
                                    DisplayRow::Placeholder(text) => view! {
                                        <tr><td colspan=columns.to_string() class="text-center text-muted">{text.to_string()}</td></tr>
                                    }
                                    .into_any(),
                                    DisplayRow::Row(row) => {
                                        let key = row.key;
                                        let pending = row.state == RowState::Pending;
                                        let failure = match &row.state {
                                            RowState::Failed(message) => Some(message.clone()),
                                            _ => None,
                                        };
                                        view! {
                                            <tr class:table-warning=pending>
                                                {row.data.cells.iter().map(|c| view! { <td>{c.clone()}</td> }).collect_view()}
                                                <td class="text-end">
                                                    {on_view.map(|show| view! {
                                                        <button
                                                            type="button"
                                                            class="btn btn-sm btn-outline-secondary me-1"
                                                            on:click=move |_| show.run(key)
                                                        >
                                                            "View"
                                                        </button>
                                                    })}
                                                    {on_edit.map(|edit| view! {
                                                        <button
                                                            type="button"
                                                            class="btn btn-sm btn-outline-primary me-1"
                                                            disabled=pending
                                                            on:click=move |_| edit.run(key)
                                                        >
                                                            "Edit"
                                                        </button>
                                                    })}
                                                    <ConfirmButton
                                                        label=action_label.get_value()
                                                        button_class="btn btn-sm btn-outline-danger"
                                                        disabled=Signal::stored(pending)
                                                        on_confirm=move |_| run.run(key)
                                                    />
                                                    {failure.map(|m| view! { <div class="small text-danger">{m}</div> })}
                                                </td>
                                            </tr>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_search_text() {
        let mut table = TableViewModel::new("empty");
        table.load([
            (1, Record::new(1, ["Atlas".to_string(), "active".to_string()])),
            (2, Record::new(2, ["Borealis".to_string(), "closed".to_string()])),
        ]);
        table.filter("bore", "status", "");
        let visible: Vec<u32> = table.rows().iter().filter(|r| !r.hidden).map(|r| r.key).collect();
        assert_eq!(visible, vec![2]);
    }
}
