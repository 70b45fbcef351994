//! Employee Table Component
//!
//! Admin employee list with search, department filter, inline deactivate
//! and an edit form for the selected row.

use form_gateway::{endpoints, DisplayRow, FormValues, Notice, RowState, TableRow, TableViewModel};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::gateway_form::{FieldDef, FieldKind, GatewayForm};
use super::row_action::{self, NoticeBanner};
use super::ConfirmButton;
use crate::browser;
use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::Employee;

/// Page-embedded JSON with the employee list
pub const EMPLOYEES: &str = "employees-data";

const DEPARTMENT: &str = "department";

pub const ROLES: &[(&str, &str)] = &[
    ("employee", "Employee"),
    ("project_leader", "Project Leader"),
    ("admin", "Admin"),
];

const EDIT_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("designation", "Designation", FieldKind::Text),
    FieldDef::new("department", "Department", FieldKind::Text),
    FieldDef::new("role", "Role", FieldKind::Select(ROLES)),
];

#[component]
pub fn EmployeeTable(#[prop(optional, into)] on_view: Option<Callback<u32>>) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let ctx = use_app_context();

    let employees: Vec<Employee> = browser::embedded_json(EMPLOYEES).unwrap_or_default();
    let mut departments: Vec<String> = employees.iter().filter_map(|e| e.department.clone()).collect();
    departments.sort();
    departments.dedup();

    let mut initial = TableViewModel::new("No employees found");
    initial.load(employees.into_iter().map(|e| (e.user_id, e)));
    let table = RwSignal::new(initial);

    let notice = RwSignal::new(None::<Notice>);
    let query = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Employee>);

    Effect::new(move |_| {
        let (q, d) = (query.get(), department.get());
        table.update(|t| t.filter(&q, DEPARTMENT, &d));
    });

    let deactivate = Callback::new(move |id: u32| {
        spawn_local(async move {
            let config = config.get_value();
            let outcome = row_action::run(&config, endpoints::delete_employee(id), id, table).await;
            notice.set(row_action::notice_for(&outcome));
            row_action::refresh_after(&config, ctx, &outcome).await;
        });
    });

    let row_view = move |row: &TableRow<Employee>| {
        let id = row.key;
        let emp = row.data.clone();
        let pending = row.state == RowState::Pending;
        let failure = match &row.state {
            RowState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let selected = emp.clone();
        view! {
            <tr class:table-warning=pending class:text-muted=!emp.is_active>
                <td>{emp.name}</td>
                <td>{emp.email}</td>
                <td>{emp.designation.unwrap_or_default()}</td>
                <td>{emp.department.unwrap_or_default()}</td>
                <td>{emp.role}</td>
                <td class="text-end">
                    {on_view.map(|show| view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-secondary me-1"
                            on:click=move |_| show.run(id)
                        >
                            "View"
                        </button>
                    })}
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-primary me-1"
                        disabled=pending
                        on:click=move |_| editing.set(Some(selected.clone()))
                    >
                        "Edit"
                    </button>
                    <ConfirmButton
                        label="Deactivate"
                        button_class="btn btn-sm btn-outline-danger"
                        disabled=Signal::stored(pending)
                        on_confirm=move |_| deactivate.run(id)
                    />
                    {failure.map(|message| view! { <div class="small text-danger">{message}</div> })}
                </td>
            </tr>
        }
    };

    view! {
        <section class="employee-table card mb-4">
            <div class="card-header d-flex gap-2 align-items-center">
                <h5 class="mb-0 me-auto">"Employees"</h5>
                <input
                    type="search"
                    class="form-control w-auto"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="form-select w-auto"
                    on:change=move |ev| department.set(event_target_value(&ev))
                >
                    <option value="">"All departments"</option>
                    {departments.into_iter().map(|d| view! { <option value=d.clone()>{d.clone()}</option> }).collect_view()}
                </select>
            </div>
            <div class="card-body">
                <NoticeBanner notice=notice />
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Designation"</th>
                            <th>"Department"</th>
                            <th>"Role"</th>
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
                                        <tr><td colspan="6" class="text-center text-muted">{text.to_string()}</td></tr>
                                    }
                                    .into_any(),
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>

                {move || editing.get().map(|emp| {
                    let initial = FormValues::new()
                        .with("name", &emp.name)
                        .with("email", &emp.email)
                        .with("designation", emp.designation.as_deref().unwrap_or(""))
                        .with("department", emp.department.as_deref().unwrap_or(""))
                        .with("role", &emp.role);
                    view! {
                        <div class="edit-panel border rounded p-3">
                            <div class="d-flex justify-content-between">
                                <h6>"Edit " {emp.name.clone()}</h6>
                                <button type="button" class="btn-close" on:click=move |_| editing.set(None)></button>
                            </div>
                            <GatewayForm
                                spec=endpoints::edit_employee(emp.user_id)
                                fields=EDIT_FIELDS
                                initial=initial
                                submit_label="Save Changes"
                                busy_label="Saving..."
                            />
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
