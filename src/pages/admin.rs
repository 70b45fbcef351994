//! Admin Dashboard

use form_gateway::{endpoints, FormValues};
use leptos::prelude::*;

use super::DashboardHeader;
use crate::browser;
use crate::components::{
    ClosedProjects, EmployeeDetails, EmployeeTable, FieldDef, FieldKind, GatewayForm, ProfileCard, ProjectDetails,
    RecentProjects, Record, RecordTable, ReviewKind, ReviewQueue, RiskProjects, ROLES,
};
use crate::models::Project;
use crate::store::{use_app_store, AppStateStoreFields};

/// Page-embedded JSON with all projects
const PROJECTS: &str = "projects-data";

const EMPLOYEE_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("username", "Username", FieldKind::Text),
    FieldDef::new("designation", "Designation", FieldKind::Text),
    FieldDef::new("department", "Department", FieldKind::Text),
    FieldDef::new("role", "Role", FieldKind::Select(ROLES)),
    FieldDef::new("password", "Password", FieldKind::Password),
    FieldDef::new("confirm_password", "Confirm password", FieldKind::Password),
];

const PROJECT_FIELDS: &[FieldDef] = &[
    FieldDef::new("project_name", "Project name", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("start_date", "Start date", FieldKind::Date),
    FieldDef::new("end_date", "End date", FieldKind::Date),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    let store = use_app_store();
    let projects: Vec<Project> = browser::embedded_json(PROJECTS).unwrap_or_default();
    let records = projects
        .iter()
        .map(|p| {
            Record::new(
                p.project_id,
                [
                    p.project_name.clone(),
                    p.start_date.clone().unwrap_or_default(),
                    p.end_date.clone().unwrap_or_default(),
                    p.status.clone(),
                ],
            )
        })
        .collect::<Vec<_>>();
    let projects = StoredValue::new(projects);
    let editing = RwSignal::new(None::<Project>);
    let viewed_employee = RwSignal::new(None::<u32>);
    let viewed_project = RwSignal::new(None::<u32>);

    let on_edit = Callback::new(move |id: u32| {
        let project = projects.with_value(|list| list.iter().find(|p| p.project_id == id).cloned());
        editing.set(project);
    });

    view! {
        <DashboardHeader title="Admin Dashboard">
            <span class="badge bg-warning text-dark">
                "Pending reviews: " {move || store.pending_reviews().get()}
            </span>
        </DashboardHeader>
        <div class="container">
            <div class="row">
                <div class="col-lg-8">
                    <ReviewQueue kind=ReviewKind::Project />
                    <EmployeeTable on_view=move |id: u32| viewed_employee.set(Some(id)) />
                    <EmployeeDetails selected=viewed_employee />
                    <RecordTable
                        title="Projects"
                        headers=&["Name", "Start", "End", "Status"]
                        records=records
                        empty_message="No projects yet"
                        action_label="Delete"
                        action=endpoints::delete_project
                        on_edit=on_edit
                        on_view=move |id: u32| viewed_project.set(Some(id))
                    />
                    <ProjectDetails selected=viewed_project />
                    {move || editing.get().map(|p| {
                        let initial = FormValues::new()
                            .with("project_name", &p.project_name)
                            .with("description", p.description.as_deref().unwrap_or(""))
                            .with("start_date", p.start_date.as_deref().unwrap_or(""))
                            .with("end_date", p.end_date.as_deref().unwrap_or(""));
                        view! {
                            <section class="card mb-4">
                                <div class="card-header d-flex justify-content-between">
                                    <h5 class="mb-0">"Edit " {p.project_name.clone()}</h5>
                                    <button type="button" class="btn-close" on:click=move |_| editing.set(None)></button>
                                </div>
                                <div class="card-body">
                                    <GatewayForm
                                        spec=endpoints::edit_project(p.project_id)
                                        fields=PROJECT_FIELDS
                                        initial=initial
                                        submit_label="Save Project"
                                        busy_label="Saving..."
                                    />
                                </div>
                            </section>
                        }
                    })}
                </div>
                <div class="col-lg-4">
                    <RiskProjects />
                    <RecentProjects />
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"Add Employee"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::add_employee()
                                fields=EMPLOYEE_FIELDS
                                confirm=("password", "confirm_password")
                                submit_label="Add Employee"
                                busy_label="Adding..."
                            />
                        </div>
                    </section>
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"New Project"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::create_project()
                                fields=PROJECT_FIELDS
                                submit_label="Create Project"
                                busy_label="Creating..."
                            />
                        </div>
                    </section>
                    <ClosedProjects />
                    <ProfileCard />
                </div>
            </div>
        </div>
    }
}
