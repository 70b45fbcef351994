//! Project Leader Dashboard

use form_gateway::{endpoints, FormValues};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::employee::CHANGE_PASSWORD_FIELDS;
use super::DashboardHeader;
use crate::browser;
use crate::commands;
use crate::components::{FieldDef, FieldKind, GatewayForm, Record, RecordTable, ReviewKind, ReviewQueue};
use crate::config::use_config;
use crate::models::{LeaderProfile, LeaderTask, Project, TeamMember};

const LEADER_TASKS: &str = "leader-tasks-data";
const TEAM: &str = "team-data";
const AVAILABLE_EMPLOYEES: &str = "available-employees-data";
const LEADER_PROJECTS: &str = "leader-projects-data";
const LEADER_PROFILE: &str = "leader-profile-data";

const CREATE_TASK_MODAL: &str = "createTaskModal";
const EDIT_TASK_MODAL: &str = "editTaskModal";

const PRIORITIES: &[(&str, &str)] = &[("low", "Low"), ("medium", "Medium"), ("high", "High")];

const TASK_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", "Title", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("assigned_to", "Assign to", FieldKind::Choices),
    FieldDef::new("priority", "Priority", FieldKind::Select(PRIORITIES)),
    FieldDef::new("due_date", "Due date", FieldKind::Date),
];

const EDIT_TASK_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", "Title", FieldKind::Text),
    FieldDef::new("description", "Description", FieldKind::TextArea),
    FieldDef::new("assigned_to", "Assign to", FieldKind::Choices),
    FieldDef::new("priority", "Priority", FieldKind::Select(PRIORITIES)),
    FieldDef::new("due_date", "Due date", FieldKind::Date),
    FieldDef::new("project_id", "Project", FieldKind::Hidden),
];

const MEMBER_ROLES: &[(&str, &str)] = &[
    ("developer", "Developer"),
    ("designer", "Designer"),
    ("tester", "Tester"),
    ("analyst", "Analyst"),
];

const MEMBER_FIELDS: &[FieldDef] = &[
    FieldDef::new("user_id", "Employee", FieldKind::Choices),
    FieldDef::new("role", "Role in project", FieldKind::Select(MEMBER_ROLES)),
];

const PROFILE_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", FieldKind::Text),
    FieldDef::new("email", "Email", FieldKind::Email),
    FieldDef::new("designation", "Designation", FieldKind::Text),
];

fn member_choices(members: &[TeamMember]) -> Vec<(String, String)> {
    members
        .iter()
        .map(|m| (m.user_id.to_string(), format!("{} ({})", m.name, m.email)))
        .collect()
}

#[component]
pub fn LeaderPage() -> impl IntoView {
    let tasks: Vec<LeaderTask> = browser::embedded_json(LEADER_TASKS).unwrap_or_default();
    let team: Vec<TeamMember> = browser::embedded_json(TEAM).unwrap_or_default();
    let available: Vec<TeamMember> = browser::embedded_json(AVAILABLE_EMPLOYEES).unwrap_or_default();
    let projects: Vec<Project> = browser::embedded_json(LEADER_PROJECTS).unwrap_or_default();
    let profile: LeaderProfile = browser::embedded_json(LEADER_PROFILE).unwrap_or_default();
    let config = StoredValue::new(use_config());

    let task_records = tasks
        .iter()
        .map(|t| {
            Record::new(
                t.task_id,
                [
                    t.title.clone(),
                    t.assignee_name.clone().unwrap_or_else(|| "Unassigned".to_string()),
                    t.due_date.clone().unwrap_or_default(),
                    t.status.clone(),
                ],
            )
        })
        .collect::<Vec<_>>();
    let team_records = team
        .iter()
        .map(|m| Record::new(m.user_id, [m.name.clone(), m.email.clone(), m.role.clone().unwrap_or_default()]))
        .collect::<Vec<_>>();
    let project_records = projects
        .iter()
        .map(|p| Record::new(p.project_id, [p.project_name.clone(), p.status.clone()]))
        .collect::<Vec<_>>();

    let assignees = StoredValue::new(member_choices(&team));
    let candidates = member_choices(&available);
    let tasks = StoredValue::new(tasks);
    let editing = RwSignal::new(None::<LeaderTask>);

    // Page copy first, then the server's current copy once it arrives
    let on_edit = Callback::new(move |id: u32| {
        let task = tasks.with_value(|list| list.iter().find(|t| t.task_id == id).cloned());
        editing.set(task);
        browser::show_modal(EDIT_TASK_MODAL);
        spawn_local(async move {
            match commands::get_task(&config.get_value(), id).await {
                Ok(task) => {
                    editing.try_set(Some(task));
                }
                Err(e) => log::warn!("[Leader] could not load task {}: {}", id, e),
            }
        });
    });

    // the task table is page data
    let refresh = move |_: FormValues| browser::reload();

    view! {
        <DashboardHeader title="Project Leader">
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| browser::show_modal(CREATE_TASK_MODAL)
            >
                "New Task"
            </button>
        </DashboardHeader>
        <div class="container">
            <div class="row">
                <div class="col-lg-8">
                    <ReviewQueue kind=ReviewKind::Task />
                    <RecordTable
                        title="Tasks"
                        headers=&["Title", "Assignee", "Due", "Status"]
                        records=task_records
                        empty_message="No tasks yet"
                        action_label="Delete"
                        action=endpoints::delete_task
                        on_edit=on_edit
                    />
                    <RecordTable
                        title="My Projects"
                        headers=&["Project", "Status"]
                        records=project_records
                        empty_message="No projects assigned"
                        action_label="Submit for review"
                        action=endpoints::submit_project
                    />
                </div>
                <div class="col-lg-4">
                    <RecordTable
                        title="Team"
                        headers=&["Name", "Email", "Role"]
                        records=team_records
                        empty_message="No team members yet"
                        action_label="Remove"
                        action=endpoints::remove_team_member
                    />
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"Add Team Member"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::add_team_member()
                                fields=MEMBER_FIELDS
                                choices=candidates
                                submit_label="Add Member"
                                busy_label="Adding..."
                            />
                        </div>
                    </section>
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"Profile"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::leader_profile()
                                fields=PROFILE_FIELDS
                                initial=profile.form_values()
                                submit_label="Update Profile"
                                busy_label="Updating..."
                            />
                        </div>
                    </section>
                    <section class="card mb-4">
                        <div class="card-header"><h5 class="mb-0">"Change Password"</h5></div>
                        <div class="card-body">
                            <GatewayForm
                                spec=endpoints::leader_change_password()
                                fields=CHANGE_PASSWORD_FIELDS
                                confirm=("new_password", "confirm_password")
                                submit_label="Change Password"
                                busy_label="Changing..."
                            />
                        </div>
                    </section>
                </div>
            </div>
        </div>

        <TaskModal id=CREATE_TASK_MODAL title="New Task">
            <GatewayForm
                spec=endpoints::create_task()
                fields=TASK_FIELDS
                choices=assignees.get_value()
                submit_label="Create Task"
                busy_label="Creating..."
                on_success=refresh
            />
        </TaskModal>
        <TaskModal id=EDIT_TASK_MODAL title="Edit Task">
            {move || editing.get().map(|t| {
                view! {
                    <GatewayForm
                        spec=endpoints::update_task(t.task_id)
                        fields=EDIT_TASK_FIELDS
                        initial=t.form_values()
                        choices=assignees.get_value()
                        submit_label="Save Task"
                        busy_label="Saving..."
                        on_success=refresh
                    />
                }
            })}
        </TaskModal>
    }
}

/// Bootstrap modal shell
#[component]
fn TaskModal(id: &'static str, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="modal fade" id=id tabindex="-1" aria-hidden="true">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form_model;
    use form_gateway::{FormPart, Gateway, HttpTransport, RequestBody, SubmitControl};

    fn part_names(spec: &form_gateway::FormSpec, fields: &[FieldDef], initial: &FormValues) -> Vec<String> {
        let gateway = Gateway::new(HttpTransport::new("http://localhost"));
        let mut vm = form_model(fields, Some(initial), SubmitControl::new("Save", "Saving..."));
        let today = chrono::NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        match gateway.prepare(spec, &mut vm, today) {
            Ok(RequestBody::Multipart(parts)) => parts.iter().map(|p: &FormPart| p.name().to_string()).collect(),
            other => panic!("expected a multipart body, got {:?}", other),
        }
    }

    fn task() -> LeaderTask {
        LeaderTask {
            task_id: 9,
            title: "Wireframes".into(),
            description: None,
            assigned_to: Some(4),
            assignee_name: Some("Kiran".into()),
            project_id: Some(2),
            priority: Some("High".into()),
            due_date: Some("2026-04-01".into()),
            status: "pending".into(),
        }
    }

    #[test]
    fn test_edit_task_form_sends_project_id() {
        let names = part_names(&endpoints::update_task(9), EDIT_TASK_FIELDS, &task().form_values());
        assert_eq!(
            names,
            vec!["title", "description", "assigned_to", "priority", "due_date", "project_id"]
        );
    }

    #[test]
    fn test_create_task_form_fields() {
        let initial = FormValues::new()
            .with("title", "Wireframes")
            .with("assigned_to", "4")
            .with("priority", "low");
        let names = part_names(&endpoints::create_task(), TASK_FIELDS, &initial);
        assert_eq!(names, vec!["title", "description", "assigned_to", "priority", "due_date"]);
    }

    #[test]
    fn test_profile_form_sends_designation() {
        let profile = LeaderProfile {
            name: "Priya".into(),
            email: "priya@hub.io".into(),
            designation: Some("Lead".into()),
        };
        let names = part_names(&endpoints::leader_profile(), PROFILE_FIELDS, &profile.form_values());
        assert_eq!(names, vec!["name", "email", "designation"]);
    }

    #[test]
    fn test_member_form_fields() {
        let initial = FormValues::new().with("user_id", "12").with("role", "tester");
        let names = part_names(&endpoints::add_team_member(), MEMBER_FIELDS, &initial);
        assert_eq!(names, vec!["user_id", "role"]);
    }
}
