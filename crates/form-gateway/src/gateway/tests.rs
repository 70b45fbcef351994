//! Gateway Tests
//!
//! Drives the gateway against a scripted transport.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::*;
use crate::transport::{Method, Response};
use crate::validation::PasswordPolicy;
use crate::view_model::SubmitControl;

/// Replays canned responses and records what was sent
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<GatewayResult<Response>>>,
    sent: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    fn replying(reply: GatewayResult<Response>) -> Self {
        let t = Self::default();
        t.replies.borrow_mut().push_back(reply);
        t
    }

    fn ok(body: &str) -> Self {
        Self::replying(Ok(Response {
            status: 200,
            body: body.to_string(),
        }))
    }

    fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> GatewayResult<Response> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("no scripted reply".into())))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn password_spec(on_success: SuccessAction) -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("current_password", "Current password")
            .required("new_password", "New password")
            .password("new_password", PasswordPolicy::ACCOUNT)
            .confirmation("new_password", "confirm_password"),
        Endpoint::success("/employee/change-password").on_failure("Server error"),
        on_success,
    )
}

fn filled_vm() -> FormViewModel {
    let mut vm = FormViewModel::new(
        &["current_password", "new_password", "confirm_password"],
        SubmitControl::new("Update Password", "Updating..."),
    );
    vm.set("current_password", "old-secret");
    vm.set("new_password", "new-secret-1");
    vm.set("confirm_password", "new-secret-1");
    vm
}

#[tokio::test]
async fn test_blank_required_fields_send_nothing() {
    let gateway = Gateway::new(ScriptedTransport::default());
    let mut vm = FormViewModel::new(
        &["current_password", "new_password", "confirm_password"],
        SubmitControl::new("Update Password", "Updating..."),
    );

    let outcome = gateway.submit_on(&password_spec(SuccessAction::ResetForm), &mut vm, today()).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref r) if r.errors.len() == 2));
    assert_eq!(gateway.transport().sent_count(), 0);
    assert!(vm.is_invalid("current_password"));
    assert!(vm.is_invalid("new_password"));
    assert!(!vm.is_busy());
}

#[tokio::test]
async fn test_success_releases_control_and_picks_one_action() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":true,"message":"Password changed ✅"}"#));
    let mut vm = filled_vm();

    let outcome = gateway.submit_on(&password_spec(SuccessAction::ResetForm), &mut vm, today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded {
            message: "Password changed ✅".into(),
            action: PostSuccess::ResetForm,
        }
    );
    assert!(!vm.is_busy());
    assert_eq!(vm.control().label(), "Update Password");
    assert_eq!(vm.value("new_password"), "");
    assert_eq!(vm.notice(), Some(&Notice::Success("Password changed ✅".into())));
    assert_eq!(gateway.transport().sent_count(), 1);
}

#[tokio::test]
async fn test_json_body_carries_field_values() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":true}"#));
    let mut vm = filled_vm();
    gateway.submit_on(&password_spec(SuccessAction::Reload), &mut vm, today()).await;

    let sent = gateway.transport().sent.borrow();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/employee/change-password");
    assert_eq!(
        sent[0].body,
        RequestBody::Json(serde_json::json!({
            "current_password": "old-secret",
            "new_password": "new-secret-1",
            "confirm_password": "new-secret-1",
        }))
    );
}

#[tokio::test]
async fn test_redirect_uses_envelope_url_or_reloads() {
    let spec = FormSpec::new(Validator::new(), Endpoint::success("/auth/login"), SuccessAction::Redirect);

    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":true,"message":"Welcome","redirect_url":"/admin/dashboard"}"#));
    let mut vm = FormViewModel::new(&[], SubmitControl::new("Login", "Signing in..."));
    let outcome = gateway.submit_on(&spec, &mut vm, today()).await;
    assert!(matches!(outcome, SubmitOutcome::Succeeded { action: PostSuccess::Redirect(ref u), .. } if u == "/admin/dashboard"));

    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":true,"message":"Welcome"}"#));
    let outcome = gateway.submit_on(&spec, &mut vm, today()).await;
    assert!(matches!(outcome, SubmitOutcome::Succeeded { action: PostSuccess::Reload, .. }));
}

#[tokio::test]
async fn test_business_failure_keeps_values_and_shows_server_text() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":false,"message":"Current password is incorrect"}"#));
    let mut vm = filled_vm();

    let outcome = gateway.submit_on(&password_spec(SuccessAction::Reload), &mut vm, today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Declined {
            message: "Current password is incorrect".into()
        }
    );
    assert_eq!(vm.value("new_password"), "new-secret-1");
    assert_eq!(vm.notice(), Some(&Notice::Error("Current password is incorrect".into())));
    assert!(!vm.is_busy());
}

#[tokio::test]
async fn test_empty_failure_message_uses_fallback() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":false}"#));
    let mut vm = filled_vm();
    let outcome = gateway.submit_on(&password_spec(SuccessAction::Reload), &mut vm, today()).await;
    assert_eq!(outcome, SubmitOutcome::Declined { message: "Server error".into() });
}

#[tokio::test]
async fn test_network_rejection_is_generic_and_releases_control() {
    let gateway = Gateway::new(ScriptedTransport::replying(Err(GatewayError::Transport("TypeError: Failed to fetch".into()))))
        .with_network_error("Server error. Please try again.");
    let mut vm = filled_vm();

    let outcome = gateway.submit_on(&password_spec(SuccessAction::Reload), &mut vm, today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Server error. Please try again.".into()
        }
    );
    assert!(!vm.is_busy());
    assert_eq!(vm.notice().map(Notice::text), Some("Server error. Please try again."));
}

#[tokio::test]
async fn test_non_2xx_and_malformed_bodies_are_generic() {
    for reply in [
        Response {
            status: 500,
            body: r#"{"success":false,"message":"Traceback ..."}"#.into(),
        },
        Response {
            status: 200,
            body: "<!doctype html><title>Login</title>".into(),
        },
    ] {
        let gateway = Gateway::new(ScriptedTransport::replying(Ok(reply)));
        let mut vm = filled_vm();
        let outcome = gateway.submit_on(&password_spec(SuccessAction::Reload), &mut vm, today()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: DEFAULT_NETWORK_ERROR.into()
            }
        );
        assert!(!vm.is_busy());
    }
}

#[tokio::test]
async fn test_busy_form_ignores_second_submit() {
    let gateway = Gateway::new(ScriptedTransport::default());
    let mut vm = filled_vm();
    let spec = password_spec(SuccessAction::Reload);

    assert!(gateway.prepare(&spec, &mut vm, today()).is_ok());
    assert_eq!(vm.control().label(), "Updating...");
    assert_eq!(gateway.prepare(&spec, &mut vm, today()), Err(SubmitOutcome::Ignored));

    let outcome = gateway.settle(&spec, &mut vm, Err(GatewayError::Transport("offline".into())));
    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert!(!vm.is_busy());
}

#[tokio::test]
async fn test_multipart_includes_attachments() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"status":"success","message":"Profile updated successfully ✅"}"#));
    let spec = FormSpec::new(
        Validator::new().required("name", "Name"),
        Endpoint::status("/admin/profile").multipart(),
        SuccessAction::CloseModal("profileModal".into()),
    );
    let mut vm = FormViewModel::new(&["name"], SubmitControl::new("Save", "Saving..."));
    vm.set("name", "Admin User");
    vm.attach(FormPart::File {
        name: "avatar".into(),
        file_name: "me.png".into(),
        mime: "image/png".into(),
        bytes: vec![0x89, 0x50],
    });

    let outcome = gateway.submit_on(&spec, &mut vm, today()).await;
    assert!(matches!(outcome, SubmitOutcome::Succeeded { action: PostSuccess::CloseModal(ref id), .. } if id == "profileModal"));

    let sent = gateway.transport().sent.borrow();
    match &sent[0].body {
        RequestBody::Multipart(parts) => {
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0], FormPart::text("name", "Admin User"));
            assert_eq!(parts[1].name(), "avatar");
        }
        other => panic!("expected multipart, got {:?}", other),
    }
}

#[tokio::test]
async fn test_row_action_removes_row_once() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"status":"success","message":"Project closed"}"#));
    let mut table = TableViewModel::new("No projects pending review");
    table.load(vec![(7, "Apollo"), (9, "Hermes")]);
    let action = RowAction::new(
        Endpoint::status("/admin/review_project/7"),
        RequestBody::Json(serde_json::json!({"action": "accept", "reason": ""})),
    );

    let first = gateway.act_on_row(action.clone(), &mut table, 7).await;
    let second = gateway.act_on_row(action, &mut table, 7).await;

    assert_eq!(first, RowOutcome::Removed { message: "Project closed".into() });
    assert_eq!(second, RowOutcome::Ignored);
    assert_eq!(table.count(), 1);
    assert_eq!(gateway.transport().sent_count(), 1);
}

#[tokio::test]
async fn test_row_action_failure_flags_row() {
    let gateway = Gateway::new(ScriptedTransport::replying(Ok(Response {
        status: 400,
        body: r#"{"status":"error","message":"Cannot delete Admin ❌"}"#.into(),
    })));
    let mut table = TableViewModel::new("No employees");
    table.load(vec![(1, "root")]);
    let action = RowAction::new(
        Endpoint::status("/admin/employee/delete/1").multipart(),
        RequestBody::Multipart(vec![FormPart::text("user_id", "1")]),
    );

    let outcome = gateway.act_on_row(action, &mut table, 1).await;

    assert_eq!(
        outcome,
        RowOutcome::Failed {
            message: DEFAULT_NETWORK_ERROR.into()
        }
    );
    assert_eq!(table.count(), 1);
    assert!(matches!(table.get(1).map(|r| &r.state), Some(crate::table::RowState::Failed(_))));
}

#[tokio::test]
async fn test_fetch_json_list() {
    #[derive(serde::Deserialize)]
    struct Pending {
        project_id: u32,
    }
    let gateway = Gateway::new(ScriptedTransport::ok(r#"[{"project_id":3},{"project_id":5}]"#));
    let list: Vec<Pending> = gateway.fetch_json("/admin/api/pending_review_projects").await.unwrap();
    assert_eq!(list.iter().map(|p| p.project_id).collect::<Vec<_>>(), vec![3, 5]);
    assert_eq!(gateway.transport().sent.borrow()[0].method, Method::Get);
}

#[tokio::test]
async fn test_form_post_answered_by_page_succeeds() {
    let gateway = Gateway::new(ScriptedTransport::ok("<!doctype html><html><title>Projects</title></html>"));
    let spec = crate::endpoints::create_project();
    let mut vm = FormViewModel::new(
        &["project_name", "description", "start_date", "end_date"],
        SubmitControl::new("Create Project", "Creating..."),
    );
    vm.set("project_name", "Atlas");
    vm.set("start_date", "2026-03-20");
    vm.set("end_date", "2026-06-30");

    let outcome = gateway.submit_on(&spec, &mut vm, today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded {
            message: "Project created successfully".into(),
            action: PostSuccess::Reload,
        }
    );
    assert!(!vm.is_busy());
    assert_eq!(gateway.transport().sent.borrow()[0].path, "/admin/projects");
}

#[tokio::test]
async fn test_page_reply_to_project_delete_removes_row() {
    let gateway = Gateway::new(ScriptedTransport::ok("<!doctype html><title>Projects</title>"));
    let mut table = TableViewModel::new("No projects");
    table.load(vec![(3, "Atlas"), (4, "Borealis")]);

    let outcome = gateway.act_on_row(crate::endpoints::delete_project(3), &mut table, 3).await;

    assert_eq!(outcome, RowOutcome::Removed { message: "Project deleted".into() });
    assert_eq!(table.count(), 1);
}

/// Multipart part names produced by `prepare` for a form filled with `values`
fn part_names(spec: &FormSpec, values: &[(&str, &str)]) -> Vec<String> {
    let gateway = Gateway::new(ScriptedTransport::default());
    let names: Vec<&str> = values.iter().map(|(n, _)| *n).collect();
    let mut vm = FormViewModel::new(&names, SubmitControl::new("Save", "Saving..."));
    for (name, value) in values {
        vm.set(name, value);
    }
    match gateway.prepare(spec, &mut vm, today()) {
        Ok(RequestBody::Multipart(parts)) => parts.iter().map(|p| p.name().to_string()).collect(),
        other => panic!("expected a multipart body, got {:?}", other),
    }
}

#[test]
fn test_task_bodies_carry_server_field_names() {
    let create = part_names(
        &crate::endpoints::create_task(),
        &[
            ("title", "Wireframes"),
            ("description", ""),
            ("assigned_to", "4"),
            ("priority", "high"),
            ("due_date", "2026-04-01"),
        ],
    );
    assert_eq!(create, vec!["title", "description", "assigned_to", "priority", "due_date"]);

    let update = part_names(
        &crate::endpoints::update_task(9),
        &[
            ("title", "Wireframes"),
            ("description", "v2"),
            ("assigned_to", "4"),
            ("priority", "medium"),
            ("due_date", ""),
            ("project_id", "2"),
        ],
    );
    assert!(update.contains(&"project_id".to_string()));
    assert!(update.contains(&"priority".to_string()));
}

#[test]
fn test_leader_profile_and_member_bodies() {
    let profile = part_names(
        &crate::endpoints::leader_profile(),
        &[("name", "Priya"), ("email", "priya@hub.io"), ("designation", "Lead")],
    );
    assert_eq!(profile, vec!["name", "email", "designation"]);

    let member = part_names(&crate::endpoints::add_team_member(), &[("user_id", "12"), ("role", "tester")]);
    assert_eq!(member, vec!["user_id", "role"]);
}

#[tokio::test]
async fn test_submitted_project_stays_listed() {
    let gateway = Gateway::new(ScriptedTransport::ok(r#"{"success":true,"message":"Project submitted for review"}"#));
    let mut table = TableViewModel::new("No projects assigned");
    table.load(vec![(2, "Atlas"), (5, "Borealis")]);

    let outcome = gateway.act_on_row(crate::endpoints::submit_project(2), &mut table, 2).await;

    assert_eq!(outcome, RowOutcome::Updated { message: "Project submitted for review".into() });
    assert_eq!(table.count(), 2);
    assert_eq!(table.get(2).map(|r| &r.state), Some(&crate::table::RowState::Visible));
}
