//! Endpoint Catalogue
//!
//! One constructor per call site. Each names its own envelope shape, body
//! encoding, password policy and post-success action; none are shared
//! across roles.

use serde_json::json;

use crate::gateway::{Endpoint, FormSpec, RowAction, SuccessAction};
use crate::transport::{FormPart, RequestBody};
use crate::validation::{PasswordPolicy, Validator};

// ========================
// Admin
// ========================

/// Add-employee modal. Multipart form post answered by a redirect, 6–12 char passwords.
pub fn add_employee() -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("name", "Name")
            .required("email", "Email")
            .required("username", "Username")
            .required("role", "Role")
            .username("username")
            .password("password", PasswordPolicy::ADMIN)
            .confirmation("password", "confirm_password"),
        Endpoint::redirect("/admin/employees")
            .multipart()
            .on_failure("Error adding employee")
            .on_success("Employee added successfully"),
        SuccessAction::Reload,
    )
}

pub fn edit_employee(id: u32) -> FormSpec {
    FormSpec::new(
        Validator::new().required("role", "Role"),
        Endpoint::status(&format!("/admin/employee/edit/{}", id))
            .multipart()
            .on_failure("An error occurred while updating employee ❌"),
        SuccessAction::Reload,
    )
}

/// Soft delete (deactivate)
pub fn delete_employee(id: u32) -> RowAction {
    RowAction::new(
        Endpoint::status(&format!("/admin/employee/delete/{}", id))
            .multipart()
            .on_failure("An error occurred while deactivating employee ❌"),
        RequestBody::Multipart(vec![FormPart::text("user_id", &id.to_string())]),
    )
}

pub fn create_project() -> FormSpec {
    FormSpec::new(
        project_rules(),
        Endpoint::redirect("/admin/projects")
            .multipart()
            .on_failure("Error creating project")
            .on_success("Project created successfully"),
        SuccessAction::Reload,
    )
}

pub fn edit_project(id: u32) -> FormSpec {
    FormSpec::new(
        project_rules(),
        Endpoint::redirect(&format!("/admin/projects/edit/{}", id))
            .multipart()
            .on_failure("Error updating project")
            .on_success("Project updated successfully"),
        SuccessAction::Reload,
    )
}

pub fn delete_project(id: u32) -> RowAction {
    RowAction::new(
        Endpoint::redirect(&format!("/admin/projects/delete/{}", id))
            .multipart()
            .on_failure("Error deleting project")
            .on_success("Project deleted"),
        RequestBody::Multipart(Vec::new()),
    )
}

fn project_rules() -> Validator {
    Validator::new()
        .required("project_name", "Project name")
        .date_range("start_date", "end_date")
}

/// Accept or reject a project waiting for review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject(String),
}

pub fn review_project(id: u32, decision: &ReviewDecision) -> RowAction {
    let (action, reason) = match decision {
        ReviewDecision::Accept => ("accept", ""),
        ReviewDecision::Reject(reason) => ("reject", reason.as_str()),
    };
    RowAction::new(
        Endpoint::status(&format!("/admin/review_project/{}", id)).on_failure("Review failed"),
        RequestBody::Json(json!({ "action": action, "reason": reason })),
    )
}

/// Reason box of the reject modal (also used for leader task rejection)
pub fn rejection_reason() -> Validator {
    Validator::new().required_with("reason", "Please provide a reason for rejection")
}

pub fn admin_profile() -> FormSpec {
    FormSpec::new(
        Validator::new().required("name", "Full name").required("email", "Email"),
        Endpoint::status("/admin/profile")
            .multipart()
            .on_failure("Something went wrong ❌"),
        SuccessAction::ResetForm,
    )
}

// ========================
// Auth
// ========================

pub fn login() -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("email", "Email")
            .required("password", "Password"),
        Endpoint::success("/auth/login"),
        SuccessAction::Redirect,
    )
}

/// Signup: at least 8 characters
pub fn signup() -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("username", "Username")
            .required("email", "Email")
            .required("password", "Password")
            .required("confirm_password", "Confirm password")
            .username("username")
            .password("password", PasswordPolicy::ACCOUNT)
            .confirmation("password", "confirm_password"),
        Endpoint::success("/auth/signup").on_failure("Server error. Try again."),
        SuccessAction::Redirect,
    )
}

pub fn send_otp() -> FormSpec {
    FormSpec::new(
        Validator::new().required("email", "Email"),
        Endpoint::success("/auth/send-otp").on_success("OTP sent to your email"),
        SuccessAction::Redirect,
    )
}

pub fn verify_otp() -> FormSpec {
    FormSpec::new(
        Validator::new().required("email", "Email").required("otp", "OTP"),
        Endpoint::success("/auth/verify-otp"),
        SuccessAction::Redirect,
    )
}

/// Password reset from an emailed token: at least 8 characters
pub fn reset_password(token: &str) -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("password", "Password")
            .required("confirm_password", "Confirm password")
            .password("password", PasswordPolicy::ACCOUNT)
            .confirmation("password", "confirm_password"),
        Endpoint::success(&format!("/auth/reset-password/{}", token)),
        SuccessAction::Redirect,
    )
}

// ========================
// Employee
// ========================

/// Employee change-password: at least 8 characters, matching the server rule
pub fn employee_change_password() -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("current_password", "Current password")
            .required("new_password", "New password")
            .required("confirm_password", "Confirm password")
            .password("new_password", PasswordPolicy::ACCOUNT)
            .confirmation("new_password", "confirm_password"),
        Endpoint::success("/employee/change-password")
            .on_failure("Server error")
            .on_success("Password changed ✅"),
        SuccessAction::ResetForm,
    )
}

pub fn submit_task(task_id: u32) -> RowAction {
    RowAction::new(
        Endpoint::success(&format!("/employee/submit-task/{}", task_id))
            .on_failure("Error submitting task")
            .on_success("Task submitted successfully!"),
        RequestBody::Empty,
    )
}

// ========================
// Project leader
// ========================

/// Leader change-password: at least 6 characters, matching the server rule
pub fn leader_change_password() -> FormSpec {
    FormSpec::new(
        Validator::new()
            .required("current_password", "Current password")
            .required("new_password", "New password")
            .required("confirm_password", "Confirm password")
            .password("new_password", PasswordPolicy::LEADER)
            .confirmation("new_password", "confirm_password"),
        Endpoint::success("/leader/change_password").multipart(),
        SuccessAction::ResetForm,
    )
}

/// Name, email and designation; the server ignores anything else
pub fn leader_profile() -> FormSpec {
    FormSpec::new(
        Validator::new().required("name", "Name").required("email", "Email"),
        Endpoint::success("/leader/update_profile").multipart(),
        SuccessAction::Reload,
    )
}

pub fn create_task() -> FormSpec {
    FormSpec::new(
        task_rules(),
        Endpoint::success("/leader/create_task").multipart(),
        SuccessAction::CloseModal("createTaskModal".to_string()),
    )
}

/// Task edit; the server also reads the task's `project_id`
pub fn update_task(task_id: u32) -> FormSpec {
    FormSpec::new(
        task_rules().required("project_id", "Project"),
        Endpoint::success(&format!("/leader/update_task/{}", task_id)).multipart(),
        SuccessAction::CloseModal("editTaskModal".to_string()),
    )
}

fn task_rules() -> Validator {
    Validator::new()
        .required("title", "Title")
        .required("assigned_to", "Assignee")
        .required("priority", "Priority")
        .date_range_labeled("", "Start date", "due_date", "Due date")
}

pub fn delete_task(task_id: u32) -> RowAction {
    leader_row(&format!("/leader/delete_task/{}", task_id), RequestBody::Empty)
}

pub fn approve_task(task_id: u32) -> RowAction {
    leader_row(&format!("/leader/approve_task/{}", task_id), RequestBody::Empty)
}

pub fn reject_task(task_id: u32, reason: &str) -> RowAction {
    leader_row(
        &format!("/leader/reject_task/{}", task_id),
        RequestBody::Json(json!({ "reason": reason })),
    )
}

pub fn add_team_member() -> FormSpec {
    FormSpec::new(
        Validator::new().required("user_id", "Employee").required("role", "Role"),
        Endpoint::success("/leader/add_team_member").multipart(),
        SuccessAction::Reload,
    )
}

pub fn remove_team_member(user_id: u32) -> RowAction {
    leader_row(
        "/leader/remove_team_member",
        RequestBody::Multipart(vec![FormPart::text("user_id", &user_id.to_string())]),
    )
}

/// The project stays listed with its new status
pub fn submit_project(project_id: u32) -> RowAction {
    leader_row(&format!("/leader/submit_project/{}", project_id), RequestBody::Empty)
        .keeping_row()
}

fn leader_row(path: &str, body: RequestBody) -> RowAction {
    let endpoint = match &body {
        RequestBody::Multipart(_) => Endpoint::success(path).multipart(),
        _ => Endpoint::success(path),
    };
    RowAction::new(endpoint, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeShape;
    use crate::gateway::Encoding;
    use crate::validation::{FormValues, Rule};
    use chrono::NaiveDate;

    fn policy_of(spec: &FormSpec) -> Option<PasswordPolicy> {
        spec.validator.rules().iter().find_map(|r| match r {
            Rule::Password { policy, .. } => Some(*policy),
            _ => None,
        })
    }

    #[test]
    fn test_password_policy_per_endpoint() {
        assert_eq!(policy_of(&add_employee()), Some(PasswordPolicy::ADMIN));
        assert_eq!(policy_of(&signup()), Some(PasswordPolicy::ACCOUNT));
        assert_eq!(policy_of(&reset_password("t0k")), Some(PasswordPolicy::ACCOUNT));
        assert_eq!(policy_of(&employee_change_password()), Some(PasswordPolicy::ACCOUNT));
        assert_eq!(policy_of(&leader_change_password()), Some(PasswordPolicy::LEADER));
    }

    #[test]
    fn test_shapes_follow_server() {
        assert_eq!(add_employee().endpoint.shape, EnvelopeShape::Redirect);
        assert_eq!(add_employee().endpoint.encoding, Encoding::Multipart);
        assert_eq!(create_project().endpoint.shape, EnvelopeShape::Redirect);
        assert_eq!(edit_project(3).endpoint.shape, EnvelopeShape::Redirect);
        assert_eq!(delete_project(3).endpoint.shape, EnvelopeShape::Redirect);
        assert_eq!(edit_employee(3).endpoint.shape, EnvelopeShape::Status);
        assert_eq!(delete_employee(3).endpoint.shape, EnvelopeShape::Status);
        assert_eq!(login().endpoint.shape, EnvelopeShape::Success);
        assert_eq!(review_project(1, &ReviewDecision::Accept).endpoint.shape, EnvelopeShape::Status);
        assert_eq!(approve_task(1).endpoint.shape, EnvelopeShape::Success);
    }

    #[test]
    fn test_review_body() {
        let action = review_project(12, &ReviewDecision::Reject("Scope unclear".into()));
        assert_eq!(action.endpoint.path, "/admin/review_project/12");
        assert_eq!(action.body, RequestBody::Json(json!({"action": "reject", "reason": "Scope unclear"})));
    }

    #[test]
    fn test_rejection_reason_required() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let report = rejection_reason().validate(&FormValues::new().with("reason", "  "), today);
        assert_eq!(report.messages(), vec!["Please provide a reason for rejection"]);
    }

    #[test]
    fn test_task_due_date_alone() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let values = FormValues::new()
            .with("title", "Wireframes")
            .with("assigned_to", "4")
            .with("priority", "high")
            .with("due_date", "2026-03-14");
        let report = create_task().validator.validate(&values, today);
        assert_eq!(report.messages(), vec!["Due date cannot be in the past"]);
        assert!(report.is_invalid("due_date"));
    }

    #[test]
    fn test_task_requires_priority_and_edit_requires_project() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let values = FormValues::new().with("title", "Wireframes").with("assigned_to", "4");

        let created = create_task().validator.validate(&values, today);
        assert_eq!(created.invalid_fields(), vec!["priority"]);

        let updated = update_task(9).validator.validate(&values, today);
        assert_eq!(updated.invalid_fields(), vec!["priority", "project_id"]);
        assert_eq!(updated.messages(), vec!["Priority is required", "Project is required"]);
    }

    #[test]
    fn test_only_submit_project_keeps_row() {
        assert!(submit_project(2).keeps_row);
        assert!(!delete_task(2).keeps_row);
        assert!(!remove_team_member(2).keeps_row);
        assert!(!delete_project(2).keeps_row);
    }

    #[test]
    fn test_remove_member_is_multipart() {
        let action = remove_team_member(8);
        assert_eq!(action.endpoint.encoding, Encoding::Multipart);
        assert_eq!(action.body, RequestBody::Multipart(vec![FormPart::text("user_id", "8")]));
    }
}
