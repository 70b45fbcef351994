//! Frontend Models
//!
//! Data structures matching server JSON (list endpoints and page-embedded data).

use form_gateway::{FormValues, RowText};
use serde::{Deserialize, Serialize};

/// Row of `/admin/api/pending_review_projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingProject {
    pub project_id: u32,
    pub project_name: String,
    pub leader_name: Option<String>,
    pub progress: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Row of `/admin/api/closed_projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedProject {
    pub project_id: u32,
    pub project_name: String,
    pub leader_name: Option<String>,
    pub end_date: Option<String>,
}

/// Task a team member submitted for leader review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedTask {
    pub task_id: u32,
    pub title: String,
    pub assignee_name: Option<String>,
    pub due_date: Option<String>,
}

/// Admin employee table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub user_id: u32,
    pub name: String,
    pub email: String,
    pub designation: Option<String>,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl RowText for Employee {
    fn text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name,
            self.email,
            self.designation.as_deref().unwrap_or(""),
            self.role,
            self.department.as_deref().unwrap_or("")
        )
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "department" => self.department.clone(),
            "role" => Some(self.role.clone()),
            _ => None,
        }
    }
}

/// Employee "my work" row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTask {
    pub task_id: u32,
    pub title: String,
    pub status: String,
    pub priority: Option<String>,
    pub due_date: Option<String>,
}

impl EmployeeTask {
    /// Only tasks still being worked on can be sent for review
    pub fn can_submit(&self) -> bool {
        matches!(self.status.as_str(), "pending" | "in_progress" | "rejected")
    }
}

/// Admin project list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: u32,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
}

/// Task as a project leader manages it; also the `/leader/get_task/{id}` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderTask {
    pub task_id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assigned_to: Option<u32>,
    #[serde(default)]
    pub assignee_name: Option<String>,
    pub project_id: Option<u32>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub status: String,
}

impl LeaderTask {
    /// Values for the edit-task form, keyed by the names the server reads
    pub fn form_values(&self) -> FormValues {
        FormValues::new()
            .with("title", &self.title)
            .with("description", self.description.as_deref().unwrap_or(""))
            .with("assigned_to", &self.assigned_to.map(|id| id.to_string()).unwrap_or_default())
            .with("priority", &self.priority.as_deref().unwrap_or("").to_lowercase())
            .with("due_date", self.due_date.as_deref().unwrap_or(""))
            .with("project_id", &self.project_id.map(|id| id.to_string()).unwrap_or_default())
    }
}

/// The signed-in leader, embedded in the leader page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub designation: Option<String>,
}

impl LeaderProfile {
    pub fn form_values(&self) -> FormValues {
        FormValues::new()
            .with("name", &self.name)
            .with("email", &self.email)
            .with("designation", self.designation.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user_id: u32,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

/// Row of `/admin/api/risk-projects`: behind schedule and due within a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProject {
    pub project_name: String,
    pub progress: Option<u32>,
    pub end_date: Option<String>,
}

/// Row of `/admin/api/recent-projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentProject {
    pub project_name: String,
    pub status: Option<String>,
    pub progress: Option<u32>,
    pub end_date: Option<String>,
}

/// `/admin/api/project/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project: ProjectSummary,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_id: u32,
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub progress: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub leader_name: Option<String>,
    #[serde(default)]
    pub leader_designation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub name: String,
    pub designation: Option<String>,
    #[serde(default)]
    pub is_leader: bool,
}

/// `/admin/api/employee/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    pub employee: EmployeeProfile,
    #[serde(default)]
    pub projects: Vec<EmployeeProject>,
    #[serde(default)]
    pub team_members: Vec<Colleague>,
    #[serde(default)]
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub name: String,
    pub username: Option<String>,
    pub email: String,
    pub role: String,
    pub designation: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_registered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProject {
    pub project_id: u32,
    pub project_name: String,
    pub status: Option<String>,
}

/// Someone sharing a project with the viewed employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colleague {
    pub user_id: u32,
    pub name: String,
    pub role: Option<String>,
    pub project_role: Option<String>,
}

/// Common row of the review queues (projects for admins, tasks for leaders)
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewItem {
    pub id: u32,
    pub title: String,
    pub owner: Option<String>,
    pub progress: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<PendingProject> for ReviewItem {
    fn from(p: PendingProject) -> Self {
        Self {
            id: p.project_id,
            title: p.project_name,
            owner: p.leader_name,
            progress: p.progress,
            start_date: p.start_date,
            end_date: p.end_date,
        }
    }
}

impl From<SubmittedTask> for ReviewItem {
    fn from(t: SubmittedTask) -> Self {
        Self {
            id: t.task_id,
            title: t.title,
            owner: t.assignee_name,
            progress: None,
            start_date: None,
            end_date: t.due_date,
        }
    }
}
