//! Project Commands
//!
//! Project lists and details for the admin dashboard.

use crate::config::AppConfig;
use crate::models::{ClosedProject, PendingProject, ProjectDetail, RecentProject, RiskProject};

const PENDING_REVIEWS: &str = "/admin/api/pending_review_projects";
const CLOSED_PROJECTS: &str = "/admin/api/closed_projects";
const RISK_PROJECTS: &str = "/admin/api/risk-projects";
const RECENT_PROJECTS: &str = "/admin/api/recent-projects";

pub async fn list_pending_reviews(config: &AppConfig) -> Result<Vec<PendingProject>, String> {
    config
        .gateway()
        .fetch_json(PENDING_REVIEWS)
        .await
        .map_err(|e| e.to_string())
}

pub async fn list_closed_projects(config: &AppConfig) -> Result<Vec<ClosedProject>, String> {
    config
        .gateway()
        .fetch_json(CLOSED_PROJECTS)
        .await
        .map_err(|e| e.to_string())
}

/// Projects under 40% done and due within a week
pub async fn list_risk_projects(config: &AppConfig) -> Result<Vec<RiskProject>, String> {
    config
        .gateway()
        .fetch_json(RISK_PROJECTS)
        .await
        .map_err(|e| e.to_string())
}

/// The five newest projects
pub async fn list_recent_projects(config: &AppConfig) -> Result<Vec<RecentProject>, String> {
    config
        .gateway()
        .fetch_json(RECENT_PROJECTS)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_project(config: &AppConfig, project_id: u32) -> Result<ProjectDetail, String> {
    config
        .gateway()
        .fetch_json(&format!("/admin/api/project/{}", project_id))
        .await
        .map_err(|e| e.to_string())
}
