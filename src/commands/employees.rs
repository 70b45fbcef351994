//! Employee Commands

use crate::config::AppConfig;
use crate::models::EmployeeDetail;

/// Profile, current projects and colleagues of one employee
pub async fn get_employee(config: &AppConfig, user_id: u32) -> Result<EmployeeDetail, String> {
    config
        .gateway()
        .fetch_json(&format!("/admin/api/employee/{}", user_id))
        .await
        .map_err(|e| e.to_string())
}
