//! Task Commands
//!
//! Leader-side task reads.

use crate::config::AppConfig;
use crate::models::LeaderTask;

/// Current server copy of a task, used to fill the edit modal
pub async fn get_task(config: &AppConfig, task_id: u32) -> Result<LeaderTask, String> {
    config
        .gateway()
        .fetch_json(&format!("/leader/get_task/{}", task_id))
        .await
        .map_err(|e| e.to_string())
}
