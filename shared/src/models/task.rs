//! Task Model
//!
//! Platform engagement tasks, their types and groups.

use super::reward::TaskReward;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: i64,
    pub task_name: String,
    pub task_content: String,
    pub max_completion_times: i32,
    pub task_url: String,
    pub is_external: bool,
    pub is_active: bool,
    pub module: String,
    pub display_order: i32,
    pub start_time: String,
    pub end_time: String,
    pub create_time: String,
    pub update_time: String,
    /// Comma-separated type names
    pub types: String,
    #[serde(default)]
    pub groups: Vec<TaskGroup>,
    #[serde(default)]
    pub rewards: Vec<TaskReward>,
}

/// Create/update task payload (entity minus ids and timestamps)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    #[validate(length(min = 1, max = 64))]
    pub task_name: String,
    pub task_content: String,
    #[validate(range(min = 1))]
    pub max_completion_times: i32,
    pub task_url: String,
    pub is_external: bool,
    pub is_active: bool,
    pub module: String,
    #[validate(range(min = 0))]
    pub display_order: i32,
    pub start_time: String,
    pub end_time: String,
    pub types: String,
}

/// Task page filter (`POST /api/admin/tasks/page`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPageRequest {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TaskPageRequest {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            sort_field: None,
            sort_mode: None,
            task_name: None,
            is_active: None,
        }
    }
}

/// Task type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskType {
    pub type_id: i64,
    pub type_name: String,
    pub description: Option<String>,
    /// Completion window: daily, weekly, once, ...
    pub period_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Task group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub group_id: i64,
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Create task group payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroupCreate {
    #[validate(length(min = 1, max = 64))]
    pub group_name: String,
    pub group_description: String,
}

/// Assign a group to a task (`POST /api/admin/tasks/{taskId}/group`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroupAssign {
    pub group_id: i64,
}

/// Assign a type to a task (`POST /api/admin/tasks/{taskId}/types`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTypeAssign {
    pub task_type_id: i64,
}
