//! Task endpoints (`/api/admin/tasks/...`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{
    Task, TaskCreate, TaskGroup, TaskGroupAssign, TaskGroupCreate, TaskPageRequest, TaskType,
    TaskTypeAssign,
};
use shared::request::PageRequest;
use shared::response::{ApiResponse, PageResponse};

/// Task API
pub struct TaskApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> TaskApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of tasks
    pub async fn page(&self, request: &TaskPageRequest) -> ClientResult<PageResponse<Task>> {
        let resp: ApiResponse<PageResponse<Task>> =
            self.transport.post("/api/admin/tasks/page", request).await?;
        take_data(resp)
    }

    /// Task detail
    pub async fn get(&self, task_id: i64) -> ClientResult<Task> {
        let resp: ApiResponse<Task> = self
            .transport
            .get(&format!("/api/admin/tasks/{}", task_id))
            .await?;
        take_data(resp)
    }

    /// Create a task
    pub async fn create(&self, task: &TaskCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/tasks", task).await?;
        expect_ok(resp)
    }

    /// Replace a task's editable fields
    pub async fn update(&self, task_id: i64, task: &TaskCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(&format!("/api/admin/tasks/{}", task_id), task)
            .await?;
        expect_ok(resp)
    }

    /// Toggle the active flag
    pub async fn set_active(&self, task_id: i64) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put_empty(&format!("/api/admin/tasks/{}/active", task_id))
            .await?;
        expect_ok(resp)
    }

    // ==================== Task types ====================

    /// Fetch one page of task types
    pub async fn type_page(&self, request: &PageRequest) -> ClientResult<PageResponse<TaskType>> {
        let resp: ApiResponse<PageResponse<TaskType>> = self
            .transport
            .post("/api/admin/tasks/type/page", request)
            .await?;
        take_data(resp)
    }

    /// Create a task type
    pub async fn create_type(&self, task_type: &TaskType) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/tasks/type", task_type).await?;
        expect_ok(resp)
    }

    /// Assign a type to a task
    pub async fn assign_type(&self, task_id: i64, assign: &TaskTypeAssign) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post(&format!("/api/admin/tasks/{}/types", task_id), assign)
            .await?;
        expect_ok(resp)
    }

    // ==================== Task groups ====================

    /// Fetch one page of task groups
    pub async fn group_page(&self, request: &PageRequest) -> ClientResult<PageResponse<TaskGroup>> {
        let resp: ApiResponse<PageResponse<TaskGroup>> = self
            .transport
            .post("/api/admin/tasks/group/page", request)
            .await?;
        take_data(resp)
    }

    /// Create a task group
    pub async fn create_group(&self, group: &TaskGroupCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/tasks/group", group).await?;
        expect_ok(resp)
    }

    /// Assign a group to a task
    pub async fn assign_group(&self, task_id: i64, assign: &TaskGroupAssign) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post(&format!("/api/admin/tasks/{}/group", task_id), assign)
            .await?;
        expect_ok(resp)
    }

    /// Delete a task group
    pub async fn delete_group(&self, group_id: i64) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete(&format!("/api/admin/tasks/group/{}/delete", group_id))
            .await?;
        expect_ok(resp)
    }
}
