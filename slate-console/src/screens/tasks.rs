//! Task screen (tasks, types, groups, rewards)

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{
    Task, TaskCreate, TaskGroupAssign, TaskGroupCreate, TaskPageRequest, TaskReward,
    TaskRewardAdd, TaskRewardUpdate, TaskTypeAssign,
};
use shared::request::PageRequest;
use shared::response::PageResponse;
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the task page snapshot
pub const TASK_PAGE_KEY: &str = "taskPage";

/// Cache key of the task group list
pub const TASK_GROUPS_KEY: &str = "taskGroups";

/// Task management screen
pub struct TaskScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    filter: TaskPageRequest,
    snapshot: Option<PageResponse<Task>>,
}

impl<C: HttpClient> TaskScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            filter: TaskPageRequest::new(1, 10),
            snapshot: None,
        }
    }

    pub fn filter_mut(&mut self) -> &mut TaskPageRequest {
        &mut self.filter
    }

    pub fn snapshot(&self) -> Option<&PageResponse<Task>> {
        self.snapshot.as_ref()
    }

    /// Fetch the current page and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&PageResponse<Task>> {
        let page = self.client.tasks().page(&self.filter).await?;
        self.cache.put(TASK_PAGE_KEY, serde_json::to_value(&page)?);
        Ok(self.snapshot.insert(page))
    }

    /// Create a task and reload
    pub async fn create(&mut self, task: &TaskCreate) -> EditorResult<()> {
        task.validate()?;
        self.client.tasks().create(task).await?;
        self.reload().await
    }

    /// Update a task and reload
    pub async fn update(&mut self, task_id: i64, task: &TaskCreate) -> EditorResult<()> {
        task.validate()?;
        self.client.tasks().update(task_id, task).await?;
        self.reload().await
    }

    /// Toggle a task's active flag and reload
    pub async fn toggle_active(&mut self, task_id: i64) -> EditorResult<()> {
        self.client.tasks().set_active(task_id).await?;
        self.reload().await
    }

    // ==================== Rewards drawer ====================

    /// Rewards bound to a task
    pub async fn rewards(&self, task_id: i64) -> EditorResult<Vec<TaskReward>> {
        Ok(self.client.rewards().for_task(task_id).await?)
    }

    /// Bind a reward to a task
    pub async fn add_reward(&self, add: &TaskRewardAdd) -> EditorResult<()> {
        add.validate()?;
        Ok(self.client.rewards().add_to_task(add).await?)
    }

    /// Change a bound reward's value
    pub async fn update_reward(
        &self,
        task_reward_id: i64,
        update: &TaskRewardUpdate,
    ) -> EditorResult<()> {
        update.validate()?;
        Ok(self.client.rewards().update(task_reward_id, update).await?)
    }

    /// Unbind a reward
    pub async fn remove_reward(&self, task_reward_id: i64) -> EditorResult<()> {
        Ok(self.client.rewards().remove(task_reward_id).await?)
    }

    // ==================== Groups and types ====================

    /// Create a task group
    pub async fn create_group(&self, group: &TaskGroupCreate) -> EditorResult<()> {
        group.validate()?;
        self.client.tasks().create_group(group).await?;
        self.cache.invalidate(TASK_GROUPS_KEY);
        Ok(())
    }

    /// Assign a group to a task
    pub async fn assign_group(&self, task_id: i64, group_id: i64) -> EditorResult<()> {
        let assign = TaskGroupAssign { group_id };
        self.client.tasks().assign_group(task_id, &assign).await?;
        self.cache.invalidate(TASK_GROUPS_KEY);
        Ok(())
    }

    /// Delete a task group
    pub async fn delete_group(&self, group_id: i64) -> EditorResult<()> {
        self.client.tasks().delete_group(group_id).await?;
        self.cache.invalidate(TASK_GROUPS_KEY);
        Ok(())
    }

    /// Assign a type to a task
    pub async fn assign_type(&self, task_id: i64, task_type_id: i64) -> EditorResult<()> {
        let assign = TaskTypeAssign { task_type_id };
        Ok(self.client.tasks().assign_type(task_id, &assign).await?)
    }

    /// Group list for the assignment drawer
    pub async fn groups(
        &self,
        request: &PageRequest,
    ) -> EditorResult<PageResponse<shared::models::TaskGroup>> {
        Ok(self.client.tasks().group_page(request).await?)
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(TASK_PAGE_KEY);
        self.load().await?;
        Ok(())
    }
}
