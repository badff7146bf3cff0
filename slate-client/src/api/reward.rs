//! Reward endpoints (`/api/admin/rewards`, `/api/admin/tasks/rewards`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{RewardType, TaskReward, TaskRewardAdd, TaskRewardUpdate};
use shared::request::PageRequest;
use shared::response::{ApiResponse, PageResponse};

/// Reward API
pub struct RewardApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> RewardApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch one page of the reward-type catalog
    pub async fn type_page(&self, request: &PageRequest) -> ClientResult<PageResponse<RewardType>> {
        let resp: ApiResponse<PageResponse<RewardType>> = self
            .transport
            .post("/api/admin/rewards/page", request)
            .await?;
        take_data(resp)
    }

    /// Create a reward type
    pub async fn create_type(&self, reward: &RewardType) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/admin/rewards", reward).await?;
        expect_ok(resp)
    }

    /// Rewards bound to a task
    pub async fn for_task(&self, task_id: i64) -> ClientResult<Vec<TaskReward>> {
        let resp: ApiResponse<Vec<TaskReward>> = self
            .transport
            .get(&format!("/api/admin/tasks/rewards/{}", task_id))
            .await?;
        take_data(resp)
    }

    /// Bind a reward to a task
    pub async fn add_to_task(&self, add: &TaskRewardAdd) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post(&format!("/api/admin/tasks/rewards/{}", add.task_id), add)
            .await?;
        expect_ok(resp)
    }

    /// Change a bound reward's value
    pub async fn update(
        &self,
        task_reward_id: i64,
        update: &TaskRewardUpdate,
    ) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .put(
                &format!("/api/admin/tasks/rewards/{}", task_reward_id),
                update,
            )
            .await?;
        expect_ok(resp)
    }

    /// Unbind a reward from its task
    pub async fn remove(&self, task_reward_id: i64) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete(&format!("/api/admin/tasks/rewards/{}", task_reward_id))
            .await?;
        expect_ok(resp)
    }
}
