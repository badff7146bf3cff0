//! Reward Model
//!
//! Reward type catalog plus per-task reward bindings.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reward attached to a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReward {
    pub task_reward_id: i64,
    pub reward_type: String,
    pub reward_name: String,
    pub reward_value: i64,
}

/// Reward type catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<i64>,
    pub reward_type: String,
    pub reward_name: String,
    pub description: String,
    pub token_id: i64,
    pub reward_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Bind a reward to a task (`POST /api/admin/tasks/rewards/{taskId}`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskRewardAdd {
    pub task_id: i64,
    pub reward_id: i64,
    #[validate(range(min = 1))]
    pub reward_value: i64,
}

/// Change a bound reward's value (`PUT /api/admin/tasks/rewards/{taskRewardId}`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskRewardUpdate {
    #[validate(range(min = 1))]
    pub reward_value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_type_without_id() {
        let json = r#"{
            "rewardType": "token", "rewardName": "Gold coin",
            "description": "", "tokenId": 3, "rewardSource": "system"
        }"#;
        let rt: RewardType = serde_json::from_str(json).unwrap();
        assert!(rt.reward_id.is_none());
        assert_eq!(rt.token_id, 3);
    }

    #[test]
    fn test_reward_value_must_be_positive() {
        use validator::Validate;
        let bad = TaskRewardUpdate { reward_value: 0 };
        assert!(bad.validate().is_err());
        let ok = TaskRewardUpdate { reward_value: 10 };
        assert!(ok.validate().is_ok());
    }
}
