//! Permission Model

use serde::{Deserialize, Serialize};

/// Permission entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub permission_id: i64,
    pub permission_code: String,
    pub permission_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Role permission assignment payload
/// (`POST /api/system/permission/assign-to-role`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissions {
    pub role_id: i64,
    pub permission_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_wire_format() {
        let assign = AssignPermissions {
            role_id: 2,
            permission_ids: vec![10, 11],
        };
        let json = serde_json::to_string(&assign).unwrap();
        assert_eq!(json, r#"{"roleId":2,"permissionIds":[10,11]}"#);
    }
}
