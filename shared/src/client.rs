//! Client-facing auth and navigation types
//!
//! Types consumed by the console shell: login exchange and the per-user
//! route tree (`GET /api/system/router/user`) the sidebar is built from.

use serde::{Deserialize, Serialize};

/// Admin login payload (`POST /api/login/admin`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// One-time password from the authenticator app
    pub otp: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

/// Per-role slice of the user's navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    pub role: String,
    #[serde(default)]
    pub menu: Vec<crate::models::Menu>,
}

/// Route node as the router endpoint emits it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    pub path: String,
    pub name: String,
    pub component: String,
    pub meta: RouteMeta,
    #[serde(default)]
    pub children: Option<Vec<RouteNode>>,
}

/// Route display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub keep_alive: bool,
}

/// Sidebar entry derived from a [`RouteNode`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub path: String,
    pub name: String,
    pub title: String,
    pub icon: String,
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_node_wire_format() {
        let json = r#"{
            "path": "/system", "name": "system", "component": "Layout",
            "meta": {"title": "System", "icon": "gear", "roles": null,
                     "permissions": null, "hidden": false, "keepAlive": true},
            "children": null
        }"#;
        let node: RouteNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.meta.title, "System");
        assert!(node.meta.keep_alive);
        assert!(node.children.is_none());
    }
}
