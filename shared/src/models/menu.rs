//! Menu Model
//!
//! Navigation hierarchy entries. A flat list of these comes back from
//! `GET /api/system/menu/tree`; `parent_id == 0` marks a top-level entry
//! and `children` is ordered by display priority.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parent id carried by top-level menu entries
pub const MENU_ROOT_PARENT: i64 = 0;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub menu_id: i64,
    pub parent_id: i64,
    pub menu_name: String,
    pub path_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
    /// Present only for entries with descendants
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Menu>,
}

impl Menu {
    /// Leaf entry with no children attached yet
    pub fn leaf(menu_id: i64, parent_id: i64, menu_name: impl Into<String>) -> Self {
        Self {
            menu_id,
            parent_id,
            menu_name: menu_name.into(),
            path_url: String::new(),
            icon: None,
            is_external: None,
            children: Vec::new(),
        }
    }

    /// Whether this entry sits at the top level
    pub fn is_root(&self) -> bool {
        self.parent_id == MENU_ROOT_PARENT
    }
}

/// Create menu payload (`POST /api/system/menu/add`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    #[validate(length(min = 1, max = 64))]
    pub menu_name: String,
    #[validate(range(min = 0))]
    pub parent_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub path_url: String,
}

/// Update menu payload (`PUT /api/system/menu/update`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    pub menu_id: i64,
    #[validate(range(min = 0))]
    pub parent_id: i64,
    #[validate(length(min = 1, max = 64))]
    pub menu_name: String,
    #[validate(length(min = 1, max = 255))]
    pub path_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
}

/// Reorder payload (`PUT /api/system/menu/order`)
///
/// `target_menu_id` is the sibling the entry lands before; `None` means
/// "append under `parent_id`" (the backend owns that tie-break).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOrder {
    pub menu_id: i64,
    pub target_menu_id: Option<i64>,
    pub parent_id: i64,
}

/// Role menu assignment payload (`POST /api/system/role/assign-menus`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignMenus {
    pub role_id: i64,
    pub menu_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wire_format() {
        let json = r#"{
            "menuId": 7,
            "parentId": 0,
            "menuName": "System",
            "pathUrl": "/system",
            "icon": "gear",
            "isExternal": false,
            "children": [
                {"menuId": 8, "parentId": 7, "menuName": "Menus", "pathUrl": "/system/menu"}
            ]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.menu_id, 7);
        assert!(menu.is_root());
        assert_eq!(menu.children.len(), 1);
        assert_eq!(menu.children[0].parent_id, 7);
        assert!(menu.children[0].children.is_empty());
    }

    #[test]
    fn test_empty_children_not_serialized() {
        let menu = Menu::leaf(1, 0, "Home");
        let json = serde_json::to_string(&menu).unwrap();
        assert!(!json.contains("children"));
        assert!(json.contains("\"menuId\":1"));
    }

    #[test]
    fn test_order_null_target() {
        let order = MenuOrder {
            menu_id: 3,
            target_menu_id: None,
            parent_id: 1,
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"targetMenuId\":null"));
        assert!(json.contains("\"parentId\":1"));
    }

    #[test]
    fn test_create_validation() {
        use validator::Validate;

        let ok = MenuCreate {
            menu_name: "Series".into(),
            parent_id: 0,
            path_url: "/shorts/series".into(),
        };
        assert!(ok.validate().is_ok());

        let empty_name = MenuCreate {
            menu_name: "".into(),
            parent_id: 0,
            path_url: "/x".into(),
        };
        assert!(empty_name.validate().is_err());
    }
}
