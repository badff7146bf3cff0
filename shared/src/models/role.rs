//! Role Model

use super::menu::Menu;
use super::permission::Permission;
use serde::{Deserialize, Serialize};

/// Role entity with its assigned permissions and menus
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: i64,
    pub role_code: String,
    pub role_name: String,
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}
