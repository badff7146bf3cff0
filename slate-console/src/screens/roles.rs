//! Role screen (roles, permission and menu assignment)

use crate::error::EditorResult;
use crate::store::QueryCache;
use shared::models::{AssignMenus, AssignPermissions, Permission, Role};
use shared::request::PageRequest;
use shared::response::PageResponse;
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;

/// Cache key of the role page snapshot
pub const ROLE_PAGE_KEY: &str = "roleList";

/// Cache key of the permission catalog
pub const PERMISSION_LIST_KEY: &str = "permissionList";

/// Role management screen
pub struct RoleScreen<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    filter: PageRequest,
    snapshot: Option<PageResponse<Role>>,
}

impl<C: HttpClient> RoleScreen<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            filter: PageRequest::default(),
            snapshot: None,
        }
    }

    pub fn snapshot(&self) -> Option<&PageResponse<Role>> {
        self.snapshot.as_ref()
    }

    /// Fetch the role page and replace the snapshot
    pub async fn load(&mut self) -> EditorResult<&PageResponse<Role>> {
        let page = self.client.roles().page(&self.filter).await?;
        self.cache.put(ROLE_PAGE_KEY, serde_json::to_value(&page)?);
        Ok(self.snapshot.insert(page))
    }

    /// Permission catalog for the assignment dialog
    pub async fn permissions(&self) -> EditorResult<Vec<Permission>> {
        let permissions = self.client.permissions().list().await?;
        self.cache
            .put(PERMISSION_LIST_KEY, serde_json::to_value(&permissions)?);
        Ok(permissions)
    }

    /// Replace a role's permission set and reload
    pub async fn assign_permissions(
        &mut self,
        role_id: i64,
        permission_ids: Vec<i64>,
    ) -> EditorResult<()> {
        let assign = AssignPermissions {
            role_id,
            permission_ids,
        };
        self.client.permissions().assign_to_role(&assign).await?;
        self.reload().await
    }

    /// Replace a role's menu set and reload
    ///
    /// The user's own navigation may have changed, so its cache entry is
    /// dropped along with the role snapshot.
    pub async fn assign_menus(&mut self, role_id: i64, menu_ids: Vec<i64>) -> EditorResult<()> {
        let assign = AssignMenus { role_id, menu_ids };
        self.client.menus().assign_to_role(&assign).await?;
        self.cache
            .invalidate(crate::menu::editor::USER_PERMISSION_KEY);
        self.reload().await
    }

    async fn reload(&mut self) -> EditorResult<()> {
        self.cache.invalidate(ROLE_PAGE_KEY);
        self.load().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::editor::USER_PERMISSION_KEY;
    use crate::test_support::{ok_envelope, FakeTransport};
    use serde_json::json;

    fn role_page() -> serde_json::Value {
        ok_envelope(json!({
            "records": [{
                "roleId": 1, "roleCode": "ops", "roleName": "Operator",
                "description": ""
            }],
            "pagination": {"current": "1", "size": "10", "total": "1", "pages": "1"}
        }))
    }

    #[tokio::test]
    async fn test_assign_menus_drops_navigation_cache() {
        let transport = FakeTransport::new();
        transport.on(
            "POST",
            "/api/system/role/assign-menus",
            ok_envelope(json!(null)),
        );
        transport.on("POST", "/api/system/role/page", role_page());

        let cache = Arc::new(QueryCache::new());
        cache.put(USER_PERMISSION_KEY, json!([]));

        let mut screen = RoleScreen::new(SlateClient::new(transport), cache.clone());
        screen.assign_menus(1, vec![7, 8]).await.unwrap();

        assert!(cache.get_raw(USER_PERMISSION_KEY).is_none());
        let calls = screen.client.transport().calls();
        assert_eq!(
            calls[0].body.as_ref().unwrap(),
            &json!({"roleId": 1, "menuIds": [7, 8]})
        );
    }

    #[tokio::test]
    async fn test_load_role_page() {
        let transport = FakeTransport::new();
        transport.on("POST", "/api/system/role/page", role_page());

        let mut screen = RoleScreen::new(
            SlateClient::new(transport),
            Arc::new(QueryCache::new()),
        );
        let page = screen.load().await.unwrap();
        assert_eq!(page.records[0].role_code, "ops");
    }
}
