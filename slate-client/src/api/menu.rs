//! Menu endpoints (`/api/system/menu/...`)

use super::{expect_ok, take_data, AnyEnvelope};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{AssignMenus, Menu, MenuCreate, MenuOrder, MenuUpdate};
use shared::response::ApiResponse;

/// Menu API
pub struct MenuApi<'a, C> {
    transport: &'a C,
}

impl<'a, C: HttpClient> MenuApi<'a, C> {
    pub(crate) fn new(transport: &'a C) -> Self {
        Self { transport }
    }

    /// Fetch the full menu forest
    pub async fn tree(&self) -> ClientResult<Vec<Menu>> {
        let resp: ApiResponse<Vec<Menu>> = self.transport.get("/api/system/menu/tree").await?;
        take_data(resp)
    }

    /// Create a menu entry
    pub async fn add(&self, menu: &MenuCreate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.post("/api/system/menu/add", menu).await?;
        expect_ok(resp)
    }

    /// Update a menu entry
    pub async fn update(&self, menu: &MenuUpdate) -> ClientResult<()> {
        let resp: AnyEnvelope = self.transport.put("/api/system/menu/update", menu).await?;
        expect_ok(resp)
    }

    /// Delete a menu entry
    pub async fn delete(&self, menu_id: i64) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .delete(&format!("/api/system/menu/{}", menu_id))
            .await?;
        expect_ok(resp)
    }

    /// Submit a reorder/reparent mutation
    ///
    /// The backend owns final ordering; callers refetch the tree after
    /// this settles.
    pub async fn order(&self, order: &MenuOrder) -> ClientResult<()> {
        tracing::info!(
            menu_id = order.menu_id,
            target_menu_id = ?order.target_menu_id,
            parent_id = order.parent_id,
            "submitting menu reorder"
        );
        let resp: AnyEnvelope = self.transport.put("/api/system/menu/order", order).await?;
        expect_ok(resp)
    }

    /// Replace a role's menu assignment
    pub async fn assign_to_role(&self, assign: &AssignMenus) -> ClientResult<()> {
        let resp: AnyEnvelope = self
            .transport
            .post("/api/system/role/assign-menus", assign)
            .await?;
        expect_ok(resp)
    }
}
